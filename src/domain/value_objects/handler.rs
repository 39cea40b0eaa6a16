//! Function handler value object

use std::fmt;

/// Separator between the module part and the exported function
pub const HANDLER_SEPARATOR: char = '.';

/// A parsed `<module>.<function>` handler string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Handler {
    module: String,
    function: String,
}

impl Handler {
    /// Parse a handler. The value must contain exactly one `.`.
    pub fn parse(value: &str) -> Option<Self> {
        let mut parts = value.split(HANDLER_SEPARATOR);
        let module = parts.next()?;
        let function = parts.next()?;
        if parts.next().is_some() {
            return None;
        }

        Some(Self {
            module: module.to_string(),
            function: function.to_string(),
        })
    }

    /// File/module part, resolved against the function's CodeUri
    pub fn module(&self) -> &str {
        &self.module
    }

    /// Exported entry function
    pub fn function(&self) -> &str {
        &self.function
    }

    /// Handler of the compiled output, which always lives in `index.<ext>`
    pub fn compiled(&self) -> String {
        format!("index{}{}", HANDLER_SEPARATOR, self.function)
    }
}

impl fmt::Display for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.module, HANDLER_SEPARATOR, self.function)
    }
}
