//! Supported function runtimes

use std::fmt;
use std::str::FromStr;

/// Managed runtime a function can be compiled for.
///
/// Only runtimes whose handlers the bundler can produce are listed here;
/// every other value is rejected during extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Runtime {
    Nodejs10,
    Nodejs12,
    Nodejs14,
}

impl Runtime {
    /// All supported runtimes, in allow-list order
    pub const ALL: [Runtime; 3] = [Runtime::Nodejs10, Runtime::Nodejs12, Runtime::Nodejs14];

    /// Identifier used in templates
    pub fn as_str(&self) -> &'static str {
        match self {
            Runtime::Nodejs10 => "nodejs10.x",
            Runtime::Nodejs12 => "nodejs12.x",
            Runtime::Nodejs14 => "nodejs14.x",
        }
    }

    /// Extension of the compiled entry file (`index.<ext>`)
    pub fn source_extension(&self) -> &'static str {
        match self {
            Runtime::Nodejs10 | Runtime::Nodejs12 | Runtime::Nodejs14 => "js",
        }
    }

    /// The allow-list as owned strings, for error reporting
    pub fn supported() -> Vec<String> {
        Self::ALL.iter().map(|r| r.as_str().to_string()).collect()
    }
}

impl FromStr for Runtime {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|r| r.as_str() == s).ok_or(())
    }
}

impl fmt::Display for Runtime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
