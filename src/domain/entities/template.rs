//! Template document entity
//!
//! A parsed template tree. Intrinsic tags (`!Ref`, `!Sub`, `!GetAtt`, ...)
//! are kept as tagged values so they serialize back unchanged.

use serde_yaml_ng::{Mapping, Value};

const RESOURCES: &str = "Resources";
const GLOBALS: &str = "Globals";
const FUNCTION: &str = "Function";

#[derive(Debug, Clone, PartialEq)]
pub struct TemplateDocument {
    root: Mapping,
}

impl TemplateDocument {
    pub fn new(root: Mapping) -> Self {
        Self { root }
    }

    /// Wrap a parsed value. Only a top-level mapping is a template.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Mapping(root) => Some(Self { root }),
            _ => None,
        }
    }

    pub fn root(&self) -> &Mapping {
        &self.root
    }

    /// The `Resources` section, if present and a mapping
    pub fn resources(&self) -> Option<&Mapping> {
        match self.root.get(RESOURCES) {
            Some(Value::Mapping(resources)) => Some(resources),
            _ => None,
        }
    }

    /// Replace the `Resources` section, keeping its position in the document
    pub fn replace_resources(&mut self, resources: Mapping) {
        self.root
            .insert(Value::String(RESOURCES.to_string()), Value::Mapping(resources));
    }

    /// Stack-wide function default from `Globals.Function.<key>`
    pub fn function_default(&self, key: &str) -> Option<&Value> {
        let globals = match self.root.get(GLOBALS) {
            Some(Value::Mapping(globals)) => globals,
            _ => return None,
        };
        let function = match globals.get(FUNCTION) {
            Some(Value::Mapping(function)) => function,
            _ => return None,
        };
        function.get(key).filter(|v| !v.is_null())
    }
}

/// `Type` of a resource definition, when it is a plain string
pub fn resource_type(resource: &Value) -> Option<&str> {
    match resource {
        Value::Mapping(resource) => match resource.get("Type") {
            Some(Value::String(ty)) => Some(ty.as_str()),
            _ => None,
        },
        _ => None,
    }
}

/// `Properties` of a resource definition, when it is a mapping
pub fn resource_properties(resource: &Value) -> Option<&Mapping> {
    match resource {
        Value::Mapping(resource) => match resource.get("Properties") {
            Some(Value::Mapping(properties)) => Some(properties),
            _ => None,
        },
        _ => None,
    }
}

/// Mutable `Properties` of a resource definition
pub fn resource_properties_mut(resource: &mut Value) -> Option<&mut Mapping> {
    match resource {
        Value::Mapping(resource) => match resource.get_mut("Properties") {
            Some(Value::Mapping(properties)) => Some(properties),
            _ => None,
        },
        _ => None,
    }
}
