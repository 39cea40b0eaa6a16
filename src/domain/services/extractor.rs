//! Function extractor
//!
//! Resolves one stack: applies the resource path rules to every resource,
//! validates each serverless function and turns it into an entry point, and
//! realigns the function's `CodeUri`/`Handler` with the compiled layout.
//!
//! Resources are rewritten into a fresh collection that replaces the
//! template's `Resources` only once every resource succeeded, so a failed
//! pass never leaves a half-rewritten document behind.

use std::path::{Path, PathBuf};

use serde_yaml_ng::{Mapping, Value};
use tracing::{debug, warn};

use crate::domain::entities::{
    resource_properties_mut, resource_type, EntryPoint, Stack, StackWarning, TemplateDocument,
};
use crate::domain::policies::PathRewriter;
use crate::domain::value_objects::{
    is_remote, normalize_path, relative_path, template_path_string, Handler, ResolveOptions,
    Runtime,
};
use crate::error::{ConfigError, SamError, SamResult};

/// Resource type of functions that get compiled
pub const FUNCTION_TYPE: &str = "AWS::Serverless::Function";

const RUNTIME: &str = "Runtime";
const HANDLER: &str = "Handler";
const CODE_URI: &str = "CodeUri";
const INLINE_CODE: &str = "InlineCode";

/// Stack-wide function defaults from `Globals.Function`
#[derive(Debug, Clone, Default)]
struct FunctionDefaults {
    runtime: Option<Value>,
    handler: Option<Value>,
    code_uri: Option<Value>,
}

impl FunctionDefaults {
    fn from_document(document: &TemplateDocument) -> Self {
        Self {
            runtime: document.function_default(RUNTIME).cloned(),
            handler: document.function_default(HANDLER).cloned(),
            code_uri: document.function_default(CODE_URI).cloned(),
        }
    }
}

pub struct FunctionExtractor<'a> {
    options: &'a ResolveOptions,
}

impl<'a> FunctionExtractor<'a> {
    pub fn new(options: &'a ResolveOptions) -> Self {
        Self { options }
    }

    /// Extract the stack for the template at `template_path`, whose parsed
    /// document is `document`.
    pub fn extract(&self, template_path: &Path, mut document: TemplateDocument) -> SamResult<Stack> {
        let template_file = self.options.absolute(template_path);
        let template_dir = template_file
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.options.working_dir().to_path_buf());
        let rewriter = PathRewriter::new(&template_dir, self.options.input_dir());
        let defaults = FunctionDefaults::from_document(&document);

        let mut entry_points = Vec::new();
        let mut warnings = Vec::new();

        if let Some(resources) = document.resources().cloned() {
            let mut rewritten = Mapping::with_capacity(resources.len());

            for (key, mut resource) in resources {
                let resource_key = logical_id(&key).ok_or_else(|| SamError::Parse {
                    file: template_path.to_path_buf(),
                    message: format!("resource id must be a scalar, got {}", describe(Some(&key))),
                })?;
                let ty = resource_type(&resource).map(str::to_string);

                if let (Some(ty), Some(properties)) = (&ty, resource_properties_mut(&mut resource))
                {
                    for change in rewriter.apply(ty, properties) {
                        debug!(
                            resource = %resource_key,
                            property = %change.property,
                            from = %change.from,
                            to = %change.to,
                            "rewrote local path"
                        );
                    }
                }

                if ty.as_deref() == Some(FUNCTION_TYPE) {
                    let function = FunctionContext {
                        resource_key: &resource_key,
                        template_dir: &template_dir,
                        defaults: &defaults,
                    };
                    match self.extract_function(&function, &mut resource)? {
                        Some(entry_point) => {
                            debug!(
                                resource = %resource_key,
                                input = %entry_point.input_path().display(),
                                output = %entry_point.output_path().display(),
                                "found entry point"
                            );
                            entry_points.push(entry_point);
                        }
                        None => {
                            let message = format!(
                                "inline code for '{}' is not compiled and will be copied as is",
                                resource_key
                            );
                            warn!(template = %template_path.display(), "{}", message);
                            warnings.push(StackWarning {
                                resource: resource_key.clone(),
                                message,
                            });
                        }
                    }
                }

                rewritten.insert(key, resource);
            }

            document.replace_resources(rewritten);
        }

        Ok(Stack::new(template_path, document)
            .with_entry_points(entry_points)
            .with_warnings(warnings))
    }

    /// Validate one function and rewrite it in place.
    ///
    /// Returns `None` for inline-code functions, which are not compiled.
    fn extract_function(
        &self,
        function: &FunctionContext<'_>,
        resource: &mut Value,
    ) -> SamResult<Option<EntryPoint>> {
        let resource_key = function.resource_key;
        let properties = match resource_properties_mut(resource) {
            Some(properties) if !properties.is_empty() => properties,
            _ => {
                return Err(ConfigError::MissingProperties {
                    resource: resource_key.to_string(),
                }
                .into())
            }
        };

        let runtime = match effective(properties, RUNTIME, &function.defaults.runtime) {
            Some(Value::String(runtime)) => runtime.parse::<Runtime>().map_err(|_| {
                ConfigError::UnsupportedRuntime {
                    resource: resource_key.to_string(),
                    runtime: runtime.clone(),
                    supported: Runtime::supported(),
                }
            })?,
            other => {
                return Err(ConfigError::UnsupportedRuntime {
                    resource: resource_key.to_string(),
                    runtime: describe(other),
                    supported: Runtime::supported(),
                }
                .into())
            }
        };

        if properties.get(INLINE_CODE).is_some_and(has_inline_code) {
            return Ok(None);
        }

        let handler = match effective(properties, HANDLER, &function.defaults.handler) {
            None => {
                return Err(ConfigError::MissingHandler {
                    resource: resource_key.to_string(),
                }
                .into())
            }
            Some(Value::String(handler)) => {
                Handler::parse(handler).ok_or_else(|| ConfigError::MalformedHandler {
                    resource: resource_key.to_string(),
                    handler: handler.clone(),
                })?
            }
            Some(other) => {
                return Err(ConfigError::MalformedHandler {
                    resource: resource_key.to_string(),
                    handler: describe(Some(other)),
                }
                .into())
            }
        };

        let code_uri = match effective(properties, CODE_URI, &function.defaults.code_uri) {
            None => {
                return Err(ConfigError::MissingCodeUri {
                    resource: resource_key.to_string(),
                }
                .into())
            }
            Some(Value::String(code_uri)) if !is_remote(code_uri) => code_uri.clone(),
            Some(_) => {
                return Err(ConfigError::InvalidCodeUri {
                    resource: resource_key.to_string(),
                }
                .into())
            }
        };

        let input_path = normalize_path(
            &function
                .template_dir
                .join(&code_uri)
                .join(handler.module()),
        );
        let output_path = normalize_path(
            &self
                .options
                .output_dir()
                .join(resource_key)
                .join(format!("index.{}", runtime.source_extension())),
        );

        let compiled_dir: PathBuf = self.options.input_dir().join(resource_key);
        let compiled_code_uri =
            template_path_string(&relative_path(function.template_dir, &compiled_dir));

        properties.insert(
            Value::String(CODE_URI.to_string()),
            Value::String(compiled_code_uri),
        );
        properties.insert(
            Value::String(HANDLER.to_string()),
            Value::String(handler.compiled()),
        );

        Ok(Some(EntryPoint::new(resource_key, input_path, output_path)))
    }
}

struct FunctionContext<'a> {
    resource_key: &'a str,
    template_dir: &'a Path,
    defaults: &'a FunctionDefaults,
}

/// Resource-level value, else the stack-wide default. Null counts as absent.
fn effective<'v>(properties: &'v Mapping, key: &str, default: &'v Option<Value>) -> Option<&'v Value> {
    properties
        .get(key)
        .filter(|v| !v.is_null())
        .or(default.as_ref())
}

/// Logical id of a resource key. Scalar keys such as `1:` are read as text.
fn logical_id(key: &Value) -> Option<String> {
    match key {
        Value::String(k) => Some(k.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Empty or null `InlineCode` does not count.
fn has_inline_code(code: &Value) -> bool {
    match code {
        Value::Null => false,
        Value::String(code) => !code.is_empty(),
        _ => true,
    }
}

fn describe(value: Option<&Value>) -> String {
    match value {
        None => "<none>".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Tagged(tagged)) => format!("{} intrinsic", tagged.tag),
        Some(other) => serde_yaml_ng::to_string(other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_else(|_| "<unknown>".to_string()),
    }
}
