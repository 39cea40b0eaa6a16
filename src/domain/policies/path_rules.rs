//! Resource Path Rules
//!
//! Resource properties that name a local file or directory the package step
//! uploads. After the template moves to the build output root, those values
//! must be expressed relative to the input base directory. Remote
//! (`s3://`) values and non-string values (intrinsics, S3 location objects)
//! are left alone.
//!
//! Supporting another resource type is a table edit.

use std::path::Path;

use serde_yaml_ng::{Mapping, Value};

use crate::domain::value_objects::{is_remote, relative_path, template_path_string};

/// What a matched property refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RewriteKind {
    /// A file or directory packaged as-is
    LocalFile,
    /// Another template, resolved as a nested stack
    NestedTemplate,
}

/// A property path inside `Properties`, e.g. `["Command", "ScriptLocation"]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyRule {
    pub path: &'static [&'static str],
    pub kind: RewriteKind,
}

impl PropertyRule {
    const fn file(path: &'static [&'static str]) -> Self {
        Self {
            path,
            kind: RewriteKind::LocalFile,
        }
    }

    /// Dotted form of the property path, for logs
    pub fn display_path(&self) -> String {
        self.path.join(".")
    }
}

/// Rules for one resource type
#[derive(Debug, Clone, Copy)]
pub struct ResourceRules {
    pub resource_type: &'static str,
    pub rules: &'static [PropertyRule],
}

/// Resource type of nested stacks
pub const NESTED_STACK_TYPE: &str = "AWS::CloudFormation::Stack";

pub static PATH_RULES: &[ResourceRules] = &[
    ResourceRules {
        resource_type: "AWS::ApiGateway::RestApi",
        rules: &[PropertyRule::file(&["BodyS3Location"])],
    },
    ResourceRules {
        resource_type: "AWS::Lambda::Function",
        rules: &[PropertyRule::file(&["Code"])],
    },
    ResourceRules {
        resource_type: "AWS::AppSync::GraphQLSchema",
        rules: &[PropertyRule::file(&["DefinitionS3Location"])],
    },
    ResourceRules {
        resource_type: "AWS::AppSync::Resolver",
        rules: &[
            PropertyRule::file(&["RequestMappingTemplateS3Location"]),
            PropertyRule::file(&["ResponseMappingTemplateS3Location"]),
        ],
    },
    ResourceRules {
        resource_type: "AWS::Serverless::Api",
        rules: &[PropertyRule::file(&["DefinitionUri"])],
    },
    ResourceRules {
        resource_type: "AWS::Include",
        rules: &[PropertyRule::file(&["Location"])],
    },
    ResourceRules {
        resource_type: "AWS::ElasticBeanstalk::ApplicationVersion",
        rules: &[PropertyRule::file(&["SourceBundle"])],
    },
    ResourceRules {
        resource_type: NESTED_STACK_TYPE,
        rules: &[PropertyRule {
            path: &["TemplateURL"],
            kind: RewriteKind::NestedTemplate,
        }],
    },
    ResourceRules {
        resource_type: "AWS::Glue::Job",
        rules: &[PropertyRule::file(&["Command", "ScriptLocation"])],
    },
    ResourceRules {
        resource_type: "AWS::StepFunctions::StateMachine",
        rules: &[PropertyRule::file(&["DefinitionS3Location"])],
    },
];

/// Rules that apply to `resource_type` (empty for unknown types)
pub fn rules_for(resource_type: &str) -> &'static [PropertyRule] {
    PATH_RULES
        .iter()
        .find(|r| r.resource_type == resource_type)
        .map(|r| r.rules)
        .unwrap_or(&[])
}

/// Local string value at `path` inside `properties`, if the rule would
/// rewrite it
pub fn local_value<'a>(properties: &'a Mapping, path: &[&str]) -> Option<&'a str> {
    let (last, parents) = path.split_last()?;
    let mut current = properties;
    for segment in parents {
        match current.get(*segment) {
            Some(Value::Mapping(next)) => current = next,
            _ => return None,
        }
    }

    match current.get(*last) {
        Some(Value::String(value)) if !is_remote(value) => Some(value.as_str()),
        _ => None,
    }
}

fn local_value_mut<'a>(properties: &'a mut Mapping, path: &[&str]) -> Option<&'a mut String> {
    let (last, parents) = path.split_last()?;
    let mut current = properties;
    for segment in parents {
        match current.get_mut(*segment) {
            Some(Value::Mapping(next)) => current = next,
            _ => return None,
        }
    }

    match current.get_mut(*last) {
        Some(Value::String(value)) if !is_remote(value.as_str()) => Some(value),
        _ => None,
    }
}

/// A property value that was rewritten
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewrittenPath {
    pub property: String,
    pub from: String,
    pub to: String,
}

/// Applies [`PATH_RULES`] for one template.
///
/// Values are resolved against the template's own directory and rewritten
/// relative to the input base directory. Both directories must be absolute.
#[derive(Debug, Clone, Copy)]
pub struct PathRewriter<'a> {
    template_dir: &'a Path,
    input_dir: &'a Path,
}

impl<'a> PathRewriter<'a> {
    pub fn new(template_dir: &'a Path, input_dir: &'a Path) -> Self {
        Self {
            template_dir,
            input_dir,
        }
    }

    /// Rewrite a single local reference
    pub fn rewrite_value(&self, value: &str) -> String {
        let target = self.template_dir.join(value);
        template_path_string(&relative_path(self.input_dir, &target))
    }

    /// Rewrite every matching property of one resource in place
    pub fn apply(&self, resource_type: &str, properties: &mut Mapping) -> Vec<RewrittenPath> {
        let mut rewritten = Vec::new();

        for rule in rules_for(resource_type) {
            if let Some(value) = local_value_mut(properties, rule.path) {
                let to = self.rewrite_value(value);
                let from = std::mem::replace(value, to.clone());
                rewritten.push(RewrittenPath {
                    property: rule.display_path(),
                    from,
                    to,
                });
            }
        }

        rewritten
    }
}
