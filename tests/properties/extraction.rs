//! Property tests for stack extraction.

use std::path::{Path, PathBuf};

use proptest::prelude::*;

use sambundle::domain::services::FunctionExtractor;
use sambundle::infrastructure::template::parse_template;
use sambundle::{ConfigError, ResolveOptions, SamError};
use serde_yaml_ng::Value;

fn extract(yaml: &str, options: &ResolveOptions) -> sambundle::SamResult<sambundle::Stack> {
    let document = parse_template(yaml, Path::new("template.yml")).unwrap();
    FunctionExtractor::new(options).extract(Path::new("template.yml"), document)
}

fn logical_id() -> impl Strategy<Value = String> {
    // Prefixed so a generated id never reads as a YAML bool or null
    "Fn[A-Za-z0-9]{0,18}"
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Remote locations are never rewritten.
    #[test]
    fn property_remote_locations_are_untouched(key in "[a-z0-9/._-]{1,30}") {
        let location = format!("s3://bucket/{key}");
        let yaml = format!(
            "Resources:\n  Api:\n    Type: AWS::Serverless::Api\n    Properties:\n      DefinitionUri: '{location}'\n"
        );
        let stack = extract(&yaml, &ResolveOptions::new("/work").with_input_dir("other")).unwrap();

        let value = &stack.document().resources().unwrap().get("Api").unwrap()["Properties"]["DefinitionUri"];
        prop_assert_eq!(value, &Value::String(location));
    }

    /// PROPERTY: Every valid function yields one entry point at
    /// `<output>/<key>/index.js`.
    #[test]
    fn property_valid_function_output_path(
        key in logical_id(),
        output in "[a-z]{1,8}(/[a-z]{1,8}){0,2}",
    ) {
        let yaml = format!(
            "Resources:\n  {key}:\n    Type: AWS::Serverless::Function\n    Properties:\n      Runtime: nodejs14.x\n      Handler: app.handler\n      CodeUri: src\n"
        );
        let options = ResolveOptions::new("/work").with_output_dir(&output);
        let stack = extract(&yaml, &options).unwrap();

        prop_assert_eq!(stack.entry_points().len(), 1);
        let entry = &stack.entry_points()[0];
        prop_assert_eq!(entry.resource_key(), key.as_str());
        prop_assert_eq!(
            entry.output_path().to_path_buf(),
            PathBuf::from(&output).join(&key).join("index.js")
        );
        prop_assert!(entry.input_path().is_absolute());
    }

    /// PROPERTY: Runtimes outside the allow-list are rejected with the
    /// allow-list in the message.
    #[test]
    fn property_unsupported_runtime_is_rejected(runtime in "(python|java|go|ruby|nodejs)[0-9]{1,2}\\.[0-9x]") {
        prop_assume!(!["nodejs10.x", "nodejs12.x", "nodejs14.x"].contains(&runtime.as_str()));
        let yaml = format!(
            "Resources:\n  Fn:\n    Type: AWS::Serverless::Function\n    Properties:\n      Runtime: '{runtime}'\n      Handler: app.handler\n      CodeUri: src\n"
        );

        match extract(&yaml, &ResolveOptions::new("/work")) {
            Err(SamError::Config(err @ ConfigError::UnsupportedRuntime { .. })) => {
                let message = err.to_string();
                prop_assert!(message.contains("Fn"));
                prop_assert!(message.contains("nodejs14.x"));
            }
            other => prop_assert!(false, "expected unsupported runtime, got {:?}", other.map(|_| ())),
        }
    }
}
