//! Scenario: Single Function
//!
//! Journey: a root template declares one function. The bundler asks for the
//! manifest, compiles `HelloFn`, asks where the output goes, and finally
//! writes the rewritten template.

use std::path::Path;

use sambundle::infrastructure::template::parse_template;
use serde_yaml_ng::Value;

use crate::common::*;

#[test]
fn scenario_hello_function_manifest_and_output_path() {
    let env = TestEnv::new();
    env.write("template.yml", HELLO_TEMPLATE);

    let mut bundler = env.bundler(env.options(), "template.yml");
    let registry = bundler.entry().unwrap();

    let entries: Vec<_> = registry.input_paths().collect();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].0, "HelloFn");
    assert_eq!(entries[0].1, env.project_path("src/hello/app").as_path());

    assert_eq!(
        bundler.output_path("HelloFn").unwrap(),
        Path::new(".aws-sam/build/HelloFn/index.js")
    );
}

#[test]
fn scenario_hello_function_written_template_round_trips() {
    let env = TestEnv::new();
    env.write("template.yml", HELLO_TEMPLATE);

    let mut bundler = env.bundler(env.options(), "template.yml");
    bundler.entry().unwrap();
    let written = bundler.write_templates().unwrap().into_result().unwrap();

    assert_eq!(written, vec![env.project_path(".aws-sam/build/template.yml")]);

    let content = env.read(".aws-sam/build/template.yml");
    assert!(content.contains("!Ref Table"), "{content}");
    assert!(content.contains("!GetAtt HelloFn.Arn"), "{content}");

    let reloaded = parse_template(&content, &written[0]).unwrap();
    assert_eq!(&reloaded, bundler.graph().unwrap().root.document());

    let properties = &reloaded.resources().unwrap().get("HelloFn").unwrap()["Properties"];
    assert_eq!(properties["Handler"], Value::String("index.handler".into()));
    assert_eq!(properties["CodeUri"], Value::String("HelloFn".into()));
}

#[test]
fn scenario_hello_function_custom_directories() {
    let env = TestEnv::new();
    env.write("infra/template.yml", HELLO_TEMPLATE);

    let options = env
        .options()
        .with_input_dir("infra")
        .with_output_dir("dist");
    let mut bundler = env.bundler(options, "infra/template.yml");

    let input = bundler.entry().unwrap().get("HelloFn").unwrap().input_path().to_path_buf();
    assert_eq!(input, env.project_path("infra/src/hello/app"));
    assert_eq!(
        bundler.output_path("HelloFn").unwrap(),
        Path::new("dist/HelloFn/index.js")
    );

    let written = bundler.write_templates().unwrap().into_result().unwrap();
    assert_eq!(written, vec![env.project_path("dist/template.yml")]);
}

#[test]
fn scenario_resolving_again_replaces_the_graph() {
    let env = TestEnv::new();
    env.write("template.yml", HELLO_TEMPLATE);

    let mut bundler = env.bundler(env.options(), "template.yml");
    assert_eq!(bundler.entry().unwrap().len(), 1);

    env.write("template.yml", INLINE_TEMPLATE);
    let keys: Vec<String> = bundler
        .entry()
        .unwrap()
        .input_paths()
        .map(|(key, _)| key.to_string())
        .collect();

    assert_eq!(keys, vec!["Compiled".to_string()]);
    assert!(bundler.output_path("HelloFn").is_err());
}
