//! Scenario: Nested Stacks
//!
//! Journey: the root template pulls in a local nested stack and a remote
//! one. Only the local stack is resolved; its functions join the manifest
//! ahead of the root's, and both templates are written under the output
//! root in the same layout.

use std::path::Path;

use sambundle::{ConfigError, DuplicatePolicy, SamError};
use serde_yaml_ng::Value;

use crate::common::*;

fn nested_env() -> TestEnv {
    let env = TestEnv::new();
    env.write("template.yml", NESTED_ROOT_TEMPLATE)
        .write("nested/inner.yaml", INNER_TEMPLATE);
    env
}

#[test]
fn scenario_local_nested_stack_is_resolved_remote_is_not() {
    let env = nested_env();
    let mut bundler = env.bundler(env.options(), "template.yml");
    bundler.entry().unwrap();

    let graph = bundler.graph().unwrap();
    assert_eq!(graph.nested.len(), 1);
    assert_eq!(graph.nested[0].template_path(), Path::new("nested/inner.yaml"));

    let root_resources = graph.root.document().resources().unwrap();
    assert_eq!(
        root_resources.get("Shared").unwrap()["Properties"]["TemplateURL"],
        Value::String("s3://bucket/key".into())
    );
}

#[test]
fn scenario_nested_entry_points_come_first() {
    let env = nested_env();
    let mut bundler = env.bundler(env.options(), "template.yml");

    let keys: Vec<&str> = bundler.entry().unwrap().input_paths().map(|(k, _)| k).collect();

    assert_eq!(keys, vec!["InnerFn", "RootFn"]);
}

#[test]
fn scenario_nested_templates_are_written_in_layout() {
    let env = nested_env();
    let mut bundler = env.bundler(env.options(), "template.yml");
    bundler.entry().unwrap();

    let written = bundler.write_templates().unwrap().into_result().unwrap();
    assert_eq!(
        written,
        vec![
            env.project_path(".aws-sam/build/nested/inner.yaml"),
            env.project_path(".aws-sam/build/template.yml"),
        ]
    );

    let inner = env.read(".aws-sam/build/nested/inner.yaml");
    assert!(inner.contains("CodeUri: ../InnerFn"), "{inner}");
    assert!(inner.contains("Handler: index.run"), "{inner}");
    assert!(inner.contains("DefinitionS3Location: nested/schema.graphql"), "{inner}");
}

#[test]
fn scenario_duplicate_function_ids_follow_policy() {
    let env = TestEnv::new();
    env.write("template.yml", NESTED_ROOT_TEMPLATE).write(
        "nested/inner.yaml",
        &INNER_TEMPLATE.replace("InnerFn", "RootFn"),
    );

    let mut rejecting = env.bundler(env.options(), "template.yml");
    let err = rejecting.entry().unwrap_err();
    assert!(matches!(
        err,
        SamError::Config(ConfigError::DuplicateResourceKey { ref resource, .. }) if resource == "RootFn"
    ));

    let options = env.options().with_duplicates(DuplicatePolicy::LastWins);
    let mut last_wins = env.bundler(options, "template.yml");
    let registry = last_wins.entry().unwrap();
    assert_eq!(registry.len(), 1);
    assert_eq!(
        registry.get("RootFn").unwrap().input_path(),
        env.project_path("src/root/index").as_path()
    );
}

#[test]
fn scenario_depth_zero_keeps_nested_stack_unresolved() {
    let env = nested_env();
    let mut bundler = env.bundler(env.options().with_max_depth(0), "template.yml");

    let keys: Vec<&str> = bundler.entry().unwrap().input_paths().map(|(k, _)| k).collect();

    assert_eq!(keys, vec!["RootFn"]);
}
