//! Scenario: Broken Templates
//!
//! Journey: the developer's template has a problem. Resolution either stops
//! with one message naming the resource, or, for inline code, warns and
//! carries on.

use sambundle::{ConfigError, SamError};

use crate::common::*;

#[test]
fn scenario_missing_code_uri_names_resource() {
    let env = TestEnv::new();
    env.write("template.yml", MISSING_CODE_URI_TEMPLATE);

    let mut bundler = env.bundler(env.options(), "template.yml");
    let err = bundler.entry().unwrap_err();

    assert!(matches!(
        err,
        SamError::Config(ConfigError::MissingCodeUri { ref resource }) if resource == "NoCode"
    ));
    let message = err.to_string();
    assert!(message.contains("NoCode") && message.contains("CodeUri"), "{message}");
    assert!(bundler.graph().is_err());
}

#[test]
fn scenario_inline_code_warns_but_resolves() {
    let env = TestEnv::new();
    env.write("template.yml", INLINE_TEMPLATE);

    let mut bundler = env.bundler(env.options(), "template.yml");
    let keys: Vec<String> = bundler
        .entry()
        .unwrap()
        .input_paths()
        .map(|(k, _)| k.to_string())
        .collect();

    assert_eq!(keys, vec!["Compiled".to_string()]);
    let warnings = bundler.graph().unwrap().root.warnings();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].resource, "Inline");
}

#[test]
fn scenario_missing_template_is_parse_error() {
    let env = TestEnv::new();

    let mut bundler = env.bundler(env.options(), "template.yml");
    let err = bundler.entry().unwrap_err();

    assert!(matches!(err, SamError::Parse { .. }));
}

#[test]
fn scenario_missing_nested_template_fails_whole_pass() {
    let env = TestEnv::new();
    env.write("template.yml", NESTED_ROOT_TEMPLATE);

    let mut bundler = env.bundler(env.options(), "template.yml");
    let err = bundler.entry().unwrap_err();

    assert!(err.to_string().contains("inner.yaml"), "{err}");
    assert!(bundler.registry().is_err());
}
