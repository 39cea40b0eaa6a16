//! Domain Policies
//!
//! Business rules that govern how templates are rewritten.

mod path_rules;

pub use path_rules::{
    local_value, rules_for, PathRewriter, PropertyRule, ResourceRules, RewriteKind, RewrittenPath,
    NESTED_STACK_TYPE, PATH_RULES,
};
