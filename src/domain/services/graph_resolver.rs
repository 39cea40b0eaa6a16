//! Stack graph resolver
//!
//! Resolves the root template and the nested stacks it references.
//!
//! Nested-stack discovery is a separate pass over a freshly loaded copy of
//! each template: rewriting a `TemplateURL` and resolving the file it names
//! are different concerns.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::entities::{
    resource_properties, resource_type, Stack, TemplateDocument, TemplateGraph,
};
use crate::domain::policies::{local_value, rules_for, RewriteKind};
use crate::domain::ports::TemplateSource;
use crate::domain::services::FunctionExtractor;
use crate::domain::value_objects::{normalize_path, ResolveOptions};
use crate::error::SamResult;

pub struct GraphResolver<'a> {
    source: &'a dyn TemplateSource,
    options: &'a ResolveOptions,
}

impl<'a> GraphResolver<'a> {
    pub fn new(source: &'a dyn TemplateSource, options: &'a ResolveOptions) -> Self {
        Self { source, options }
    }

    /// Resolve the graph rooted at `root_template`.
    ///
    /// Nested stacks are followed up to `max_depth` levels; a template that
    /// is already part of the graph is not resolved again.
    pub fn resolve(&self, root_template: &Path) -> SamResult<TemplateGraph> {
        let root_path = normalize_path(root_template);
        let root = self.resolve_stack(&root_path)?;

        let mut seen = HashSet::new();
        seen.insert(self.options.absolute(&root_path));

        let mut nested = Vec::new();
        self.resolve_nested(&root_path, 1, &mut seen, &mut nested)?;

        Ok(TemplateGraph::new(root, nested))
    }

    /// Load and extract a single template
    pub fn resolve_stack(&self, template_path: &Path) -> SamResult<Stack> {
        let document = self.source.load(template_path)?;
        FunctionExtractor::new(self.options).extract(template_path, document)
    }

    fn resolve_nested(
        &self,
        parent: &Path,
        depth: usize,
        seen: &mut HashSet<PathBuf>,
        out: &mut Vec<Stack>,
    ) -> SamResult<()> {
        if depth > self.options.max_depth() {
            return Ok(());
        }

        let raw = self.source.load(parent)?;
        for reference in nested_stack_references(&raw, parent) {
            if !seen.insert(self.options.absolute(&reference)) {
                debug!(template = %reference.display(), "nested template already resolved");
                continue;
            }

            debug!(
                parent = %parent.display(),
                template = %reference.display(),
                depth,
                "resolving nested stack"
            );
            out.push(self.resolve_stack(&reference)?);
            self.resolve_nested(&reference, depth + 1, seen, out)?;
        }

        Ok(())
    }
}

/// Local nested-stack template paths referenced by `document`, resolved
/// against the directory of `template_path`. Remote references are skipped.
pub fn nested_stack_references(document: &TemplateDocument, template_path: &Path) -> Vec<PathBuf> {
    let base = template_path.parent().unwrap_or_else(|| Path::new(""));
    let Some(resources) = document.resources() else {
        return Vec::new();
    };

    let mut references = Vec::new();
    for resource in resources.values() {
        let (Some(ty), Some(properties)) = (resource_type(resource), resource_properties(resource))
        else {
            continue;
        };

        for rule in rules_for(ty) {
            if rule.kind != RewriteKind::NestedTemplate {
                continue;
            }
            if let Some(location) = local_value(properties, rule.path) {
                references.push(normalize_path(&base.join(location)));
            }
        }
    }

    references
}
