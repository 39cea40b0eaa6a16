//! Stack entity
//!
//! One template file of the graph, together with the entry points extracted
//! from it and its rewritten document.

use std::path::{Path, PathBuf};

use super::{EntryPoint, TemplateDocument};

/// Non-fatal finding raised while extracting a stack
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackWarning {
    pub resource: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Stack {
    template_path: PathBuf,
    template_name: String,
    document: TemplateDocument,
    entry_points: Vec<EntryPoint>,
    warnings: Vec<StackWarning>,
}

impl Stack {
    pub fn new(template_path: impl Into<PathBuf>, document: TemplateDocument) -> Self {
        let template_path = template_path.into();
        let template_name = template_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self {
            template_path,
            template_name,
            document,
            entry_points: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn with_entry_points(mut self, entry_points: Vec<EntryPoint>) -> Self {
        self.entry_points = entry_points;
        self
    }

    pub fn with_warnings(mut self, warnings: Vec<StackWarning>) -> Self {
        self.warnings = warnings;
        self
    }

    /// Path of the template file, as referenced from the root
    pub fn template_path(&self) -> &Path {
        &self.template_path
    }

    /// Base filename of the template
    pub fn template_name(&self) -> &str {
        &self.template_name
    }

    /// Rewritten template document
    pub fn document(&self) -> &TemplateDocument {
        &self.document
    }

    pub fn entry_points(&self) -> &[EntryPoint] {
        &self.entry_points
    }

    pub fn warnings(&self) -> &[StackWarning] {
        &self.warnings
    }
}
