//! Template graph entity

use super::Stack;

/// A fully resolved deployment unit: the root stack plus every nested stack
/// that was resolved from a local template reference.
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateGraph {
    pub root: Stack,
    pub nested: Vec<Stack>,
}

impl TemplateGraph {
    pub fn new(root: Stack, nested: Vec<Stack>) -> Self {
        Self { root, nested }
    }

    /// Every stack, nested stacks first and the root last.
    ///
    /// This is the order entry points are registered and templates written.
    pub fn stacks(&self) -> impl Iterator<Item = &Stack> {
        self.nested.iter().chain(std::iter::once(&self.root))
    }

    pub fn entry_point_count(&self) -> usize {
        self.stacks().map(|s| s.entry_points().len()).sum()
    }
}
