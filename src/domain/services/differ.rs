//! Differ Domain Service
//!
//! Compares the template currently on disk with the rewritten one, for
//! previewing what a write would change.

use similar::{ChangeTag, TextDiff};

/// Type of change in a diff
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffTag {
    Delete,
    Insert,
    Equal,
}

impl From<ChangeTag> for DiffTag {
    fn from(tag: ChangeTag) -> Self {
        match tag {
            ChangeTag::Delete => DiffTag::Delete,
            ChangeTag::Insert => DiffTag::Insert,
            ChangeTag::Equal => DiffTag::Equal,
        }
    }
}

/// Result of comparing two template renderings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiffResult {
    /// Unified diff text, empty when nothing changed
    pub unified: String,
    pub additions: usize,
    pub deletions: usize,
}

impl DiffResult {
    pub fn has_changes(&self) -> bool {
        self.additions > 0 || self.deletions > 0
    }

    /// Short summary, e.g. "+5, -3"
    pub fn summary(&self) -> String {
        format!("+{}, -{}", self.additions, self.deletions)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Differ;

impl Differ {
    pub fn new() -> Self {
        Self
    }

    /// Line diff of `old` against `new`, labelled with `label` in the
    /// unified header.
    pub fn diff(&self, label: &str, old: &str, new: &str) -> DiffResult {
        let text_diff = TextDiff::from_lines(old, new);

        let mut result = DiffResult::default();
        for change in text_diff.iter_all_changes() {
            match DiffTag::from(change.tag()) {
                DiffTag::Delete => result.deletions += 1,
                DiffTag::Insert => result.additions += 1,
                DiffTag::Equal => {}
            }
        }

        if result.has_changes() {
            result.unified = text_diff
                .unified_diff()
                .context_radius(3)
                .header(&format!("a/{label}"), &format!("b/{label}"))
                .to_string();
        }
        result
    }
}
