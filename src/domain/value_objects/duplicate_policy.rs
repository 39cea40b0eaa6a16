//! Duplicate Resource Key Policy
//!
//! Decides what happens when two stacks in one graph declare a function
//! with the same logical id.

use serde::{Deserialize, Serialize};

/// Policy for duplicate logical ids across stacks
///
/// - `Reject`: fail the resolution pass (default)
/// - `LastWins`: the entry registered last replaces the earlier one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum DuplicatePolicy {
    #[default]
    Reject,
    LastWins,
}
