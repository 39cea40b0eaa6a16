//! TemplateSource port - loads template documents by path

use std::path::Path;

use crate::domain::entities::TemplateDocument;
use crate::error::SamResult;

/// Source of parsed template documents.
///
/// Every call returns a fresh tree; callers may mutate it freely.
pub trait TemplateSource {
    /// Load and parse the template at `path`.
    ///
    /// Fails with `SamError::Parse` if the file is missing or invalid.
    fn load(&self, path: &Path) -> SamResult<TemplateDocument>;
}
