//! Template loader
//!
//! Reads a template through the `FileSystem` port and parses it, keeping
//! intrinsic tags (`!Ref`, `!GetAtt`, ...) as tagged values.

use std::path::{Path, PathBuf};

use serde_yaml_ng::Value;

use crate::domain::entities::TemplateDocument;
use crate::domain::ports::{FileSystem, TemplateSource};
use crate::domain::value_objects::absolutize;
use crate::error::{SamError, SamResult};

pub struct TemplateLoader<'a> {
    fs: &'a dyn FileSystem,
    working_dir: PathBuf,
}

impl<'a> TemplateLoader<'a> {
    /// Loader resolving relative template paths against `working_dir`
    pub fn new(fs: &'a dyn FileSystem, working_dir: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            working_dir: working_dir.into(),
        }
    }
}

impl TemplateSource for TemplateLoader<'_> {
    fn load(&self, path: &Path) -> SamResult<TemplateDocument> {
        let file = absolutize(&self.working_dir, path);
        let content = self.fs.read(&file).map_err(|e| SamError::Parse {
            file: path.to_path_buf(),
            message: e.to_string(),
        })?;
        parse_template(&content, path)
    }
}

/// Parse template text. `file` is only used for error reporting.
pub fn parse_template(content: &str, file: &Path) -> SamResult<TemplateDocument> {
    let value: Value = serde_yaml_ng::from_str(content).map_err(|e| SamError::Parse {
        file: file.to_path_buf(),
        message: e.to_string(),
    })?;

    TemplateDocument::from_value(value).ok_or_else(|| SamError::Parse {
        file: file.to_path_buf(),
        message: "template must be a mapping at the top level".to_string(),
    })
}
