//! Template writer
//!
//! Serializes a stack's rewritten document and stores it under the output
//! root, mirroring the template's location relative to the input base
//! directory.

use std::path::PathBuf;

use crate::domain::entities::{Stack, TemplateDocument};
use crate::domain::ports::FileSystem;
use crate::domain::value_objects::{escapes_base, relative_path, ResolveOptions};
use crate::error::{SamError, SamResult};

pub struct TemplateWriter<'a> {
    fs: &'a dyn FileSystem,
    options: &'a ResolveOptions,
}

impl<'a> TemplateWriter<'a> {
    pub fn new(fs: &'a dyn FileSystem, options: &'a ResolveOptions) -> Self {
        Self { fs, options }
    }

    /// Where `stack` is written.
    ///
    /// Fails with `PathEscape` for a template outside the input base
    /// directory, whose mirrored location would leave the output root.
    pub fn destination(&self, stack: &Stack) -> SamResult<PathBuf> {
        let template = self.options.absolute(stack.template_path());
        let relative = relative_path(self.options.input_dir(), &template);
        let root = self.options.output_root();

        if escapes_base(&relative) {
            return Err(SamError::PathEscape {
                path: template,
                root,
            });
        }
        Ok(root.join(relative))
    }

    /// Write `stack` and return the file it was written to
    pub fn write(&self, stack: &Stack) -> SamResult<PathBuf> {
        let destination = self.destination(stack)?;
        let content = render(stack.document()).map_err(|message| SamError::Write {
            path: destination.clone(),
            message,
        })?;

        self.fs
            .write(&destination, &content)
            .map_err(|e| SamError::Write {
                path: destination.clone(),
                message: e.to_string(),
            })?;

        Ok(destination)
    }
}

/// Template text for `document`, intrinsic tags included
pub fn render(document: &TemplateDocument) -> Result<String, String> {
    serde_yaml_ng::to_string(document.root()).map_err(|e| e.to_string())
}
