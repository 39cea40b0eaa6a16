//! Entry point entity
//!
//! One compilation entry per serverless function: where its source lives and
//! where the bundler must place the compiled file.

use std::path::{Path, PathBuf};

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryPoint {
    resource_key: String,
    input_path: PathBuf,
    output_path: PathBuf,
}

impl EntryPoint {
    pub fn new(
        resource_key: impl Into<String>,
        input_path: impl Into<PathBuf>,
        output_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            resource_key: resource_key.into(),
            input_path: input_path.into(),
            output_path: output_path.into(),
        }
    }

    /// Logical id of the function resource
    pub fn resource_key(&self) -> &str {
        &self.resource_key
    }

    /// Absolute path of the handler module (without extension)
    pub fn input_path(&self) -> &Path {
        &self.input_path
    }

    /// `<outputRoot>/<resourceKey>/index.<ext>`
    pub fn output_path(&self) -> &Path {
        &self.output_path
    }
}
