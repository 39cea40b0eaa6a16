//! Error types for sambundle
//!
//! Uses `thiserror` for library errors. Every fatal condition propagates
//! unchanged to the top of a resolution pass; there is no partial result.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for sambundle operations
pub type SamResult<T> = Result<T, SamError>;

/// Main error type for sambundle operations
#[derive(Error, Debug)]
pub enum SamError {
    /// Template file missing or not a valid template document
    #[error("failed to parse template {file}: {message}")]
    Parse { file: PathBuf, message: String },

    /// A resource in the template is not configured correctly
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A rewritten template could not be written
    #[error("failed to write {path}: {message}")]
    Write { path: PathBuf, message: String },

    /// Template destination escapes the output root
    #[error("path '{path}' escapes output root '{root}'")]
    PathEscape { path: PathBuf, root: PathBuf },

    /// Templates were requested before any resolution pass ran
    #[error("no template graph has been resolved yet")]
    NotResolved,

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid settings file
    #[error("invalid settings in {file}: {message}")]
    Settings { file: PathBuf, message: String },
}

/// Template configuration errors, each naming the offending logical id
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{resource} is missing Properties")]
    MissingProperties { resource: String },

    #[error("{resource} has an unsupported Runtime '{runtime}'. Must be one of: {}", supported.join(", "))]
    UnsupportedRuntime {
        resource: String,
        runtime: String,
        supported: Vec<String>,
    },

    #[error("{resource} is missing a Handler")]
    MissingHandler { resource: String },

    #[error("{resource} Handler '{handler}' must contain exactly one \".\"")]
    MalformedHandler { resource: String, handler: String },

    #[error("{resource} is missing a CodeUri")]
    MissingCodeUri { resource: String },

    #[error("{resource} CodeUri must be a local path string")]
    InvalidCodeUri { resource: String },

    #[error("unable to find entry point for {resource}")]
    UnknownEntryPoint { resource: String },

    #[error("{resource} is declared in both {first} and {second}")]
    DuplicateResourceKey {
        resource: String,
        first: PathBuf,
        second: PathBuf,
    },
}

impl ConfigError {
    /// Logical resource id this error is about
    pub fn resource(&self) -> &str {
        match self {
            ConfigError::MissingProperties { resource }
            | ConfigError::UnsupportedRuntime { resource, .. }
            | ConfigError::MissingHandler { resource }
            | ConfigError::MalformedHandler { resource, .. }
            | ConfigError::MissingCodeUri { resource }
            | ConfigError::InvalidCodeUri { resource }
            | ConfigError::UnknownEntryPoint { resource }
            | ConfigError::DuplicateResourceKey { resource, .. } => resource,
        }
    }
}
