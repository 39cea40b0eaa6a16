//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod file_system;
pub mod template_source;

pub use file_system::{FileSystem, FsError, FsResult};
pub use template_source::TemplateSource;
