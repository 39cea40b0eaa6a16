//! Application Layer
//!
//! Use cases that drive the domain services against real or in-memory
//! file systems.
//!
//! - `Bundler` - resolve, query output paths, preview and write templates

pub mod bundler;

pub use bundler::{Bundler, TemplatePreview, WriteReport, DEFAULT_TEMPLATE};
