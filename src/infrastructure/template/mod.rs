//! Template persistence
//!
//! Loading templates from, and writing rewritten templates to, a `FileSystem`.

mod loader;
mod writer;

pub use loader::{parse_template, TemplateLoader};
pub use writer::{render, TemplateWriter};
