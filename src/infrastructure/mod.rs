//! Infrastructure Layer
//!
//! Concrete implementations of the domain ports.

pub mod fs;
pub mod template;

pub use fs::{LocalFs, MemoryFs};
pub use template::{parse_template, render, TemplateLoader, TemplateWriter};
