//! Domain Services
//!
//! Template resolution logic. Services only reach templates through the
//! `TemplateSource` port, so they run unchanged against in-memory fixtures.

mod differ;
mod extractor;
mod graph_resolver;
mod registry;

pub use differ::{DiffResult, DiffTag, Differ};
pub use extractor::{FunctionExtractor, FUNCTION_TYPE};
pub use graph_resolver::{nested_stack_references, GraphResolver};
pub use registry::EntryPointRegistry;
