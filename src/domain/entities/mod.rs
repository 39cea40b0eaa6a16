//! Domain Entities
//!
//! - `TemplateDocument` - A parsed template tree
//! - `EntryPoint` - A function's source and compiled output locations
//! - `Stack` - One template of the graph with its entry points
//! - `TemplateGraph` - Root stack plus nested stacks

mod entry_point;
mod graph;
mod stack;
mod template;

pub use entry_point::EntryPoint;
pub use graph::TemplateGraph;
pub use stack::{Stack, StackWarning};
pub use template::{resource_properties, resource_properties_mut, resource_type, TemplateDocument};
