//! Domain Layer
//!
//! Template resolution without I/O.
//!
//! ## Structure
//!
//! - `entities/` - Templates, stacks, entry points and the stack graph
//! - `value_objects/` - Runtimes, handlers, paths and resolve options
//! - `services/` - Extractor, graph resolver, registry and differ
//! - `policies/` - The resource path rewrite table
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - Templates are read through the `TemplateSource` port
//! 2. **Explicit options** - Every service takes its `ResolveOptions` by reference
//! 3. **Ports & Adapters** - File access goes through trait-defined ports

pub mod entities;
pub mod policies;
pub mod ports;
pub mod services;
pub mod value_objects;
