//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod duplicate_policy;
mod handler;
mod location;
mod path;
mod resolve_options;
mod runtime;

pub use duplicate_policy::DuplicatePolicy;
pub use handler::{Handler, HANDLER_SEPARATOR};
pub use location::{is_remote, REMOTE_PREFIX};
pub use path::{absolutize, escapes_base, normalize_path, relative_path, template_path_string};
pub use resolve_options::{ResolveOptions, DEFAULT_MAX_DEPTH, DEFAULT_OUTPUT_DIR};
pub use runtime::Runtime;
