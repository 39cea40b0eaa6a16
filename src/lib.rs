//! sambundle - SAM template graph resolver for bundlers
//!
//! Resolves a root serverless template and its nested stacks into the set of
//! function entry points a JavaScript bundler should compile, and rewrites
//! every template so it points at the compiled output layout.
//!
//! ```no_run
//! use sambundle::{Bundler, Config, LocalFs};
//!
//! # fn main() -> sambundle::SamResult<()> {
//! let working_dir = std::env::current_dir()?;
//! let (config, _warnings) = Config::load_or_default(&working_dir)?;
//! let options = config.to_resolve_options(&working_dir);
//!
//! let mut bundler = Bundler::new(LocalFs::new(), options, &config.template.path);
//! for (key, input) in bundler.entry()?.input_paths() {
//!     println!("{key} -> {}", input.display());
//! }
//! // ... compile each entry point to `bundler.output_path(key)?` ...
//! bundler.write_templates()?.into_result()?;
//! # Ok(())
//! # }
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{Bundler, TemplatePreview, WriteReport};
pub use config::{Config, ConfigWarning, Verbosity};
pub use domain::entities::{EntryPoint, Stack, TemplateDocument, TemplateGraph};
pub use domain::services::EntryPointRegistry;
pub use domain::value_objects::{DuplicatePolicy, ResolveOptions};
pub use error::{ConfigError, SamError, SamResult};
pub use infrastructure::{LocalFs, MemoryFs};
