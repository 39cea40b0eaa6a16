//! Configuration module for sambundle
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (SAMBUNDLE_*)
//! 3. Project config (sambundle.toml)
//! 4. User config (<config_dir>/sambundle/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{user_config_path, ConfigWarning, PROJECT_CONFIG_FILE};
pub use types::{Config, OutputConfig, PathsConfig, ResolveConfig, TemplateConfig, Verbosity};
