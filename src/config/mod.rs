//! Configuration module for sitedeploy
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (SITEDEPLOY_*)
//! 3. Project config (`_config.yml`, `_config.yaml` or `sitedeploy.toml`)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

// Re-export the deploy section types from the domain layer
pub use crate::domain::value_objects::{CommandLine, DeployConfig, DeployTarget};

pub use loader::{
    discover, load_or_default, ConfigWarning, LoadedConfig, CONFIG_FILE_NAMES, ENV_PUBLIC_DIR,
};
pub use types::{BuildConfig, Config, HooksConfig, DEFAULT_PUBLIC_DIR};
