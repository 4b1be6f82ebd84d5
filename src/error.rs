//! Error types for sitedeploy
//!
//! Library errors use `thiserror`; deployer and builder implementations
//! return `anyhow::Result` and are wrapped at the orchestration boundary.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors produced by a deploy run
#[derive(Error, Debug)]
pub enum DeployError {
    /// No deploy section in the configuration (or an empty one)
    #[error("deployment is not configured")]
    NotConfigured {
        /// Registered deployer names, for guidance output
        available: Vec<String>,
    },

    /// A target names a deployer type nobody registered
    #[error("Deployer not found: {kind}")]
    DeployerNotFound { kind: String },

    /// A registered deployer returned an error; the rest of the run was aborted
    #[error("deployer '{kind}' failed (target #{index})")]
    DeployerFailed {
        kind: String,
        index: usize,
        #[source]
        source: anyhow::Error,
    },

    /// The pre-deploy site build failed
    #[error("site build failed")]
    BuildFailed(#[source] anyhow::Error),
}

impl DeployError {
    /// Whether the error is the user-facing "nothing configured" state
    pub fn is_not_configured(&self) -> bool {
        matches!(self, DeployError::NotConfigured { .. })
    }
}

/// Errors produced while loading configuration files
#[derive(Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("failed to read {file}")]
    Io {
        file: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file parsed but did not match the expected shape
    #[error("invalid configuration in {file}: {message}")]
    Invalid { file: PathBuf, message: String },

    /// Extension is neither YAML nor TOML
    #[error("unsupported configuration format: {file} (expected .yml, .yaml or .toml)")]
    UnsupportedFormat { file: PathBuf },
}
