//! sitedeploy - multi-target deploy orchestrator for static sites
//!
//! A project's config declares one or more deploy targets. Each target names
//! a deployer type (`git`, `rsync`, `local`, `exec` or one registered by an
//! embedding program) plus its options. A deploy run builds the site when
//! needed, then hands every target to its deployer in declaration order.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{DeployOptions, DeployReport, DeployUseCase, TargetOutcome, TargetStatus};
pub use config::{Config, DeployConfig, DeployTarget};
pub use domain::ports::{DeployContext, DeployEvent, DeployEventSink, Deployer};
pub use domain::services::DeployerRegistry;
pub use domain::value_objects::TargetOptions;
pub use error::{ConfigError, DeployError};
pub use infrastructure::builtin_registry;
