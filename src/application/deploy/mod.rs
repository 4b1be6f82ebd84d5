//! Deploy Module
//!
//! Orchestrates deploy runs across the configured targets.
//!
//! ## Structure
//!
//! - `options` - Invocation arguments (`DeployOptions`)
//! - `result` - Result types (`DeployReport`, `TargetOutcome`)
//! - `use_case` - Core use case logic (`DeployUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use sitedeploy::application::deploy::{DeployOptions, DeployUseCase};
//!
//! let use_case = DeployUseCase::new(fs, builder, registry, runner);
//! let report = use_case.execute(config.deploy.as_ref(), &DeployOptions::new(root))?;
//! ```

mod options;
mod result;
mod use_case;

pub use options::DeployOptions;
pub use result::{DeployReport, TargetOutcome, TargetStatus};
pub use use_case::DeployUseCase;

#[cfg(test)]
mod tests;
