//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//!
//! ## Structure
//!
//! - `cli` - Argument definitions shared by the binary and its tests
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//!
//! ## Usage
//!
//! ```ignore
//! use sitedeploy::presentation::factory;
//!
//! // Create deploy use case with all dependencies wired up
//! let use_case = factory::create_deploy_use_case(&config, &root, false);
//! let report = use_case.execute(config.deploy.as_ref(), &options)?;
//! ```

pub mod cli;
pub mod factory;

pub use cli::{parse_override, Cli, ColorWhen, Commands};
pub use factory::{create_deploy_use_case, create_deploy_use_case_with_registry};
