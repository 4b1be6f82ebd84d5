//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (value objects, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `DeployUseCase` - Orchestrates a deploy run (config check, build, dispatch, lifecycle events)

pub mod deploy;

pub use deploy::{DeployOptions, DeployReport, DeployUseCase, TargetOutcome, TargetStatus};
