//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod command_runner;
pub mod deploy_events;
pub mod deployer;
pub mod file_system;
pub mod site_builder;

pub use command_runner::{CommandError, CommandRunner, Invocation};
pub use deploy_events::{DeployEvent, DeployEventSink, NoopEventSink};
pub use deployer::{DeployContext, Deployer};
pub use file_system::FileSystem;
pub use site_builder::SiteBuilder;
