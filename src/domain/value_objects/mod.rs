//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod command_line;
mod deploy_target;
mod target_options;

pub use command_line::{split_line, CommandLine};
pub use deploy_target::{DeployConfig, DeployTarget};
pub use target_options::{OptionError, TargetOptions};
