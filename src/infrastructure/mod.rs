//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - File system implementation and directory copy helpers
//! - `process` - CommandRunner backed by `std::process`
//! - `builder` - SiteBuilder that runs the configured build command
//! - `deployers/` - Built-in deployers (local, rsync, git, exec)
//! - `events/` - Event sinks (NDJSON output, lifecycle hooks)

pub mod builder;
pub mod deployers;
pub mod events;
pub mod fs;
pub mod process;

// Re-export for convenience
pub use builder::CommandSiteBuilder;
pub use deployers::builtin_registry;
pub use events::{HookEventSink, JsonEventSink};
pub use fs::LocalFs;
pub use process::ProcessRunner;
