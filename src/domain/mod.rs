//! Domain Layer
//!
//! The deploy model without I/O dependencies.
//!
//! ## Structure
//!
//! - `value_objects/` - Immutable value types (DeployTarget, DeployConfig, TargetOptions)
//! - `services/` - Domain services (DeployerRegistry)
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or network directly
//! 2. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod ports;
pub mod services;
pub mod value_objects;
