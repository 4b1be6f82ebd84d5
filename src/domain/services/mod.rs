//! Domain Services
//!
//! Stateless or read-only domain logic shared by use cases.

mod deployer_registry;

pub use deployer_registry::DeployerRegistry;
