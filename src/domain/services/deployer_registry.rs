//! Deployer Registry
//!
//! Maps target type names to deployer implementations. Filled once at
//! startup and only read during a deploy run.

use std::collections::BTreeMap;

use crate::domain::ports::{DeployContext, Deployer};
use crate::domain::value_objects::TargetOptions;

#[derive(Default)]
pub struct DeployerRegistry {
    deployers: BTreeMap<String, Box<dyn Deployer>>,
}

impl DeployerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a deployer under `name`, replacing any previous one.
    pub fn register<D>(&mut self, name: impl Into<String>, deployer: D) -> &mut Self
    where
        D: Deployer + 'static,
    {
        self.deployers.insert(name.into(), Box::new(deployer));
        self
    }

    /// Register a closure as a deployer.
    pub fn register_fn<F>(&mut self, name: impl Into<String>, f: F) -> &mut Self
    where
        F: Fn(&DeployContext<'_>, &TargetOptions) -> anyhow::Result<()> + Send + Sync + 'static,
    {
        self.register(name, f)
    }

    pub fn get(&self, name: &str) -> Option<&dyn Deployer> {
        self.deployers.get(name).map(|d| d.as_ref())
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<String> {
        self.deployers.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.deployers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deployers.is_empty()
    }
}

impl std::fmt::Debug for DeployerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeployerRegistry")
            .field("deployers", &self.names())
            .finish()
    }
}
