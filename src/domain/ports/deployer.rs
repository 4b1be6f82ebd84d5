//! Deployer port - one implementation per deploy target type
//!
//! A deployer receives its merged options and an explicit context with the
//! host services it may need. Closures with the same shape are deployers
//! too, which is how tests and embedders register ad-hoc targets.

use std::path::Path;

use super::CommandRunner;
use crate::domain::value_objects::TargetOptions;

/// Host services and paths available to a deployer during a run
#[derive(Clone, Copy)]
pub struct DeployContext<'a> {
    /// Project root
    pub root: &'a Path,
    /// Generated site output (already resolved against `root`)
    pub public_dir: &'a Path,
    /// Runner for external programs
    pub runner: &'a dyn CommandRunner,
}

impl std::fmt::Debug for DeployContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeployContext")
            .field("root", &self.root)
            .field("public_dir", &self.public_dir)
            .finish_non_exhaustive()
    }
}

/// A deploy target implementation (git, rsync, ...)
pub trait Deployer: Send + Sync {
    /// Deploy the generated site using the merged options.
    fn deploy(&self, ctx: &DeployContext<'_>, options: &TargetOptions) -> anyhow::Result<()>;
}

impl<F> Deployer for F
where
    F: Fn(&DeployContext<'_>, &TargetOptions) -> anyhow::Result<()> + Send + Sync,
{
    fn deploy(&self, ctx: &DeployContext<'_>, options: &TargetOptions) -> anyhow::Result<()> {
        self(ctx, options)
    }
}
