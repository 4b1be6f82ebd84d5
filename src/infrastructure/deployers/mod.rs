//! Built-in Deployers
//!
//! Deployer implementations registered by default:
//! - `local` - copy the site into another directory
//! - `rsync` - push the site to a remote host over ssh
//! - `git` - commit the site to a branch and push it
//! - `exec` - run arbitrary commands

mod exec;
mod git;
mod local;
mod rsync;

use std::path::{Path, PathBuf};

pub use exec::ExecDeployer;
pub use git::{GitDeployer, DEPLOY_GIT_DIR};
pub use local::LocalDeployer;
pub use rsync::RsyncDeployer;

use crate::domain::services::DeployerRegistry;

/// Registry with every built-in deployer
pub fn builtin_registry() -> DeployerRegistry {
    let mut registry = DeployerRegistry::new();
    registry
        .register("exec", ExecDeployer)
        .register("git", GitDeployer::new())
        .register("local", LocalDeployer)
        .register("rsync", RsyncDeployer);
    registry
}

/// Resolve an option path against the project root
fn resolve_path(root: &Path, value: &str) -> PathBuf {
    let path = Path::new(value);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

fn ensure_public_dir(public_dir: &Path) -> anyhow::Result<()> {
    if !public_dir.is_dir() {
        anyhow::bail!(
            "public directory {} does not exist; run with --generate",
            public_dir.display()
        );
    }
    Ok(())
}
