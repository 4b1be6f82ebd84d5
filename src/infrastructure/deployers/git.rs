//! Git deployer
//!
//! Mirrors the generated site into a scratch repository under the project
//! root, commits it and force-pushes to the configured branch.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use chrono::Local;
use tracing::{info, warn};

use super::ensure_public_dir;
use crate::domain::ports::{CommandError, DeployContext, Deployer, Invocation};
use crate::domain::value_objects::TargetOptions;
use crate::infrastructure::fs::{clear_dir_except, copy_dir_contents};

/// Scratch repository directory, relative to the project root
pub const DEPLOY_GIT_DIR: &str = ".deploy_git";

const DEFAULT_BRANCH: &str = "gh-pages";
const DEFAULT_MESSAGE_FORMAT: &str = "Site updated: %Y-%m-%d %H:%M:%S";

/// Options: `repo` (required), `branch`, `message`, `name`, `email`.
#[derive(Debug, Clone, Copy, Default)]
pub struct GitDeployer;

impl GitDeployer {
    pub fn new() -> Self {
        Self
    }

    fn default_message() -> String {
        Local::now().format(DEFAULT_MESSAGE_FORMAT).to_string()
    }
}

impl Deployer for GitDeployer {
    fn deploy(&self, ctx: &DeployContext<'_>, options: &TargetOptions) -> anyhow::Result<()> {
        let repo = options.require_str("repo")?;
        let branch = options
            .get_str("branch")?
            .filter(|b| !b.is_empty())
            .unwrap_or_else(|| DEFAULT_BRANCH.to_string());
        let message = options
            .get_str("message")?
            .filter(|m| !m.is_empty())
            .unwrap_or_else(Self::default_message);
        let name = options.get_str("name")?;
        let email = options.get_str("email")?;

        ensure_public_dir(ctx.public_dir)?;

        let work_dir: PathBuf = ctx.root.join(DEPLOY_GIT_DIR);
        fs::create_dir_all(&work_dir)
            .with_context(|| format!("failed to create {}", work_dir.display()))?;
        let git = |args: &[&str]| Invocation::new("git", &work_dir).args(args.iter().copied());

        if !work_dir.join(".git").exists() {
            info!(deployer = "git", dir = %work_dir.display(), "Initializing deploy repository");
            ctx.runner.run(&git(&["init"]))?;
        }
        if let Some(name) = name.filter(|n| !n.is_empty()) {
            ctx.runner.run(&git(&["config", "user.name"]).arg(name))?;
        }
        if let Some(email) = email.filter(|e| !e.is_empty()) {
            ctx.runner.run(&git(&["config", "user.email"]).arg(email))?;
        }

        clear_dir_except(&work_dir, &[".git"])
            .with_context(|| format!("failed to clear {}", work_dir.display()))?;
        let copied = copy_dir_contents(ctx.public_dir, &work_dir)
            .with_context(|| format!("failed to copy site to {}", work_dir.display()))?;
        info!(deployer = "git", files = copied, "Copied site into deploy repository");

        ctx.runner.run(&git(&["add", "-A"]))?;
        match ctx.runner.run(&git(&["commit", "-m"]).arg(message)) {
            Ok(()) => {}
            // nothing to commit
            Err(e @ CommandError::Failed { .. }) => warn!(deployer = "git", "{}", e),
            Err(e) => return Err(e.into()),
        }

        info!(deployer = "git", repo = %repo, branch = %branch, "Pushing");
        ctx.runner.run(
            &git(&["push", "-u"])
                .arg(repo)
                .arg(format!("HEAD:{}", branch))
                .arg("--force"),
        )?;
        Ok(())
    }
}
