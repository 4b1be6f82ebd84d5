//! Rsync deployer
//!
//! Uses rsync over ssh for efficient incremental uploads.

use tracing::info;

use super::ensure_public_dir;
use crate::domain::ports::{DeployContext, Deployer, Invocation};
use crate::domain::value_objects::{OptionError, TargetOptions};

/// Pushes the generated site to `[user@]host:root`.
///
/// Options: `host`, `root` (both required), `user`, `port`,
/// `delete` (default true), `verbose`.
pub struct RsyncDeployer;

impl RsyncDeployer {
    fn invocation(ctx: &DeployContext<'_>, options: &TargetOptions) -> Result<Invocation, OptionError> {
        let host = options.require_str("host")?;
        let remote_root = options.require_str("root")?;
        let remote_dest = match options.get_str("user")? {
            Some(user) if !user.is_empty() => format!("{}@{}:{}", user, host, remote_root),
            _ => format!("{}:{}", host, remote_root),
        };

        let mut inv = Invocation::new("rsync", ctx.root).arg("-az");
        if options.get_bool("delete")?.unwrap_or(true) {
            inv = inv.arg("--delete");
        }
        if options.get_bool("verbose")?.unwrap_or(false) {
            inv = inv.arg("-v");
        }
        if let Some(port) = options.get_u16("port")? {
            inv = inv.arg("-e").arg(format!("ssh -p {}", port));
        }

        // trailing slash = copy contents
        Ok(inv
            .arg(format!("{}/", ctx.public_dir.display()))
            .arg(remote_dest))
    }
}

impl Deployer for RsyncDeployer {
    fn deploy(&self, ctx: &DeployContext<'_>, options: &TargetOptions) -> anyhow::Result<()> {
        let invocation = Self::invocation(ctx, options)?;
        ensure_public_dir(ctx.public_dir)?;

        info!(deployer = "rsync", dest = %invocation.args.last().map(String::as_str).unwrap_or_default(), "Uploading");
        ctx.runner.run(&invocation)?;
        Ok(())
    }
}
