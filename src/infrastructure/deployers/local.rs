//! Local directory deployer

use std::fs;

use anyhow::Context;
use tracing::info;

use super::{ensure_public_dir, resolve_path};
use crate::domain::ports::{DeployContext, Deployer};
use crate::domain::value_objects::TargetOptions;
use crate::infrastructure::fs::copy_dir_contents;

/// Copies the generated site into `dest`.
///
/// Options:
/// - `dest` (required) - destination directory, relative to the project root
/// - `clean` - remove `dest` before copying
pub struct LocalDeployer;

impl Deployer for LocalDeployer {
    fn deploy(&self, ctx: &DeployContext<'_>, options: &TargetOptions) -> anyhow::Result<()> {
        let dest = resolve_path(ctx.root, &options.require_str("dest")?);
        ensure_public_dir(ctx.public_dir)?;

        if dest.starts_with(ctx.public_dir) || ctx.public_dir.starts_with(&dest) {
            anyhow::bail!(
                "destination {} overlaps the public directory {}",
                dest.display(),
                ctx.public_dir.display()
            );
        }

        if options.get_bool("clean")?.unwrap_or(false) && dest.exists() {
            fs::remove_dir_all(&dest)
                .with_context(|| format!("failed to clean {}", dest.display()))?;
        }

        let copied = copy_dir_contents(ctx.public_dir, &dest)
            .with_context(|| format!("failed to copy site to {}", dest.display()))?;
        info!(deployer = "local", files = copied, dest = %dest.display(), "Copied site");
        Ok(())
    }
}
