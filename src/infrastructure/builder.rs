//! Command Site Builder
//!
//! Implements the SiteBuilder port by running the configured generator
//! command (`build.command`) in the project root.

use std::sync::Arc;

use anyhow::Context;
use tracing::info;

use crate::application::deploy::DeployOptions;
use crate::domain::ports::{CommandRunner, Invocation, SiteBuilder};
use crate::domain::value_objects::CommandLine;

pub struct CommandSiteBuilder {
    command: Option<CommandLine>,
    runner: Arc<dyn CommandRunner>,
}

impl CommandSiteBuilder {
    pub fn new(command: Option<CommandLine>, runner: Arc<dyn CommandRunner>) -> Self {
        Self { command, runner }
    }
}

impl SiteBuilder for CommandSiteBuilder {
    fn generate(&self, options: &DeployOptions) -> anyhow::Result<()> {
        let argv = self
            .command
            .as_ref()
            .map(CommandLine::argv)
            .unwrap_or_default();
        let invocation = Invocation::from_argv(&argv, &options.root).ok_or_else(|| {
            anyhow::anyhow!("no build command configured (set `build.command` in the site config)")
        })?;

        info!(command = %invocation.display(), "Generating site");
        self.runner
            .run(&invocation)
            .with_context(|| format!("build command '{}' failed", invocation.display()))
    }
}
