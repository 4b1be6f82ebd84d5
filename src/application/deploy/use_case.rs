//! Deploy Use Case
//!
//! Orchestrates a deploy run:
//! 1. Check that a deploy section is configured
//! 2. Build the site if asked to, or if the output directory is missing
//! 3. Emit `deployBefore`
//! 4. Run each target's deployer, one at a time, in declaration order
//! 5. Emit `deployAfter`
//!
//! Unknown target types are logged and skipped. A failing deployer stops
//! the run and its error is returned; `deployAfter` is not emitted then.

use std::sync::Arc;

use tracing::{debug, error, info, warn};

use super::{DeployOptions, DeployReport, TargetStatus};
use crate::domain::ports::{
    CommandRunner, DeployContext, DeployEvent, DeployEventSink, FileSystem, SiteBuilder,
};
use crate::domain::services::DeployerRegistry;
use crate::domain::value_objects::{DeployConfig, TargetOptions};
use crate::error::DeployError;

/// Deploy use case - orchestrates the deploy flow
///
/// This use case is parameterized by its dependencies (ports),
/// allowing for easy testing and different implementations.
pub struct DeployUseCase<FS, SB>
where
    FS: FileSystem,
    SB: SiteBuilder,
{
    file_system: FS,
    builder: SB,
    registry: DeployerRegistry,
    runner: Arc<dyn CommandRunner>,
    sinks: Vec<Arc<dyn DeployEventSink>>,
}

impl<FS, SB> DeployUseCase<FS, SB>
where
    FS: FileSystem,
    SB: SiteBuilder,
{
    pub fn new(
        file_system: FS,
        builder: SB,
        registry: DeployerRegistry,
        runner: Arc<dyn CommandRunner>,
    ) -> Self {
        Self {
            file_system,
            builder,
            registry,
            runner,
            sinks: Vec::new(),
        }
    }

    /// Add a listener for lifecycle and progress events
    pub fn with_event_sink(mut self, sink: Arc<dyn DeployEventSink>) -> Self {
        self.sinks.push(sink);
        self
    }

    pub fn registry(&self) -> &DeployerRegistry {
        &self.registry
    }

    /// Execute the deploy use case
    pub fn execute(
        &self,
        config: Option<&DeployConfig>,
        options: &DeployOptions,
    ) -> Result<DeployReport, DeployError> {
        let config = match config {
            Some(config) if !config.is_empty() => config,
            _ => {
                return Err(DeployError::NotConfigured {
                    available: self.registry.names(),
                })
            }
        };

        let mut report = DeployReport::new();
        report.generated = self.prepare_output(options)?;

        let targets = config.targets();
        self.emit(DeployEvent::Before {
            target_count: targets.len(),
        });

        let public_dir = options.resolved_public_dir();
        let ctx = DeployContext {
            root: &options.root,
            public_dir: &public_dir,
            runner: self.runner.as_ref(),
        };

        for (index, target) in targets.iter().enumerate() {
            let Some(kind) = target.kind() else {
                match &target.scalar {
                    Some(value) => warn!(index, "Skipping deploy entry {} without a type", value),
                    None => debug!(index, "Skipping deploy entry without a type"),
                }
                report.record(index, None, TargetStatus::Skipped);
                self.emit(DeployEvent::TargetSkipped { index });
                continue;
            };

            let Some(deployer) = self.registry.get(kind) else {
                let err = DeployError::DeployerNotFound {
                    kind: kind.to_string(),
                };
                error!(deployer = kind, "{}", err);
                report.record(index, Some(kind), TargetStatus::NotFound);
                self.emit(DeployEvent::TargetNotFound {
                    index,
                    kind: kind.to_string(),
                });
                continue;
            };

            info!(deployer = kind, "Deploying: {}", kind);
            self.emit(DeployEvent::TargetStarted {
                index,
                kind: kind.to_string(),
            });

            let merged = TargetOptions::merged(kind, target, &options.overrides);
            if let Err(source) = deployer.deploy(&ctx, &merged) {
                error!(deployer = kind, "Deploy failed: {}: {:#}", kind, source);
                self.emit(DeployEvent::TargetFailed {
                    index,
                    kind: kind.to_string(),
                    error: format!("{:#}", source),
                });
                return Err(DeployError::DeployerFailed {
                    kind: kind.to_string(),
                    index,
                    source,
                });
            }

            info!(deployer = kind, "Deploy done: {}", kind);
            report.record(index, Some(kind), TargetStatus::Deployed);
            self.emit(DeployEvent::TargetCompleted {
                index,
                kind: kind.to_string(),
            });
        }

        self.emit(DeployEvent::After {
            deployed: report.deployed().len(),
            not_found: report.not_found().len(),
            skipped: report.skipped_count(),
        });

        Ok(report)
    }

    /// Run the build step when requested or when there is no output yet.
    ///
    /// Returns whether the build ran.
    fn prepare_output(&self, options: &DeployOptions) -> Result<bool, DeployError> {
        if !options.generate {
            let public_dir = options.resolved_public_dir();
            if self.file_system.is_dir(&public_dir) {
                debug!(path = %public_dir.display(), "Public directory exists, skipping build");
                return Ok(false);
            }
            info!(
                path = %public_dir.display(),
                "Public directory not found, generating site first"
            );
        }

        self.builder
            .generate(options)
            .map_err(DeployError::BuildFailed)?;
        Ok(true)
    }

    fn emit(&self, event: DeployEvent) {
        let detailed = !event.is_lifecycle();
        for sink in &self.sinks {
            if detailed && !sink.wants_detailed_events() {
                continue;
            }
            sink.on_event(&event);
        }
    }
}
