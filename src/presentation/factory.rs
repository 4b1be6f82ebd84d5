//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::path::Path;
use std::sync::Arc;

use crate::application::DeployUseCase;
use crate::config::Config;
use crate::domain::ports::CommandRunner;
use crate::domain::services::DeployerRegistry;
use crate::infrastructure::{
    builtin_registry, CommandSiteBuilder, HookEventSink, JsonEventSink, LocalFs, ProcessRunner,
};

/// Type alias for the concrete DeployUseCase with all dependencies
pub type ConcreteDeployUseCase = DeployUseCase<LocalFs, CommandSiteBuilder>;

/// Create a deploy use case with the built-in deployers
///
/// With `json` set, events are streamed as NDJSON on stdout and child
/// process output is moved to stderr.
pub fn create_deploy_use_case(config: &Config, root: &Path, json: bool) -> ConcreteDeployUseCase {
    create_deploy_use_case_with_registry(config, root, json, builtin_registry())
}

/// Create a deploy use case with a custom registry
///
/// Useful when embedding the orchestrator with extra deployers.
pub fn create_deploy_use_case_with_registry(
    config: &Config,
    root: &Path,
    json: bool,
    registry: DeployerRegistry,
) -> ConcreteDeployUseCase {
    let runner: Arc<dyn CommandRunner> = Arc::new(ProcessRunner::quiet(json));
    let builder = CommandSiteBuilder::new(config.build.command.clone(), runner.clone());

    let mut use_case = DeployUseCase::new(LocalFs::new(), builder, registry, runner.clone());

    if !config.hooks.is_empty() {
        use_case = use_case.with_event_sink(Arc::new(HookEventSink::new(
            config.hooks.clone(),
            root,
            runner,
        )));
    }
    if json {
        use_case = use_case.with_event_sink(Arc::new(JsonEventSink::stdout()));
    }

    use_case
}
