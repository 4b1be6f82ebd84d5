//! Hook Event Sink
//!
//! Runs `hooks.before_deploy` / `hooks.after_deploy` commands when the
//! matching lifecycle signal fires. Hook failures are logged and never
//! reach the deploy run.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{info, warn};

use crate::config::HooksConfig;
use crate::domain::ports::{CommandRunner, DeployEvent, DeployEventSink, Invocation};
use crate::domain::value_objects::CommandLine;

pub struct HookEventSink {
    hooks: HooksConfig,
    root: PathBuf,
    runner: Arc<dyn CommandRunner>,
}

impl HookEventSink {
    pub fn new(hooks: HooksConfig, root: impl Into<PathBuf>, runner: Arc<dyn CommandRunner>) -> Self {
        Self {
            hooks,
            root: root.into(),
            runner,
        }
    }

    fn run_all(&self, phase: &str, commands: &[CommandLine]) {
        for command in commands {
            let Some(invocation) = Invocation::from_argv(&command.argv(), &self.root) else {
                continue;
            };
            info!(hook = phase, command = %invocation.display(), "Running hook");
            if let Err(e) = self.runner.run(&invocation) {
                warn!(hook = phase, "Hook failed: {:#}", anyhow::Error::from(e));
            }
        }
    }
}

impl DeployEventSink for HookEventSink {
    fn on_event(&self, event: &DeployEvent) {
        match event {
            DeployEvent::Before { .. } => self.run_all(event.name(), &self.hooks.before_deploy),
            DeployEvent::After { .. } => self.run_all(event.name(), &self.hooks.after_deploy),
            _ => {}
        }
    }

    fn wants_detailed_events(&self) -> bool {
        false
    }
}
