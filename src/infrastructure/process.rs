//! Process Runner
//!
//! Runs external programs with `std::process::Command`.

use std::process::{Command, Stdio};

use tracing::debug;

use crate::domain::ports::{CommandError, CommandRunner, Invocation};

/// Command runner backed by real processes
///
/// Child output is passed through to the terminal. In quiet mode (JSON
/// output) the child's stdout goes to our stderr so it cannot corrupt the
/// event stream.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner {
    quiet: bool,
}

impl ProcessRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn quiet(quiet: bool) -> Self {
        Self { quiet }
    }
}

impl CommandRunner for ProcessRunner {
    fn run(&self, invocation: &Invocation) -> Result<(), CommandError> {
        debug!(command = %invocation.display(), cwd = %invocation.cwd.display(), "Running");

        let mut cmd = Command::new(&invocation.program);
        cmd.args(&invocation.args)
            .current_dir(&invocation.cwd)
            .stdin(Stdio::inherit()) // Allow password input
            .stderr(Stdio::inherit());

        if self.quiet {
            cmd.stdout(Stdio::from(std::io::stderr()));
        } else {
            cmd.stdout(Stdio::inherit());
        }

        let status = cmd.status().map_err(|source| CommandError::Spawn {
            command: invocation.display(),
            source,
        })?;

        if !status.success() {
            return Err(CommandError::Failed {
                command: invocation.display(),
                code: status.code(),
            });
        }

        Ok(())
    }
}
