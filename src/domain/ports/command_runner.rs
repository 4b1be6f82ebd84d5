//! Command Runner port - host service for running external programs
//!
//! Deployers, the build trigger and lifecycle hooks all shell out
//! (git, rsync, site generators). Going through this port keeps them
//! testable without those programs installed.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// A program invocation: argv plus working directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: PathBuf,
}

impl Invocation {
    pub fn new(program: impl Into<String>, cwd: impl AsRef<Path>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: cwd.as_ref().to_path_buf(),
        }
    }

    /// Build from an argv list. Returns `None` for an empty list.
    pub fn from_argv(argv: &[String], cwd: impl AsRef<Path>) -> Option<Self> {
        let (program, args) = argv.split_first()?;
        Some(Self::new(program.clone(), cwd).args(args.iter().cloned()))
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Human-readable command line, for logs and errors
    pub fn display(&self) -> String {
        if self.args.is_empty() {
            self.program.clone()
        } else {
            format!("{} {}", self.program, self.args.join(" "))
        }
    }
}

/// Errors from running an external program
#[derive(Error, Debug)]
pub enum CommandError {
    /// The program could not be started
    #[error("failed to run '{command}'")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The program ran and exited unsuccessfully
    #[error("'{command}' exited with {}", format_code(.code))]
    Failed { command: String, code: Option<i32> },
}

fn format_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {}", code),
        None => "a signal".to_string(),
    }
}

/// Runs programs to completion
pub trait CommandRunner: Send + Sync {
    /// Run the invocation and wait for it. Non-zero exit is `CommandError::Failed`.
    fn run(&self, invocation: &Invocation) -> Result<(), CommandError>;
}
