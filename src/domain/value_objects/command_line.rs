//! Command line value object used by `build.command` and hooks.

use serde::{Deserialize, Serialize};

/// A command written either as one line or as an argv list.
///
/// Lines are split on whitespace; there is no shell quoting. Use the list
/// form when an argument contains spaces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CommandLine {
    Line(String),
    Argv(Vec<String>),
}

impl CommandLine {
    /// Program followed by its arguments. Empty when the command is blank.
    pub fn argv(&self) -> Vec<String> {
        match self {
            CommandLine::Line(line) => split_line(line),
            CommandLine::Argv(argv) => argv.clone(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.argv().is_empty()
    }
}

impl std::fmt::Display for CommandLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandLine::Line(line) => write!(f, "{}", line.trim()),
            CommandLine::Argv(argv) => write!(f, "{}", argv.join(" ")),
        }
    }
}

/// Split on whitespace. Quotes are ordinary characters.
pub fn split_line(line: &str) -> Vec<String> {
    line.split_whitespace().map(str::to_string).collect()
}
