//! Merged per-target options handed to a deployer.

use serde_json::{Map, Value};
use thiserror::Error;

use super::DeployTarget;

/// Errors raised when a deployer reads an option it needs
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OptionError {
    #[error("missing required option '{key}' for deployer '{kind}'")]
    Missing { kind: String, key: String },

    #[error("option '{key}' for deployer '{kind}' must be {expected}")]
    WrongType {
        kind: String,
        key: String,
        expected: &'static str,
    },
}

/// A target's own options with invocation overrides laid on top.
#[derive(Debug, Clone, PartialEq)]
pub struct TargetOptions {
    kind: String,
    values: Map<String, Value>,
}

impl TargetOptions {
    pub fn new(kind: impl Into<String>, values: Map<String, Value>) -> Self {
        Self {
            kind: kind.into(),
            values,
        }
    }

    /// Merge `overrides` over the target's options. Override keys win.
    pub fn merged(kind: &str, target: &DeployTarget, overrides: &Map<String, Value>) -> Self {
        let mut values = target.options.clone();
        for (key, value) in overrides {
            values.insert(key.clone(), value.clone());
        }
        Self::new(kind, values)
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn values(&self) -> &Map<String, Value> {
        &self.values
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// String option; numbers are accepted and rendered as text.
    pub fn get_str(&self, key: &str) -> Result<Option<String>, OptionError> {
        match self.values.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.clone())),
            Some(Value::Number(n)) => Ok(Some(n.to_string())),
            Some(_) => Err(self.wrong_type(key, "a string")),
        }
    }

    pub fn require_str(&self, key: &str) -> Result<String, OptionError> {
        self.get_str(key)?
            .filter(|s| !s.is_empty())
            .ok_or_else(|| OptionError::Missing {
                kind: self.kind.clone(),
                key: key.to_string(),
            })
    }

    /// Boolean option; `"true"`/`"false"` strings are accepted.
    pub fn get_bool(&self, key: &str) -> Result<Option<bool>, OptionError> {
        match self.values.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Bool(b)) => Ok(Some(*b)),
            Some(Value::String(s)) => match s.as_str() {
                "true" => Ok(Some(true)),
                "false" => Ok(Some(false)),
                _ => Err(self.wrong_type(key, "a boolean")),
            },
            Some(_) => Err(self.wrong_type(key, "a boolean")),
        }
    }

    pub fn get_u16(&self, key: &str) -> Result<Option<u16>, OptionError> {
        match self.values.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Number(n)) => n
                .as_u64()
                .and_then(|n| u16::try_from(n).ok())
                .map(Some)
                .ok_or_else(|| self.wrong_type(key, "a port number")),
            Some(Value::String(s)) => s
                .parse::<u16>()
                .map(Some)
                .map_err(|_| self.wrong_type(key, "a port number")),
            Some(_) => Err(self.wrong_type(key, "a port number")),
        }
    }

    /// A string or a list of strings.
    pub fn get_string_list(&self, key: &str) -> Result<Vec<String>, OptionError> {
        match self.values.get(key) {
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(Value::String(s)) => Ok(vec![s.clone()]),
            Some(Value::Array(items)) => items
                .iter()
                .map(|item| match item {
                    Value::String(s) => Ok(s.clone()),
                    _ => Err(self.wrong_type(key, "a list of strings")),
                })
                .collect(),
            Some(_) => Err(self.wrong_type(key, "a string or a list of strings")),
        }
    }

    fn wrong_type(&self, key: &str, expected: &'static str) -> OptionError {
        OptionError::WrongType {
            kind: self.kind.clone(),
            key: key.to_string(),
            expected,
        }
    }
}
