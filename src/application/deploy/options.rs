//! Deploy Options
//!
//! Invocation-level arguments for a deploy run.

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

/// Options for the deploy use case
#[derive(Debug, Clone, PartialEq)]
pub struct DeployOptions {
    /// Project root (where the config file lives)
    pub root: PathBuf,
    /// Generated output directory, relative to `root` unless absolute
    pub public_dir: PathBuf,
    /// Build the site first even if the output directory exists
    pub generate: bool,
    /// Passthrough options merged over every target's own options
    pub overrides: Map<String, Value>,
}

impl DeployOptions {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            public_dir: PathBuf::from(crate::config::DEFAULT_PUBLIC_DIR),
            generate: false,
            overrides: Map::new(),
        }
    }

    pub fn with_public_dir(mut self, public_dir: impl Into<PathBuf>) -> Self {
        self.public_dir = public_dir.into();
        self
    }

    pub fn with_generate(mut self, generate: bool) -> Self {
        self.generate = generate;
        self
    }

    pub fn with_override(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.overrides.insert(key.into(), value.into());
        self
    }

    pub fn with_overrides(mut self, overrides: Map<String, Value>) -> Self {
        self.overrides.extend(overrides);
        self
    }

    /// Output directory joined onto the project root
    pub fn resolved_public_dir(&self) -> PathBuf {
        resolve(&self.root, &self.public_dir)
    }
}

fn resolve(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}
