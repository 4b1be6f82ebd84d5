//! Configuration type definitions

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{CommandLine, DeployConfig};

/// Output directory used when the config does not name one
pub const DEFAULT_PUBLIC_DIR: &str = "public";

fn default_public_dir() -> PathBuf {
    PathBuf::from(DEFAULT_PUBLIC_DIR)
}

/// How to generate the site before deploying
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Generator command, e.g. `hexo generate` or `["zola", "build"]`
    #[serde(default)]
    pub command: Option<CommandLine>,
}

/// Commands run on the deploy lifecycle signals
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HooksConfig {
    #[serde(default)]
    pub before_deploy: Vec<CommandLine>,

    #[serde(default)]
    pub after_deploy: Vec<CommandLine>,
}

impl HooksConfig {
    pub fn is_empty(&self) -> bool {
        self.before_deploy.is_empty() && self.after_deploy.is_empty()
    }
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_public_dir")]
    pub public_dir: PathBuf,

    #[serde(default)]
    pub build: BuildConfig,

    #[serde(default)]
    pub hooks: HooksConfig,

    /// One target or a list of them; absent means deploy is not configured
    #[serde(default)]
    pub deploy: Option<DeployConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            public_dir: default_public_dir(),
            build: BuildConfig::default(),
            hooks: HooksConfig::default(),
            deploy: None,
        }
    }
}
