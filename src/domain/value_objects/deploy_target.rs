//! Deploy target value objects - what the `deploy` section of a config describes.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One deploy destination.
///
/// In configuration files the options live next to `type` in the same
/// mapping:
///
/// ```yaml
/// deploy:
///   type: git
///   repo: git@github.com:me/me.github.io.git
///   branch: main
/// ```
///
/// An entry that is not a mapping (`deploy: git`) has no type and is
/// skipped at deploy time.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "RawDeployTarget")]
pub struct DeployTarget {
    /// Deployer type name (`git`, `rsync`, ...)
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    /// Every other key in the mapping
    #[serde(flatten)]
    pub options: Map<String, Value>,

    /// The raw value of a non-mapping entry
    #[serde(skip)]
    pub scalar: Option<Value>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawDeployTarget {
    Mapping {
        #[serde(rename = "type", default)]
        kind: Option<String>,
        #[serde(flatten)]
        options: Map<String, Value>,
    },
    Scalar(Value),
}

impl From<RawDeployTarget> for DeployTarget {
    fn from(raw: RawDeployTarget) -> Self {
        match raw {
            RawDeployTarget::Mapping { kind, options } => Self {
                kind,
                options,
                scalar: None,
            },
            RawDeployTarget::Scalar(value) => Self {
                scalar: Some(value),
                ..Self::default()
            },
        }
    }
}

impl DeployTarget {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: Some(kind.into()),
            ..Self::default()
        }
    }

    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    /// The type name, or `None` for placeholder entries (missing or empty `type`).
    pub fn kind(&self) -> Option<&str> {
        self.kind.as_deref().filter(|k| !k.is_empty())
    }

    fn is_blank(&self) -> bool {
        self.kind.is_none() && self.options.is_empty() && self.scalar.is_none()
    }
}

/// The `deploy` section: one target or an ordered list of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DeployConfig {
    Many(Vec<DeployTarget>),
    Single(DeployTarget),
}

impl DeployConfig {
    /// An empty list or a bare `{}` counts as "not configured".
    pub fn is_empty(&self) -> bool {
        match self {
            DeployConfig::Many(targets) => targets.is_empty(),
            DeployConfig::Single(target) => target.is_blank(),
        }
    }

    /// Targets in declaration order; a lone target becomes a one-element list.
    pub fn targets(&self) -> &[DeployTarget] {
        match self {
            DeployConfig::Many(targets) => targets,
            DeployConfig::Single(target) => std::slice::from_ref(target),
        }
    }

    pub fn len(&self) -> usize {
        self.targets().len()
    }
}

impl From<DeployTarget> for DeployConfig {
    fn from(target: DeployTarget) -> Self {
        DeployConfig::Single(target)
    }
}

impl From<Vec<DeployTarget>> for DeployConfig {
    fn from(targets: Vec<DeployTarget>) -> Self {
        DeployConfig::Many(targets)
    }
}
