//! Configuration discovery and loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, ConfigResult};

use super::types::Config;

/// Files looked up in the project root, first match wins
pub const CONFIG_FILE_NAMES: &[&str] = &["_config.yml", "_config.yaml", "sitedeploy.toml"];

/// Environment variable overriding `public_dir`
pub const ENV_PUBLIC_DIR: &str = "SITEDEPLOY_PUBLIC_DIR";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Configuration as loaded for a project
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    pub config: Config,
    /// File the config came from, `None` when defaults were used
    pub path: Option<PathBuf>,
    pub warnings: Vec<ConfigWarning>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Yaml,
    Toml,
}

fn detect_format(path: &Path) -> ConfigResult<Format> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("yml") | Some("yaml") => Ok(Format::Yaml),
        Some("toml") => Ok(Format::Toml),
        _ => Err(ConfigError::UnsupportedFormat {
            file: path.to_path_buf(),
        }),
    }
}

/// First known config file present in `root`
pub fn discover(root: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| root.join(name))
        .find(|path| path.is_file())
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
///
/// Unknown keys are only reported for TOML files. YAML site configs are
/// shared with the site generator and carry many keys we do not read.
pub fn load_with_warnings(path: &Path) -> ConfigResult<(Config, Vec<ConfigWarning>)> {
    let format = detect_format(path)?;
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        file: path.to_path_buf(),
        source,
    })?;

    if content.trim().is_empty() {
        return Ok((Config::default(), Vec::new()));
    }

    let invalid = |message: String| ConfigError::Invalid {
        file: path.to_path_buf(),
        message,
    };

    match format {
        Format::Yaml => {
            let config: Config =
                serde_yaml_ng::from_str(&content).map_err(|e| invalid(e.to_string()))?;
            Ok((config, Vec::new()))
        }
        Format::Toml => {
            let mut unknown_paths: Vec<String> = Vec::new();
            let deserializer = toml::de::Deserializer::new(&content);

            let config: Config = serde_ignored::deserialize(deserializer, |p| {
                unknown_paths.push(p.to_string());
            })
            .map_err(|e| invalid(e.to_string()))?;

            let warnings = unknown_paths
                .into_iter()
                .map(|path_str| {
                    let key = path_str
                        .split('.')
                        .next_back()
                        .unwrap_or(path_str.as_str())
                        .to_string();
                    ConfigWarning {
                        key: key.clone(),
                        file: path.to_path_buf(),
                        line: find_line_number(&content, &key),
                        suggestion: suggest_key(&key),
                    }
                })
                .collect();

            Ok((config, warnings))
        }
    }
}

/// Load the explicit file if given, otherwise discover one in `root`,
/// otherwise fall back to defaults. Environment overrides apply last.
pub fn load_or_default(root: &Path, explicit: Option<&Path>) -> ConfigResult<LoadedConfig> {
    let path = match explicit {
        Some(path) if path.is_absolute() => Some(path.to_path_buf()),
        Some(path) => Some(root.join(path)),
        None => discover(root),
    };

    let Some(path) = path else {
        return Ok(LoadedConfig {
            config: with_env_overrides(Config::default()),
            path: None,
            warnings: Vec::new(),
        });
    };

    let (config, warnings) = load_with_warnings(&path)?;
    Ok(LoadedConfig {
        config: with_env_overrides(config),
        path: Some(path),
        warnings,
    })
}

/// Apply environment variable overrides (SITEDEPLOY_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_env_overrides_from(config, |key| std::env::var(key).ok())
}

fn with_env_overrides_from(mut config: Config, get_env: impl Fn(&str) -> Option<String>) -> Config {
    if let Some(dir) = get_env(ENV_PUBLIC_DIR).filter(|d| !d.trim().is_empty()) {
        config.public_dir = PathBuf::from(dir);
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "public_dir",
        "build",
        "command",
        "hooks",
        "before_deploy",
        "after_deploy",
        "deploy",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
