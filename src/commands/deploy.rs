//! Deploy command entry point

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde_json::{Map, Value};
use sitedeploy::application::DeployOptions;
use sitedeploy::config::load_or_default;
use sitedeploy::presentation::factory::create_deploy_use_case;
use tracing::debug;

use crate::ui::context::UiContext;
use crate::ui::views::deploy::{render_config_warning, render_deploy_summary};

/// Arguments of `sitedeploy deploy`
#[derive(Debug, Clone, Default)]
pub struct DeployArgs {
    pub generate: bool,
    pub public_dir: Option<PathBuf>,
    pub message: Option<String>,
    pub options: Vec<(String, Value)>,
}

impl DeployArgs {
    /// `-m` first so an explicit `-o message=...` wins
    fn overrides(&self) -> Map<String, Value> {
        let mut overrides = Map::new();
        if let Some(message) = &self.message {
            overrides.insert("message".to_string(), Value::String(message.clone()));
        }
        for (key, value) in &self.options {
            overrides.insert(key.clone(), value.clone());
        }
        overrides
    }
}

pub fn cmd_deploy(
    root: &Path,
    config_path: Option<&Path>,
    args: &DeployArgs,
    ui: &UiContext,
) -> Result<()> {
    let loaded = load_or_default(root, config_path)?;
    match &loaded.path {
        Some(path) => debug!(config = %path.display(), "Loaded configuration"),
        None => debug!(root = %root.display(), "No configuration file found"),
    }
    if !ui.json {
        for warning in &loaded.warnings {
            eprintln!("{}", render_config_warning(warning, ui.color, ui.unicode));
        }
    }

    let config = loaded.config;
    let public_dir = args
        .public_dir
        .clone()
        .unwrap_or_else(|| config.public_dir.clone());
    let options = DeployOptions::new(root)
        .with_public_dir(public_dir)
        .with_generate(args.generate)
        .with_overrides(args.overrides());

    let use_case = create_deploy_use_case(&config, root, ui.json);
    let report = use_case.execute(config.deploy.as_ref(), &options)?;

    if !ui.json {
        print!(
            "{}",
            render_deploy_summary(&report, ui.color, ui.unicode)
        );
    }
    Ok(())
}

/// Project root from `-C`, or the current directory
pub fn resolve_root(root: Option<&Path>) -> Result<PathBuf> {
    let cwd = std::env::current_dir().context("failed to read the current directory")?;
    Ok(match root {
        Some(root) if root.is_absolute() => root.to_path_buf(),
        Some(root) => cwd.join(root),
        None => cwd,
    })
}
