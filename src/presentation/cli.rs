//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --color, --verbose, -C, --config) are inherited by all subcommands
//! - `-o KEY=VALUE` pairs become overrides merged into every deploy target

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde_json::Value;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// sitedeploy - deploy a generated static site to one or more targets
#[derive(Parser, Debug)]
#[command(name = "sitedeploy")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Emit deploy events as NDJSON on stdout
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Project root (default: current directory)
    #[arg(short = 'C', long = "root", global = true, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Config file to use instead of discovery
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Deploy the generated site to every configured target
    #[command(visible_alias = "d")]
    Deploy {
        /// Build the site before deploying
        #[arg(short, long)]
        generate: bool,

        /// Public output directory (overrides config)
        #[arg(long, value_name = "DIR")]
        public_dir: Option<PathBuf>,

        /// Commit message, shorthand for `-o message=<MSG>`
        #[arg(short, long)]
        message: Option<String>,

        /// Option merged into every target (can be specified multiple times)
        #[arg(short = 'o', long = "option", value_name = "KEY=VALUE", value_parser = parse_override)]
        options: Vec<(String, Value)>,
    },

    /// List registered deployer types
    Deployers,
}

/// Parse `KEY=VALUE`. `true`/`false` become booleans, integers become numbers.
pub fn parse_override(raw: &str) -> Result<(String, Value), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{}'", raw))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("missing key in '{}'", raw));
    }

    let value = match value {
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        other => match other.parse::<i64>() {
            Ok(n) => Value::from(n),
            Err(_) => Value::String(other.to_string()),
        },
    };
    Ok((key.to_string(), value))
}
