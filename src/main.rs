//! sitedeploy CLI - deploy a generated static site to its configured targets
//!
//! Usage: sitedeploy <COMMAND>
//!
//! Commands:
//!   deploy     Deploy the generated site to every configured target
//!   deployers  List registered deployer types

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use sitedeploy::error::DeployError;
use sitedeploy::presentation::{Cli, Commands};

mod commands;
mod ui;

use commands::deploy::{cmd_deploy, resolve_root, DeployArgs};
use commands::deployers::cmd_deployers;
use ui::context::UiContext;
use ui::views::deploy::render_not_configured;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let ui = UiContext::new(cli.json, cli.color);
    match run(cli, &ui) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err, &ui);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli, ui: &UiContext) -> Result<()> {
    match cli.command {
        Commands::Deploy {
            generate,
            public_dir,
            message,
            options,
        } => {
            let root = resolve_root(cli.root.as_deref())?;
            let args = DeployArgs {
                generate,
                public_dir,
                message,
                options,
            };
            cmd_deploy(&root, cli.config.as_deref(), &args, ui)
        }
        Commands::Deployers => cmd_deployers(ui),
    }
}

fn report_error(err: &anyhow::Error, ui: &UiContext) {
    if let Some(DeployError::NotConfigured { available }) = err.downcast_ref::<DeployError>() {
        if ui.json {
            println!("{}", not_configured_json(available));
        } else {
            print!("{}", render_not_configured(available, ui.color));
        }
        return;
    }

    if ui.json {
        println!(
            "{}",
            serde_json::json!({ "event": "error", "message": format!("{:#}", err) })
        );
    }
    eprintln!("Error: {:#}", err);
}

fn not_configured_json(available: &[String]) -> serde_json::Value {
    serde_json::json!({
        "event": "error",
        "kind": "not_configured",
        "message": "deployment is not configured",
        "available": available,
    })
}

/// Logs go to stderr. `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    use is_terminal::IsTerminal;
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let default_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .with_target(false)
                .without_time(),
        )
        .try_init();
}
