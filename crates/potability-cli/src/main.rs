//! Potability CLI - Water potability assessment from the command line.

use anyhow::Context;
use clap::Parser;
use potability_cli::commands;
use potability_cli::form;
use potability_cli::{Cli, Command, Config, Formatter};
use potability_gatekeeper::Gatekeeper;
use potability_model::ForestModel;
use std::path::Path;
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Load config (defaults when the file does not exist)
    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => Config::path()?,
    };
    let mut config = Config::load_from(&config_path)
        .with_context(|| format!("failed to load config from {}", config_path.display()))?;

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    // Create formatter
    let formatter = Formatter::new(format, color_enabled);
    let gatekeeper = Gatekeeper::default_config();

    let model_path = config.resolve_model_path(cli.model.as_deref());

    match cli.command {
        Some(Command::Standards) => {
            commands::execute_standards(&gatekeeper, &formatter)?;
        }
        Some(Command::Config(args)) => {
            commands::execute_config(args, &mut config, &config_path, &formatter)?;
        }
        None | Some(Command::Form) => {
            let model = load_model(&model_path)?;
            form::run_form(&config, &gatekeeper, &model, &formatter)?;
        }
        Some(Command::Assess(args)) => {
            let model = load_model(&model_path)?;
            commands::execute_assess(args, &gatekeeper, &model, &formatter)?;
        }
        Some(Command::Batch(args)) => {
            let model = load_model(&model_path)?;
            commands::execute_batch(args, &gatekeeper, &model, &formatter)?;
        }
    }

    Ok(())
}

/// Load the classifier once; failure is fatal for model-based commands.
fn load_model(path: &Path) -> anyhow::Result<ForestModel> {
    commands::load_model(path).context("cannot make model-based decisions without a trained model")
}

/// Log to stderr; `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}
