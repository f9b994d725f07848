//! Config command implementation.

use crate::cli::{ConfigAction, ConfigArgs};
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use std::path::{Path, PathBuf};

/// Execute the config command.
pub fn execute_config(
    args: ConfigArgs,
    config: &mut Config,
    config_path: &Path,
    formatter: &Formatter,
) -> Result<()> {
    match args.action {
        ConfigAction::Show => show_config(config, config_path, formatter),
        ConfigAction::SetModel { path } => set_model(config, config_path, path, formatter),
        ConfigAction::Reset => reset_config(config, config_path, formatter),
    }
}

/// Show the active configuration.
fn show_config(config: &Config, config_path: &Path, formatter: &Formatter) -> Result<()> {
    println!("Config file: {}", formatter.success(&config_path.display().to_string()));
    println!("  Model: {}", config.model_path.display());
    if !config.model_path.exists() {
        println!("  {}", formatter.warning("model file not found"));
    }
    println!("  Color: {}", config.settings.color);
    println!("  Format: {:?}", config.settings.format);
    println!("  History size: {}", config.settings.history_size);
    Ok(())
}

/// Set the model file path.
fn set_model(
    config: &mut Config,
    config_path: &Path,
    path: PathBuf,
    formatter: &Formatter,
) -> Result<()> {
    if !path.exists() {
        println!(
            "{}",
            formatter.warning(&format!("{} does not exist yet", path.display()))
        );
    }
    config.model_path = path;
    config.save_to(config_path)?;
    println!(
        "{}",
        formatter.success(&format!("Model set to {}", config.model_path.display()))
    );
    Ok(())
}

/// Restore default settings.
fn reset_config(config: &mut Config, config_path: &Path, formatter: &Formatter) -> Result<()> {
    *config = Config::default();
    config.save_to(config_path)?;
    println!("{}", formatter.success("Configuration reset to defaults"));
    Ok(())
}
