//! CLI command definitions and argument parsing.

use crate::error::Result;
use clap::{ArgAction, Parser, Subcommand};
use potability_domain::{Feature, FormField, SampleRecord};
use std::path::PathBuf;

/// Water potability assessment against drinking-water standards.
#[derive(Debug, Parser)]
#[command(name = "potability")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Trained model file
    #[arg(short, long, global = true, env = "POTABILITY_MODEL")]
    pub model: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Human-readable report (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (verdict only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fill in the measurement form interactively
    Form,

    /// Assess a single sample given on the command line
    Assess(AssessArgs),

    /// Assess a JSON array of samples
    Batch(BatchArgs),

    /// Show the drinking-water standards table
    Standards,

    /// Manage configuration
    Config(ConfigArgs),
}

/// Arguments for the assess command.
///
/// Omitted measurements take the form's default value.
#[derive(Debug, Default, Parser)]
pub struct AssessArgs {
    /// pH (0-14, default 7.0)
    #[arg(long)]
    pub ph: Option<f64>,

    /// Hardness (0-500, default 150)
    #[arg(long)]
    pub hardness: Option<f64>,

    /// Solids (0-1000, default 500)
    #[arg(long)]
    pub solids: Option<f64>,

    /// Chloramines (0-10, default 4.0)
    #[arg(long)]
    pub chloramines: Option<f64>,

    /// Sulfate (0-400, default 200)
    #[arg(long)]
    pub sulfate: Option<f64>,

    /// Conductivity (0-1500, default 500)
    #[arg(long)]
    pub conductivity: Option<f64>,

    /// Organic carbon (0-10, default 5.0)
    #[arg(long)]
    pub organic_carbon: Option<f64>,

    /// Trihalomethanes (0-200, default 80.0)
    #[arg(long)]
    pub trihalomethanes: Option<f64>,

    /// Turbidity (0-5, default 1.0)
    #[arg(long)]
    pub turbidity: Option<f64>,
}

impl AssessArgs {
    fn get(&self, feature: Feature) -> Option<f64> {
        match feature {
            Feature::Ph => self.ph,
            Feature::Hardness => self.hardness,
            Feature::Solids => self.solids,
            Feature::Chloramines => self.chloramines,
            Feature::Sulfate => self.sulfate,
            Feature::Conductivity => self.conductivity,
            Feature::OrganicCarbon => self.organic_carbon,
            Feature::Trihalomethanes => self.trihalomethanes,
            Feature::Turbidity => self.turbidity,
        }
    }

    /// Build the sample, filling defaults and enforcing the form bounds.
    pub fn to_record(&self) -> Result<SampleRecord> {
        let mut record = SampleRecord::default();
        for feature in Feature::ALL {
            if let Some(value) = self.get(feature) {
                record.set(feature, FormField::for_feature(feature).check(value)?);
            }
        }
        Ok(record)
    }
}

/// Arguments for the batch command.
#[derive(Debug, Parser)]
pub struct BatchArgs {
    /// JSON file containing an array of samples
    #[arg(long)]
    pub file: Option<String>,

    /// Read the JSON array from stdin
    #[arg(long)]
    pub stdin: bool,
}

/// Arguments for configuration management.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Show the active configuration
    Show,

    /// Set the model file path
    SetModel {
        /// Path to the model file
        path: PathBuf,
    },

    /// Restore default settings
    Reset,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}
