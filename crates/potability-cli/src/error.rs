//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Line editor error
    #[error("Input error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A batch sample is not an object of numeric fields
    #[error("sample {index}: {source}")]
    SampleFormat {
        /// 1-based position in the batch
        index: usize,
        /// Underlying decode error
        #[source]
        source: serde_json::Error,
    },

    /// A batch sample could not be assessed
    #[error("sample {index}: {source}")]
    Sample {
        /// 1-based position in the batch
        index: usize,
        /// Underlying assessment error
        #[source]
        source: potability_gatekeeper::GatekeeperError,
    },

    /// Sample could not be built
    #[error(transparent)]
    Domain(#[from] potability_domain::DomainError),

    /// Assessment failed
    #[error(transparent)]
    Gatekeeper(#[from] potability_gatekeeper::GatekeeperError),

    /// Model could not be loaded or run
    #[error(transparent)]
    Model(#[from] potability_model::ModelError),
}
