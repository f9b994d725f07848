//! Model error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or running the classifier
#[derive(Error, Debug)]
pub enum ModelError {
    /// The model file could not be read
    #[error("Failed to read model file {path}: {source}")]
    Io {
        /// Path that was read
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// The model file is not valid JSON for the expected layout
    #[error("Failed to parse model: {0}")]
    Parse(#[from] serde_json::Error),

    /// The model parsed but is structurally unusable
    #[error("Invalid model: {0}")]
    Invalid(String),

    /// Inference failed for a specific sample
    #[error("Prediction failed: {0}")]
    Prediction(String),
}
