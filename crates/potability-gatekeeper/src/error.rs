//! Gatekeeper error types

use potability_domain::DomainError;
use thiserror::Error;

/// Errors that can occur during gatekeeper operations
#[derive(Error, Debug)]
pub enum GatekeeperError {
    /// The classifier failed or returned an unusable answer
    #[error("Prediction error: {0}")]
    Prediction(String),

    /// The sample could not be turned into a record
    #[error("Invalid sample: {0}")]
    Domain(#[from] DomainError),
}
