//! Domain error types

use thiserror::Error;

/// Errors raised while building or checking domain values
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// A required feature key was absent from a dynamic record
    #[error("Missing feature: {0}")]
    MissingFeature(String),

    /// A key that is not one of the nine features
    #[error("Unknown feature: {0}")]
    UnknownFeature(String),

    /// NaN or infinite measurement
    #[error("{feature} must be a finite number (got {value})")]
    NonFinite {
        /// Wire name of the feature
        feature: &'static str,
        /// Offending value
        value: f64,
    },

    /// Value outside the bounds the entry form accepts
    #[error("{feature} must be between {min} and {max} (got {value})")]
    OutsideInputRange {
        /// Wire name of the feature
        feature: &'static str,
        /// Lowest accepted value
        min: f64,
        /// Highest accepted value
        max: f64,
        /// Offending value
        value: f64,
    },
}
