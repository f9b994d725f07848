//! Trait definitions for external interactions
//!
//! The trained classifier is infrastructure; the domain only sees it through
//! this trait. Implementations live in other crates (potability-model).

use crate::SampleRecord;

/// A pre-trained binary potability classifier
///
/// Class `0` is "not potable", class `1` is "potable". Implementations are
/// read-only after construction and are shared by reference.
pub trait PotabilityOracle {
    /// Error type for inference failures
    type Error: std::fmt::Display;

    /// Predicted class for a record (`0` or `1`)
    fn predict(&self, record: &SampleRecord) -> Result<u8, Self::Error>;

    /// Class probabilities `(p_not_potable, p_potable)`, summing to 1
    fn predict_proba(&self, record: &SampleRecord) -> Result<(f64, f64), Self::Error>;
}
