//! Potability Domain Layer
//!
//! This crate contains the core domain model for water potability assessment.
//! It defines the measured features, the fixed-shape sample record, the
//! drinking-water standards table and the trait interface for the trained
//! classifier. Everything here is pure; infrastructure lives in other crates.
//!
//! ## Key Concepts
//!
//! - **Feature**: One of the nine measured water-quality parameters
//! - **SampleRecord**: A single observation carrying all nine measurements
//! - **Standards Table**: Inclusive `[min, max]` range per feature
//! - **Form Fields**: Input bounds and defaults offered by the entry form
//! - **Oracle**: The pre-trained classifier, seen only through a trait

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod feature;
pub mod form;
pub mod sample;
pub mod standards;
pub mod traits;

// Re-exports for convenience
pub use error::DomainError;
pub use feature::Feature;
pub use form::{FormField, FORM_FIELDS};
pub use sample::SampleRecord;
pub use standards::{StandardRange, StandardsTable, STANDARDS};
pub use traits::PotabilityOracle;
