//! Potability Gatekeeper
//!
//! Evaluates water samples against drinking-water standards and decides
//! whether the water is potable.
//!
//! The Gatekeeper provides:
//! - Standards validation (inclusive range check per feature)
//! - Influencing-factor extraction
//! - The decision policy combining the standards verdict with the classifier
//!
//! Any out-of-standard measurement is an automatic rejection; the classifier
//! is only consulted for samples that pass every standard.
//!
//! # Examples
//!
//! ```
//! use potability_domain::SampleRecord;
//! use potability_gatekeeper::Gatekeeper;
//!
//! let gatekeeper = Gatekeeper::default_config();
//! let result = gatekeeper.validate(&SampleRecord::default());
//! assert!(result.valid);
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod policy;
mod validator;

pub use config::{ValidationConfig, DEFAULT_PROBABILITY_TOLERANCE};
pub use error::GatekeeperError;
pub use policy::{decide, decide_with_tolerance, Assessment, Decision, DecisionBasis, Label};
pub use validator::{extract_factors, validate, Gatekeeper, ValidationResult, Violation};
