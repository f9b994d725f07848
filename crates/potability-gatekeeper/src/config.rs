//! Gatekeeper configuration

use potability_domain::{StandardsTable, STANDARDS};

/// Default allowed deviation of a probability pair's sum from 1.0
pub const DEFAULT_PROBABILITY_TOLERANCE: f64 = 1e-6;

/// Configuration for validation and decision rules
#[derive(Debug, Clone)]
pub struct ValidationConfig {
    /// Standards table shared by validation and factor extraction
    pub standards: &'static StandardsTable,

    /// Allowed deviation of `p_not_potable + p_potable` from 1.0
    pub probability_tolerance: f64,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            standards: &STANDARDS,
            probability_tolerance: DEFAULT_PROBABILITY_TOLERANCE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ValidationConfig::default();
        assert!(std::ptr::eq(config.standards, &STANDARDS));
        assert_eq!(config.probability_tolerance, DEFAULT_PROBABILITY_TOLERANCE);
        assert_eq!(DEFAULT_PROBABILITY_TOLERANCE, 1e-6);
    }
}
