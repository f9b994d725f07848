//! Standards validation logic

use crate::policy::{self, Assessment, Decision};
use crate::{GatekeeperError, ValidationConfig};
use potability_domain::{Feature, PotabilityOracle, SampleRecord, StandardRange, StandardsTable};
use serde::Serialize;

/// Result of standards validation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationResult {
    /// Whether every feature lies within its standard range
    pub valid: bool,

    /// One human-readable message per violation, in canonical order
    pub messages: Vec<String>,

    /// Structured form of `messages`
    pub violations: Vec<Violation>,
}

/// A feature whose value falls outside its standard range
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Violation {
    /// Offending feature
    pub feature: Feature,
    /// Range it should have been in
    pub range: StandardRange,
    /// Observed value
    pub observed: f64,
}

impl Violation {
    /// Message citing the standard range (not the observed value)
    pub fn message(&self) -> String {
        format!(
            "{} is outside the standard range ({} - {}).",
            self.feature, self.range.min, self.range.max
        )
    }
}

impl ValidationResult {
    /// Influencing factors implied by the violations
    pub fn factors(&self) -> Vec<Feature> {
        self.violations.iter().map(|v| v.feature).collect()
    }
}

/// Validate a record against a standards table
///
/// Ranges are closed: a value equal to `min` or `max` passes.
pub fn validate(record: &SampleRecord, table: &StandardsTable) -> ValidationResult {
    let violations: Vec<Violation> = table
        .out_of_range(record)
        .map(|(feature, range)| Violation {
            feature,
            range,
            observed: record.value(feature),
        })
        .collect();

    ValidationResult {
        valid: violations.is_empty(),
        messages: violations.iter().map(Violation::message).collect(),
        violations,
    }
}

/// Features of `record` outside their standard range, in canonical order
///
/// Uses the same inclusive test as [`validate`], so the result always equals
/// `validate(record, table).factors()`.
pub fn extract_factors(record: &SampleRecord, table: &StandardsTable) -> Vec<Feature> {
    table.out_of_range(record).map(|(feature, _)| feature).collect()
}

/// The Gatekeeper validates samples and produces potability decisions
#[derive(Debug, Clone, Default)]
pub struct Gatekeeper {
    config: ValidationConfig,
}

impl Gatekeeper {
    /// Create a new Gatekeeper with the given configuration
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Create a Gatekeeper with default configuration
    pub fn default_config() -> Self {
        Self::new(ValidationConfig::default())
    }

    /// Standards table in use
    pub fn standards(&self) -> &'static StandardsTable {
        self.config.standards
    }

    /// Validate a record against the configured standards
    pub fn validate(&self, record: &SampleRecord) -> ValidationResult {
        validate(record, self.config.standards)
    }

    /// Influencing factors for a record
    pub fn extract_factors(&self, record: &SampleRecord) -> Vec<Feature> {
        extract_factors(record, self.config.standards)
    }

    /// Decide potability for an already validated record
    pub fn decide<O: PotabilityOracle>(
        &self,
        record: &SampleRecord,
        validation: &ValidationResult,
        oracle: &O,
    ) -> Result<Decision, GatekeeperError> {
        policy::decide_with_tolerance(record, validation, oracle, self.config.probability_tolerance)
    }

    /// Run the whole evaluation pass for one record
    ///
    /// # Arguments
    ///
    /// * `record` - The sample to assess
    /// * `oracle` - The classifier, consulted only if every standard passes
    ///
    /// # Returns
    ///
    /// Everything the report needs, or the first error; never a partial result.
    pub fn assess<O: PotabilityOracle>(
        &self,
        record: SampleRecord,
        oracle: &O,
    ) -> Result<Assessment, GatekeeperError> {
        let validation = self.validate(&record);
        let factors = self.extract_factors(&record);
        let decision = self.decide(&record, &validation, oracle)?;

        Ok(Assessment {
            record,
            validation,
            factors,
            decision,
        })
    }

    /// Assess a sample given as dynamic key/value pairs
    ///
    /// A missing or unknown feature key is reported as
    /// [`GatekeeperError::Domain`] before anything is evaluated.
    pub fn assess_fields<I, K, O>(
        &self,
        fields: I,
        oracle: &O,
    ) -> Result<Assessment, GatekeeperError>
    where
        I: IntoIterator<Item = (K, f64)>,
        K: AsRef<str>,
        O: PotabilityOracle,
    {
        let record = SampleRecord::from_fields(fields)?;
        self.assess(record, oracle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use potability_domain::STANDARDS;

    fn nominal() -> SampleRecord {
        SampleRecord::default()
    }

    #[test]
    fn test_nominal_record_is_valid() {
        let result = validate(&nominal(), &STANDARDS);
        assert!(result.valid);
        assert!(result.messages.is_empty());
        assert!(result.violations.is_empty());
        assert!(extract_factors(&nominal(), &STANDARDS).is_empty());
    }

    #[test]
    fn test_ph_message_format() {
        let record = nominal().with(Feature::Ph, 2.0);
        let result = validate(&record, &STANDARDS);

        assert!(!result.valid);
        assert_eq!(
            result.messages,
            vec!["ph is outside the standard range (6.5 - 8.5).".to_string()]
        );
        assert_eq!(result.violations[0].observed, 2.0);
    }

    #[test]
    fn test_integer_ranges_print_without_decimals() {
        let record = nominal().with(Feature::Hardness, 301.0);
        let result = validate(&record, &STANDARDS);
        assert_eq!(
            result.messages,
            vec!["Hardness is outside the standard range (0 - 300).".to_string()]
        );
    }

    #[test]
    fn test_ph_lower_boundary_is_inclusive() {
        let at_boundary = nominal().with(Feature::Ph, 6.5);
        assert!(validate(&at_boundary, &STANDARDS).valid);

        let just_below = nominal().with(Feature::Ph, 6.4999);
        let result = validate(&just_below, &STANDARDS);
        assert!(!result.valid);
        assert_eq!(result.factors(), vec![Feature::Ph]);
    }

    #[test]
    fn test_all_upper_bounds_are_valid() {
        let mut record = nominal();
        for (feature, range) in STANDARDS.iter() {
            record.set(feature, range.max);
        }
        assert!(validate(&record, &STANDARDS).valid);
    }

    #[test]
    fn test_violations_follow_table_order() {
        // Set in reverse order to make sure input order does not leak through
        let record = nominal()
            .with(Feature::Turbidity, 3.0)
            .with(Feature::Sulfate, 300.0)
            .with(Feature::Ph, 9.0);

        let result = validate(&record, &STANDARDS);
        assert_eq!(
            result.factors(),
            vec![Feature::Ph, Feature::Sulfate, Feature::Turbidity]
        );
        assert_eq!(result.messages.len(), 3);
        assert!(result.messages[1].starts_with("Sulfate"));
        assert_eq!(extract_factors(&record, &STANDARDS), result.factors());
    }

    #[test]
    fn test_gatekeeper_uses_configured_table() {
        let gatekeeper = Gatekeeper::default_config();
        let record = nominal().with(Feature::Turbidity, 3.0);
        assert_eq!(gatekeeper.extract_factors(&record), vec![Feature::Turbidity]);
        assert!(std::ptr::eq(gatekeeper.standards(), &STANDARDS));
    }
}
