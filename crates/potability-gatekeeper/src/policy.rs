//! Decision policy
//!
//! Two terminal outcomes per record: a deterministic rejection when any
//! standard fails, or the classifier's verdict when all standards pass.

use crate::config::DEFAULT_PROBABILITY_TOLERANCE;
use crate::{GatekeeperError, ValidationResult};
use potability_domain::{Feature, PotabilityOracle, SampleRecord};
use serde::Serialize;
use tracing::debug;

/// Potability verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Label {
    /// Safe to drink
    Potable,
    /// Not safe to drink
    NotPotable,
}

impl Label {
    /// Map a classifier class (`1` = potable) to a label
    pub fn from_class(class: u8) -> Self {
        if class == 1 {
            Label::Potable
        } else {
            Label::NotPotable
        }
    }

    /// Lowercase label text
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Potable => "potable",
            Label::NotPotable => "not potable",
        }
    }
}

/// Which path produced the decision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionBasis {
    /// Rejected by the standards check; the classifier was not consulted
    Standards,
    /// Produced by the classifier
    Model,
}

/// Final verdict with class probabilities
///
/// Probabilities keep full precision; rounding happens only in
/// [`Decision::probability_line`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Decision {
    /// Verdict
    pub label: Label,
    /// Probability of class 0
    pub probability_not_potable: f64,
    /// Probability of class 1
    pub probability_potable: f64,
    /// Path that produced the verdict
    pub basis: DecisionBasis,
}

impl Decision {
    /// The standards-failure outcome
    pub fn rejected_by_standards() -> Self {
        Self {
            label: Label::NotPotable,
            probability_not_potable: 1.0,
            probability_potable: 0.0,
            basis: DecisionBasis::Standards,
        }
    }

    /// Verdict sentence for the report
    pub fn verdict(&self) -> String {
        match (self.basis, self.label) {
            (DecisionBasis::Standards, _) => {
                "Prediction: water is not potable because it does not meet international standards."
                    .to_string()
            }
            (DecisionBasis::Model, label) => format!("Prediction: water is {}.", label.as_str()),
        }
    }

    /// Two-decimal probability line, e.g. `Not Potable: 0.31, Potable: 0.69`
    pub fn probability_line(&self) -> String {
        format!(
            "Not Potable: {:.2}, Potable: {:.2}",
            self.probability_not_potable, self.probability_potable
        )
    }
}

/// Everything produced by one evaluation pass
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assessment {
    /// The sample as entered
    pub record: SampleRecord,
    /// Standards validation
    pub validation: ValidationResult,
    /// Features outside their standard range
    pub factors: Vec<Feature>,
    /// Final verdict
    pub decision: Decision,
}

/// Decide potability with the default probability tolerance
pub fn decide<O: PotabilityOracle>(
    record: &SampleRecord,
    validation: &ValidationResult,
    oracle: &O,
) -> Result<Decision, GatekeeperError> {
    decide_with_tolerance(record, validation, oracle, DEFAULT_PROBABILITY_TOLERANCE)
}

/// Decide potability
///
/// If `validation` failed, the oracle is never invoked. Otherwise the oracle's
/// class and probabilities are used as-is; an oracle failure or an answer that
/// is not a proper two-class distribution is surfaced as
/// [`GatekeeperError::Prediction`].
pub fn decide_with_tolerance<O: PotabilityOracle>(
    record: &SampleRecord,
    validation: &ValidationResult,
    oracle: &O,
    tolerance: f64,
) -> Result<Decision, GatekeeperError> {
    if !validation.valid {
        debug!(
            violations = validation.violations.len(),
            "standards check failed, skipping model"
        );
        return Ok(Decision::rejected_by_standards());
    }

    let class = oracle
        .predict(record)
        .map_err(|e| GatekeeperError::Prediction(e.to_string()))?;
    if class > 1 {
        return Err(GatekeeperError::Prediction(format!(
            "model returned class {}, expected 0 or 1",
            class
        )));
    }

    let (p0, p1) = oracle
        .predict_proba(record)
        .map_err(|e| GatekeeperError::Prediction(e.to_string()))?;
    check_distribution(p0, p1, tolerance)?;

    let decision = Decision {
        label: Label::from_class(class),
        probability_not_potable: p0,
        probability_potable: p1,
        basis: DecisionBasis::Model,
    };
    debug!(label = decision.label.as_str(), p0, p1, "model decision");
    Ok(decision)
}

fn check_distribution(p0: f64, p1: f64, tolerance: f64) -> Result<(), GatekeeperError> {
    for p in [p0, p1] {
        if !p.is_finite() || !(0.0..=1.0).contains(&p) {
            return Err(GatekeeperError::Prediction(format!(
                "probability {} is outside [0, 1]",
                p
            )));
        }
    }
    if ((p0 + p1) - 1.0).abs() > tolerance {
        return Err(GatekeeperError::Prediction(format!(
            "probabilities {} and {} do not sum to 1",
            p0, p1
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate;
    use potability_domain::STANDARDS;
    use std::cell::Cell;

    /// Oracle returning a fixed answer and counting calls
    struct MockOracle {
        class: u8,
        proba: (f64, f64),
        calls: Cell<usize>,
    }

    impl MockOracle {
        fn new(class: u8, proba: (f64, f64)) -> Self {
            Self {
                class,
                proba,
                calls: Cell::new(0),
            }
        }
    }

    impl PotabilityOracle for MockOracle {
        type Error = String;

        fn predict(&self, _record: &SampleRecord) -> Result<u8, Self::Error> {
            self.calls.set(self.calls.get() + 1);
            Ok(self.class)
        }

        fn predict_proba(&self, _record: &SampleRecord) -> Result<(f64, f64), Self::Error> {
            self.calls.set(self.calls.get() + 1);
            Ok(self.proba)
        }
    }

    struct FailingOracle;

    impl PotabilityOracle for FailingOracle {
        type Error = String;

        fn predict(&self, _record: &SampleRecord) -> Result<u8, Self::Error> {
            Err("incompatible schema".to_string())
        }

        fn predict_proba(&self, _record: &SampleRecord) -> Result<(f64, f64), Self::Error> {
            Err("incompatible schema".to_string())
        }
    }

    #[test]
    fn test_invalid_record_short_circuits() {
        let record = SampleRecord::default().with(Feature::Ph, 2.0);
        let validation = validate(&record, &STANDARDS);
        let oracle = MockOracle::new(1, (0.1, 0.9));

        let decision = decide(&record, &validation, &oracle).unwrap();

        assert_eq!(oracle.calls.get(), 0);
        assert_eq!(decision, Decision::rejected_by_standards());
        assert_eq!(decision.probability_line(), "Not Potable: 1.00, Potable: 0.00");
    }

    #[test]
    fn test_short_circuit_ignores_failing_oracle() {
        let record = SampleRecord::default().with(Feature::Turbidity, 3.0);
        let validation = validate(&record, &STANDARDS);
        let decision = decide(&record, &validation, &FailingOracle).unwrap();
        assert_eq!(decision.label, Label::NotPotable);
    }

    #[test]
    fn test_valid_record_uses_model() {
        let record = SampleRecord::default();
        let validation = validate(&record, &STANDARDS);
        let oracle = MockOracle::new(1, (0.3141, 0.6859));

        let decision = decide(&record, &validation, &oracle).unwrap();

        assert_eq!(oracle.calls.get(), 2);
        assert_eq!(decision.label, Label::Potable);
        assert_eq!(decision.basis, DecisionBasis::Model);
        assert_eq!(decision.probability_not_potable, 0.3141);
        assert_eq!(decision.probability_line(), "Not Potable: 0.31, Potable: 0.69");
        assert_eq!(decision.verdict(), "Prediction: water is potable.");
    }

    #[test]
    fn test_model_not_potable() {
        let record = SampleRecord::default();
        let validation = validate(&record, &STANDARDS);
        let oracle = MockOracle::new(0, (0.5, 0.5));

        let decision = decide(&record, &validation, &oracle).unwrap();
        assert_eq!(decision.label, Label::NotPotable);
        assert_eq!(decision.probability_line(), "Not Potable: 0.50, Potable: 0.50");
    }

    #[test]
    fn test_oracle_failure_is_surfaced() {
        let record = SampleRecord::default();
        let validation = validate(&record, &STANDARDS);
        let err = decide(&record, &validation, &FailingOracle).unwrap_err();
        match err {
            GatekeeperError::Prediction(msg) => assert!(msg.contains("incompatible schema")),
            other => panic!("Expected Prediction, got {:?}", other),
        }
    }

    #[test]
    fn test_bad_distribution_is_rejected() {
        let record = SampleRecord::default();
        let validation = validate(&record, &STANDARDS);

        let oracle = MockOracle::new(1, (0.4, 0.4));
        assert!(matches!(
            decide(&record, &validation, &oracle),
            Err(GatekeeperError::Prediction(_))
        ));

        let oracle = MockOracle::new(1, (-0.1, 1.1));
        assert!(matches!(
            decide(&record, &validation, &oracle),
            Err(GatekeeperError::Prediction(_))
        ));
    }

    #[test]
    fn test_free_decide_matches_default_gatekeeper_tolerance() {
        let record = SampleRecord::default();
        let validation = validate(&record, &STANDARDS);
        let gatekeeper = crate::Gatekeeper::default_config();

        let within = MockOracle::new(1, (0.3, 0.7 + 5e-7));
        assert!(decide(&record, &validation, &within).is_ok());
        assert!(gatekeeper.decide(&record, &validation, &within).is_ok());

        let beyond = MockOracle::new(1, (0.3, 0.7 + 2e-6));
        assert!(decide(&record, &validation, &beyond).is_err());
        assert!(gatekeeper.decide(&record, &validation, &beyond).is_err());
    }

    #[test]
    fn test_bad_class_is_rejected() {
        let record = SampleRecord::default();
        let validation = validate(&record, &STANDARDS);
        let oracle = MockOracle::new(2, (0.2, 0.8));
        assert!(matches!(
            decide(&record, &validation, &oracle),
            Err(GatekeeperError::Prediction(_))
        ));
    }

    #[test]
    fn test_standards_verdict_sentence() {
        assert_eq!(
            Decision::rejected_by_standards().verdict(),
            "Prediction: water is not potable because it does not meet international standards."
        );
    }
}
