//! Entry form bounds
//!
//! Each feature is entered through a bounded control with a default. The
//! bounds are wider than the standards on purpose: users must be able to
//! enter non-compliant samples so the standards check can reject them.

use crate::{DomainError, Feature};

/// Input bounds and default for one feature
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormField {
    /// Feature this field collects
    pub feature: Feature,
    /// Lowest accepted input (inclusive)
    pub min: f64,
    /// Highest accepted input (inclusive)
    pub max: f64,
    /// Value used when the user enters nothing
    pub default: f64,
}

/// Form fields in canonical order
pub static FORM_FIELDS: [FormField; Feature::COUNT] = [
    FormField::new(Feature::Ph, 0.0, 14.0, 7.0),
    FormField::new(Feature::Hardness, 0.0, 500.0, 150.0),
    FormField::new(Feature::Solids, 0.0, 1000.0, 500.0),
    FormField::new(Feature::Chloramines, 0.0, 10.0, 4.0),
    FormField::new(Feature::Sulfate, 0.0, 400.0, 200.0),
    FormField::new(Feature::Conductivity, 0.0, 1500.0, 500.0),
    FormField::new(Feature::OrganicCarbon, 0.0, 10.0, 5.0),
    FormField::new(Feature::Trihalomethanes, 0.0, 200.0, 80.0),
    FormField::new(Feature::Turbidity, 0.0, 5.0, 1.0),
];

impl FormField {
    const fn new(feature: Feature, min: f64, max: f64, default: f64) -> Self {
        Self {
            feature,
            min,
            max,
            default,
        }
    }

    /// Field for a feature
    pub fn for_feature(feature: Feature) -> &'static FormField {
        &FORM_FIELDS[feature.index()]
    }

    /// Check that an entered value is finite and within the field bounds
    pub fn check(&self, value: f64) -> Result<f64, DomainError> {
        if !value.is_finite() {
            return Err(DomainError::NonFinite {
                feature: self.feature.name(),
                value,
            });
        }
        if value < self.min || value > self.max {
            return Err(DomainError::OutsideInputRange {
                feature: self.feature.name(),
                min: self.min,
                max: self.max,
                value,
            });
        }
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::STANDARDS;

    #[test]
    fn test_fields_follow_canonical_order() {
        for (field, feature) in FORM_FIELDS.iter().zip(Feature::ALL) {
            assert_eq!(field.feature, feature);
        }
    }

    #[test]
    fn test_defaults_within_bounds() {
        for field in &FORM_FIELDS {
            assert!(field.check(field.default).is_ok(), "{}", field.feature);
        }
    }

    #[test]
    fn test_form_bounds_cover_standards() {
        for (feature, range) in STANDARDS.iter() {
            let field = FormField::for_feature(feature);
            assert!(field.min <= range.min && range.max <= field.max, "{}", feature);
        }
    }

    #[test]
    fn test_check_rejects_out_of_bounds() {
        let ph = FormField::for_feature(Feature::Ph);
        assert!(ph.check(14.0).is_ok());
        assert!(matches!(
            ph.check(14.5),
            Err(DomainError::OutsideInputRange { feature: "ph", .. })
        ));
        assert!(matches!(ph.check(f64::INFINITY), Err(DomainError::NonFinite { .. })));
    }
}
