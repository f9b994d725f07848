//! Sample record module - one water-quality observation

use crate::{DomainError, Feature};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single observation carrying all nine measurements
///
/// The record is fixed-shape: a value for every feature always exists, so
/// lookups cannot fail once a record is built. Dynamic input (JSON objects,
/// key/value maps) goes through [`SampleRecord::from_fields`], which is the
/// only place a missing feature can be reported.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<String, f64>")]
pub struct SampleRecord {
    /// pH
    #[serde(rename = "ph")]
    pub ph: f64,
    /// Hardness
    #[serde(rename = "Hardness")]
    pub hardness: f64,
    /// Solids
    #[serde(rename = "Solids")]
    pub solids: f64,
    /// Chloramines
    #[serde(rename = "Chloramines")]
    pub chloramines: f64,
    /// Sulfate
    #[serde(rename = "Sulfate")]
    pub sulfate: f64,
    /// Conductivity
    #[serde(rename = "Conductivity")]
    pub conductivity: f64,
    /// Organic carbon
    #[serde(rename = "Organic_carbon")]
    pub organic_carbon: f64,
    /// Trihalomethanes
    #[serde(rename = "Trihalomethanes")]
    pub trihalomethanes: f64,
    /// Turbidity
    #[serde(rename = "Turbidity")]
    pub turbidity: f64,
}

impl SampleRecord {
    /// Build a record from values in canonical feature order
    pub fn from_values(values: [f64; Feature::COUNT]) -> Self {
        let [
            ph,
            hardness,
            solids,
            chloramines,
            sulfate,
            conductivity,
            organic_carbon,
            trihalomethanes,
            turbidity,
        ] = values;
        Self {
            ph,
            hardness,
            solids,
            chloramines,
            sulfate,
            conductivity,
            organic_carbon,
            trihalomethanes,
            turbidity,
        }
    }

    /// Build a record from dynamic key/value pairs keyed by wire name
    ///
    /// # Errors
    ///
    /// - [`DomainError::UnknownFeature`] for a key that is not a feature
    /// - [`DomainError::MissingFeature`] for the first absent feature, in canonical order
    /// - [`DomainError::NonFinite`] for a NaN or infinite value
    pub fn from_fields<I, K>(fields: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = (K, f64)>,
        K: AsRef<str>,
    {
        let mut slots: [Option<f64>; Feature::COUNT] = [None; Feature::COUNT];
        for (key, value) in fields {
            let key = key.as_ref();
            let feature =
                Feature::parse(key).ok_or_else(|| DomainError::UnknownFeature(key.to_string()))?;
            slots[feature.index()] = Some(value);
        }

        let mut values = [0.0; Feature::COUNT];
        for feature in Feature::ALL {
            let value = slots[feature.index()]
                .ok_or_else(|| DomainError::MissingFeature(feature.name().to_string()))?;
            if !value.is_finite() {
                return Err(DomainError::NonFinite {
                    feature: feature.name(),
                    value,
                });
            }
            values[feature.index()] = value;
        }

        Ok(Self::from_values(values))
    }

    /// Value of a single feature
    pub fn value(&self, feature: Feature) -> f64 {
        match feature {
            Feature::Ph => self.ph,
            Feature::Hardness => self.hardness,
            Feature::Solids => self.solids,
            Feature::Chloramines => self.chloramines,
            Feature::Sulfate => self.sulfate,
            Feature::Conductivity => self.conductivity,
            Feature::OrganicCarbon => self.organic_carbon,
            Feature::Trihalomethanes => self.trihalomethanes,
            Feature::Turbidity => self.turbidity,
        }
    }

    /// Overwrite a single feature
    pub fn set(&mut self, feature: Feature, value: f64) {
        let slot = match feature {
            Feature::Ph => &mut self.ph,
            Feature::Hardness => &mut self.hardness,
            Feature::Solids => &mut self.solids,
            Feature::Chloramines => &mut self.chloramines,
            Feature::Sulfate => &mut self.sulfate,
            Feature::Conductivity => &mut self.conductivity,
            Feature::OrganicCarbon => &mut self.organic_carbon,
            Feature::Trihalomethanes => &mut self.trihalomethanes,
            Feature::Turbidity => &mut self.turbidity,
        };
        *slot = value;
    }

    /// Copy of this record with one feature replaced
    pub fn with(mut self, feature: Feature, value: f64) -> Self {
        self.set(feature, value);
        self
    }

    /// Feature vector in canonical order
    pub fn values(&self) -> [f64; Feature::COUNT] {
        Feature::ALL.map(|f| self.value(f))
    }
}

impl Default for SampleRecord {
    /// The entry form's default sample
    fn default() -> Self {
        Self::from_values(Feature::ALL.map(|f| crate::FormField::for_feature(f).default))
    }
}

impl TryFrom<BTreeMap<String, f64>> for SampleRecord {
    type Error = DomainError;

    fn try_from(fields: BTreeMap<String, f64>) -> Result<Self, Self::Error> {
        Self::from_fields(fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_fields() -> Vec<(&'static str, f64)> {
        vec![
            ("ph", 7.0),
            ("Hardness", 150.0),
            ("Solids", 500.0),
            ("Chloramines", 4.0),
            ("Sulfate", 200.0),
            ("Conductivity", 500.0),
            ("Organic_carbon", 5.0),
            ("Trihalomethanes", 80.0),
            ("Turbidity", 1.0),
        ]
    }

    #[test]
    fn test_from_fields_complete() {
        let record = SampleRecord::from_fields(full_fields()).unwrap();
        assert_eq!(record, SampleRecord::default());
    }

    #[test]
    fn test_from_fields_missing_feature() {
        let fields: Vec<_> = full_fields()
            .into_iter()
            .filter(|(k, _)| *k != "Sulfate")
            .collect();
        let err = SampleRecord::from_fields(fields).unwrap_err();
        assert_eq!(err, DomainError::MissingFeature("Sulfate".to_string()));
    }

    #[test]
    fn test_from_fields_unknown_feature() {
        let mut fields = full_fields();
        fields.push(("Lead", 0.01));
        let err = SampleRecord::from_fields(fields).unwrap_err();
        assert_eq!(err, DomainError::UnknownFeature("Lead".to_string()));
    }

    #[test]
    fn test_from_fields_non_finite() {
        let mut fields = full_fields();
        fields[8].1 = f64::NAN;
        let err = SampleRecord::from_fields(fields).unwrap_err();
        assert!(matches!(err, DomainError::NonFinite { feature: "Turbidity", .. }));
    }

    #[test]
    fn test_values_in_canonical_order() {
        let record = SampleRecord::default().with(Feature::Turbidity, 0.3);
        let values = record.values();
        assert_eq!(values[0], 7.0);
        assert_eq!(values[Feature::Turbidity.index()], 0.3);
    }

    #[test]
    fn test_set_and_value_agree() {
        let mut record = SampleRecord::default();
        for (i, feature) in Feature::ALL.into_iter().enumerate() {
            record.set(feature, i as f64);
        }
        for (i, feature) in Feature::ALL.into_iter().enumerate() {
            assert_eq!(record.value(feature), i as f64);
        }
    }

    #[test]
    fn test_json_uses_wire_names() {
        let json = serde_json::to_value(SampleRecord::default()).unwrap();
        assert_eq!(json["ph"], 7.0);
        assert_eq!(json["Organic_carbon"], 5.0);

        let parsed: SampleRecord = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, SampleRecord::default());
    }

    #[test]
    fn test_json_missing_key_is_rejected() {
        let result: Result<SampleRecord, _> =
            serde_json::from_str(r#"{"ph": 7.0, "Hardness": 150}"#);
        let err = result.unwrap_err().to_string();
        assert!(err.contains("Missing feature: Solids"), "got: {}", err);
    }
}
