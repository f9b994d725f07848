//! Feature module - the nine measured water-quality parameters

use serde::{Serialize, Serializer};
use std::fmt;

/// A measured water-quality parameter
///
/// The declaration order is the canonical order used everywhere: standards
/// checks, violation messages, influencing factors and the feature vector
/// handed to the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Feature {
    /// Acidity/alkalinity
    Ph,
    /// Dissolved calcium and magnesium (mg/L)
    Hardness,
    /// Total dissolved solids (ppm)
    Solids,
    /// Chloramines (ppm)
    Chloramines,
    /// Sulfate (mg/L)
    Sulfate,
    /// Electrical conductivity (μS/cm)
    Conductivity,
    /// Total organic carbon (ppm)
    OrganicCarbon,
    /// Trihalomethanes (μg/L)
    Trihalomethanes,
    /// Turbidity (NTU)
    Turbidity,
}

impl Feature {
    /// Number of features in a sample
    pub const COUNT: usize = 9;

    /// All features in canonical order
    pub const ALL: [Feature; Feature::COUNT] = [
        Feature::Ph,
        Feature::Hardness,
        Feature::Solids,
        Feature::Chloramines,
        Feature::Sulfate,
        Feature::Conductivity,
        Feature::OrganicCarbon,
        Feature::Trihalomethanes,
        Feature::Turbidity,
    ];

    /// Wire/column name, as used by the training dataset and the model file
    pub fn name(&self) -> &'static str {
        match self {
            Feature::Ph => "ph",
            Feature::Hardness => "Hardness",
            Feature::Solids => "Solids",
            Feature::Chloramines => "Chloramines",
            Feature::Sulfate => "Sulfate",
            Feature::Conductivity => "Conductivity",
            Feature::OrganicCarbon => "Organic_carbon",
            Feature::Trihalomethanes => "Trihalomethanes",
            Feature::Turbidity => "Turbidity",
        }
    }

    /// Human-readable label for prompts and tables
    pub fn label(&self) -> &'static str {
        match self {
            Feature::Ph => "pH",
            Feature::Hardness => "Hardness",
            Feature::Solids => "Solids",
            Feature::Chloramines => "Chloramines",
            Feature::Sulfate => "Sulfate",
            Feature::Conductivity => "Conductivity",
            Feature::OrganicCarbon => "Organic Carbon",
            Feature::Trihalomethanes => "Trihalomethanes",
            Feature::Turbidity => "Turbidity",
        }
    }

    /// Parse a feature from its wire name (case-sensitive)
    pub fn parse(s: &str) -> Option<Self> {
        Feature::ALL.into_iter().find(|f| f.name() == s)
    }

    /// Position in the canonical order
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Feature {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_order() {
        let names: Vec<&str> = Feature::ALL.iter().map(|f| f.name()).collect();
        assert_eq!(
            names,
            vec![
                "ph",
                "Hardness",
                "Solids",
                "Chloramines",
                "Sulfate",
                "Conductivity",
                "Organic_carbon",
                "Trihalomethanes",
                "Turbidity",
            ]
        );
    }

    #[test]
    fn test_parse_roundtrip() {
        for feature in Feature::ALL {
            assert_eq!(Feature::parse(feature.name()), Some(feature));
        }
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert_eq!(Feature::parse("PH"), None);
        assert_eq!(Feature::parse("organic_carbon"), None);
    }

    #[test]
    fn test_index_matches_position() {
        for (i, feature) in Feature::ALL.iter().enumerate() {
            assert_eq!(feature.index(), i);
        }
    }
}
