//! Drinking-water standards table
//!
//! A single shared constant holds the inclusive range for every feature. The
//! validator and the influencing-factor extractor both read from it, so the
//! two can never drift apart.

use crate::{Feature, SampleRecord};
use serde::Serialize;

/// Closed interval `[min, max]` of acceptable values
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StandardRange {
    /// Lowest acceptable value (inclusive)
    pub min: f64,
    /// Highest acceptable value (inclusive)
    pub max: f64,
}

impl StandardRange {
    /// Create a new range
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Check if the range contains a value, boundaries included
    ///
    /// NaN is never contained.
    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }
}

/// Mapping from feature to its acceptable range, in canonical order
#[derive(Debug, Clone, PartialEq)]
pub struct StandardsTable {
    entries: [(Feature, StandardRange); Feature::COUNT],
}

/// International drinking-water standards
pub static STANDARDS: StandardsTable = StandardsTable {
    entries: [
        (Feature::Ph, StandardRange::new(6.5, 8.5)),
        (Feature::Hardness, StandardRange::new(0.0, 300.0)),
        (Feature::Solids, StandardRange::new(0.0, 500.0)),
        (Feature::Chloramines, StandardRange::new(0.0, 4.0)),
        (Feature::Sulfate, StandardRange::new(0.0, 250.0)),
        (Feature::Conductivity, StandardRange::new(0.0, 800.0)),
        (Feature::OrganicCarbon, StandardRange::new(0.0, 5.0)),
        (Feature::Trihalomethanes, StandardRange::new(0.0, 80.0)),
        (Feature::Turbidity, StandardRange::new(0.0, 1.0)),
    ],
};

impl StandardsTable {
    /// Range for a feature
    pub fn range(&self, feature: Feature) -> StandardRange {
        self.entries[feature.index()].1
    }

    /// Iterate entries in canonical order
    pub fn iter(&self) -> impl Iterator<Item = (Feature, StandardRange)> + '_ {
        self.entries.iter().copied()
    }

    /// Features of `record` lying outside their range, in canonical order
    pub fn out_of_range<'a>(
        &'a self,
        record: &'a SampleRecord,
    ) -> impl Iterator<Item = (Feature, StandardRange)> + 'a {
        self.iter()
            .filter(move |(feature, range)| !range.contains(record.value(*feature)))
    }
}
