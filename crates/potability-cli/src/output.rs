//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use potability_domain::{Feature, StandardsTable};
use potability_gatekeeper::{Assessment, DecisionBasis, Label};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format the report for one assessment.
    pub fn format_assessment(&self, assessment: &Assessment) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(assessment)?),
            OutputFormat::Table => Ok(self.format_report(assessment)),
            OutputFormat::Quiet => Ok(assessment.decision.label.as_str().to_string()),
        }
    }

    /// Format the results of a batch run.
    pub fn format_batch(&self, assessments: &[Assessment]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(assessments)?),
            OutputFormat::Table => Ok(self.format_batch_table(assessments)),
            OutputFormat::Quiet => Ok(assessments
                .iter()
                .map(|a| a.decision.label.as_str())
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    /// Full human-readable report.
    fn format_report(&self, assessment: &Assessment) -> String {
        let mut out = Vec::new();

        out.push(self.heading("Sample Parameters"));
        let mut builder = Builder::default();
        builder.push_record(["Parameter", "Value"]);
        for feature in Feature::ALL {
            builder.push_record([
                feature.name().to_string(),
                assessment.record.value(feature).to_string(),
            ]);
        }
        out.push(self.table(builder));

        let validation = &assessment.validation;
        if validation.valid {
            out.push(self.heading("All parameters meet international standards!"));
            out.push("Water is potable according to international standards.".to_string());
        } else {
            out.push(self.heading("Water Quality Standards Check"));
            for message in &validation.messages {
                out.push(self.error(message));
            }
            out.push(
                "Water is not potable because the parameters above do not meet the standards."
                    .to_string(),
            );
        }

        if assessment.factors.is_empty() {
            out.push(self.heading("All parameters are within optimal ranges."));
        } else {
            out.push(self.heading("Factors Influencing the Not-Potable Decision"));
            out.push(join_features(&assessment.factors));
        }

        let decision = &assessment.decision;
        out.push(self.heading("Model Prediction"));
        let verdict = decision.verdict();
        out.push(match decision.label {
            Label::Potable => self.colorize(&verdict, "green"),
            Label::NotPotable => self.colorize(&verdict, "red"),
        });
        out.push(self.heading("Prediction Probabilities"));
        out.push(decision.probability_line());

        out.join("\n")
    }

    fn format_batch_table(&self, assessments: &[Assessment]) -> String {
        if assessments.is_empty() {
            return self.colorize("No samples found.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["#", "Verdict", "Basis", "Factors", "Not Potable", "Potable"]);
        for (i, assessment) in assessments.iter().enumerate() {
            let decision = &assessment.decision;
            let basis = match decision.basis {
                DecisionBasis::Standards => "standards",
                DecisionBasis::Model => "model",
            };
            let factors = if assessment.factors.is_empty() {
                "-".to_string()
            } else {
                join_features(&assessment.factors)
            };
            builder.push_record([
                (i + 1).to_string(),
                decision.label.as_str().to_string(),
                basis.to_string(),
                factors,
                format!("{:.2}", decision.probability_not_potable),
                format!("{:.2}", decision.probability_potable),
            ]);
        }
        self.table(builder)
    }

    /// Format the standards table.
    pub fn format_standards(&self, standards: &StandardsTable) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let entries: Vec<serde_json::Value> = standards
                    .iter()
                    .map(|(feature, range)| {
                        serde_json::json!({
                            "feature": feature.name(),
                            "min": range.min,
                            "max": range.max,
                        })
                    })
                    .collect();
                Ok(serde_json::to_string_pretty(&entries)?)
            }
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Parameter", "Min", "Max"]);
                for (feature, range) in standards.iter() {
                    builder.push_record([
                        feature.name().to_string(),
                        range.min.to_string(),
                        range.max.to_string(),
                    ]);
                }
                Ok(self.table(builder))
            }
            OutputFormat::Quiet => Ok(standards
                .iter()
                .map(|(feature, range)| format!("{} {} {}", feature, range.min, range.max))
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    fn heading(&self, text: &str) -> String {
        let text = format!("\n{}", text);
        if self.color_enabled {
            text.bold().to_string()
        } else {
            text
        }
    }

    fn table(&self, builder: Builder) -> String {
        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

fn join_features(features: &[Feature]) -> String {
    features
        .iter()
        .map(|f| f.name())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use potability_domain::{PotabilityOracle, SampleRecord, STANDARDS};
    use potability_gatekeeper::Gatekeeper;

    struct FixedOracle;

    impl PotabilityOracle for FixedOracle {
        type Error = String;

        fn predict(&self, _record: &SampleRecord) -> std::result::Result<u8, Self::Error> {
            Ok(1)
        }

        fn predict_proba(
            &self,
            _record: &SampleRecord,
        ) -> std::result::Result<(f64, f64), Self::Error> {
            Ok((0.234, 0.766))
        }
    }

    fn assess(record: SampleRecord) -> Assessment {
        Gatekeeper::default_config().assess(record, &FixedOracle).unwrap()
    }

    #[test]
    fn test_report_for_compliant_sample() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_assessment(&assess(SampleRecord::default())).unwrap();

        assert!(output.contains("All parameters meet international standards!"));
        assert!(output.contains("All parameters are within optimal ranges."));
        assert!(output.contains("Prediction: water is potable."));
        assert!(output.contains("Not Potable: 0.23, Potable: 0.77"));
        assert!(output.contains("Organic_carbon"));
    }

    #[test]
    fn test_report_for_failing_sample() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let record = SampleRecord::default()
            .with(Feature::Ph, 2.0)
            .with(Feature::Turbidity, 3.0);
        let output = formatter.format_assessment(&assess(record)).unwrap();

        assert!(output.contains("✗ ph is outside the standard range (6.5 - 8.5)."));
        assert!(output.contains("✗ Turbidity is outside the standard range (0 - 1)."));
        assert!(output.contains("ph, Turbidity"));
        assert!(output.contains("does not meet international standards"));
        assert!(output.contains("Not Potable: 1.00, Potable: 0.00"));
    }

    #[test]
    fn test_json_report() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_assessment(&assess(SampleRecord::default())).unwrap();
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(json["decision"]["label"], "potable");
        assert_eq!(json["validation"]["valid"], true);
    }

    #[test]
    fn test_quiet_report() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let record = SampleRecord::default().with(Feature::Sulfate, 300.0);
        let output = formatter.format_assessment(&assess(record)).unwrap();
        assert_eq!(output, "not potable");
    }

    #[test]
    fn test_batch_table() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let batch = vec![
            assess(SampleRecord::default()),
            assess(SampleRecord::default().with(Feature::Solids, 900.0)),
        ];
        let output = formatter.format_batch(&batch).unwrap();
        assert!(output.contains("Verdict"));
        assert!(output.contains("standards"));
        assert!(output.contains("Solids"));
    }

    #[test]
    fn test_empty_batch() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert!(formatter.format_batch(&[]).unwrap().contains("No samples found"));
    }

    #[test]
    fn test_standards_table() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_standards(&STANDARDS).unwrap();
        assert!(output.contains("Trihalomethanes"));
        assert!(output.contains("6.5"));
        assert!(output.contains("800"));
    }

    #[test]
    fn test_echo_shows_values_as_entered() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let record = SampleRecord::default()
            .with(Feature::Ph, 6.49999)
            .with(Feature::Turbidity, 1.00004)
            .with(Feature::Hardness, 300.0);
        let output = formatter.format_assessment(&assess(record)).unwrap();

        assert!(output.contains("6.49999"), "got: {}", output);
        assert!(output.contains("1.00004"), "got: {}", output);
        assert!(output.contains("300"));
        assert!(output.contains("ph is outside the standard range (6.5 - 8.5)."));
        assert!(output.contains("Turbidity is outside the standard range (0 - 1)."));
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert_eq!(formatter.success("test"), "✓ test");
    }
}
