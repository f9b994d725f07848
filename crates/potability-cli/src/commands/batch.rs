//! Batch command implementation.

use crate::cli::BatchArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use potability_domain::PotabilityOracle;
use potability_gatekeeper::{Assessment, Gatekeeper};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Read};
use tracing::info;

/// One sample as it appears in the input file.
pub type RawSample = BTreeMap<String, f64>;

/// Execute the batch command.
pub fn execute_batch<O: PotabilityOracle>(
    args: BatchArgs,
    gatekeeper: &Gatekeeper,
    oracle: &O,
    formatter: &Formatter,
) -> Result<()> {
    let json = if let Some(file_path) = args.file {
        fs::read_to_string(&file_path)?
    } else if args.stdin {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        return Err(CliError::InvalidInput(
            "Must specify --file or --stdin".to_string(),
        ));
    };

    let samples = parse_samples(&json)?;
    let assessments = assess_samples(samples, gatekeeper, oracle)?;
    info!(samples = assessments.len(), "batch assessed");

    println!("{}", formatter.format_batch(&assessments)?);
    Ok(())
}

/// Parse a JSON array of samples keyed by feature wire name.
///
/// Only the outer array is checked here; each element is decoded on its own
/// so a malformed sample can be reported with its position.
pub fn parse_samples(json: &str) -> Result<Vec<Value>> {
    Ok(serde_json::from_str(json)?)
}

/// Assess every sample; the first bad sample aborts the batch.
///
/// Errors carry the sample's 1-based index and keep the underlying error.
pub fn assess_samples<O: PotabilityOracle>(
    samples: Vec<Value>,
    gatekeeper: &Gatekeeper,
    oracle: &O,
) -> Result<Vec<Assessment>> {
    samples
        .into_iter()
        .enumerate()
        .map(|(i, value)| {
            let index = i + 1;
            let fields: RawSample = serde_json::from_value(value)
                .map_err(|source| CliError::SampleFormat { index, source })?;
            gatekeeper
                .assess_fields(fields, oracle)
                .map_err(|source| CliError::Sample { index, source })
        })
        .collect()
}
