//! Assess command implementation.

use crate::cli::AssessArgs;
use crate::error::Result;
use crate::output::Formatter;
use potability_domain::PotabilityOracle;
use potability_gatekeeper::Gatekeeper;

/// Execute the assess command.
pub fn execute_assess<O: PotabilityOracle>(
    args: AssessArgs,
    gatekeeper: &Gatekeeper,
    oracle: &O,
    formatter: &Formatter,
) -> Result<()> {
    let record = args.to_record()?;
    let assessment = gatekeeper.assess(record, oracle)?;
    println!("{}", formatter.format_assessment(&assessment)?);
    Ok(())
}
