//! Standards command implementation.

use crate::error::Result;
use crate::output::Formatter;
use potability_gatekeeper::Gatekeeper;

/// Execute the standards command.
pub fn execute_standards(gatekeeper: &Gatekeeper, formatter: &Formatter) -> Result<()> {
    println!("{}", formatter.format_standards(gatekeeper.standards())?);
    Ok(())
}
