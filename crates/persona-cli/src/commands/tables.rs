//! Validate the built-in tables

use persona_analysis::{tables, validate_tables};
use tracing::info;

use crate::error::CliResult;
use crate::output::print_success;

/// Execute the check-tables command
pub fn execute() -> CliResult<()> {
    validate_tables()?;
    info!(
        comfort_buckets = tables::comfort_buckets().len(),
        enhancement_buckets = tables::enhancement_buckets().len(),
        personas = tables::personas().len(),
        "Tables validated"
    );
    print_success("Bucket and persona tables are consistent");
    Ok(())
}
