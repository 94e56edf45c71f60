pub mod add;
pub mod circulation;
pub mod list;
pub mod menu;
pub mod search;

use crate::catalog::{CatalogStore, Record};
use crate::cli::OutputFormat;
use crate::Result;
use std::io::Write;

/// Common trait for all command handlers
pub trait CommandHandler {
    /// Execute the command against `store`, writing user-facing output to `out`
    fn execute(&self, store: &mut CatalogStore, out: &mut dyn Write) -> Result<()>;

    /// Get command name for logging
    fn name(&self) -> &'static str;
}

/// Print `records` one per line, or as a JSON array. `empty` is printed in
/// text mode when there is nothing to show.
pub(crate) fn write_records(
    out: &mut dyn Write,
    records: &[&Record],
    format: OutputFormat,
    empty: &str,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            if records.is_empty() {
                writeln!(out, "{}", empty)?;
            }
            for record in records {
                writeln!(out, "{}", record)?;
            }
        }
        OutputFormat::Json => {
            writeln!(out, "{}", serde_json::to_string_pretty(records)?)?;
        }
    }
    Ok(())
}
