use super::{write_records, CommandHandler};
use crate::catalog::{CatalogStore, Record};
use crate::cli::OutputFormat;
use crate::Result;
use std::io::Write;

/// Handler for the `list` command
pub struct ListCommand {
    pub format: OutputFormat,
}

impl CommandHandler for ListCommand {
    fn execute(&self, store: &mut CatalogStore, out: &mut dyn Write) -> Result<()> {
        let records: Vec<&Record> = store.list_all().iter().collect();
        write_records(out, &records, self.format, "No books in the catalog.")
    }

    fn name(&self) -> &'static str {
        "list"
    }
}

impl ListCommand {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }
}
