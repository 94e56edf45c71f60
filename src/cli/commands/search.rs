//! Title search and ISBN lookup.

use super::{write_records, CommandHandler};
use crate::catalog::CatalogStore;
use crate::cli::OutputFormat;
use crate::Result;
use std::io::Write;

/// Handler for the `search` command
pub struct SearchCommand {
    pub title: String,
    pub format: OutputFormat,
}

impl CommandHandler for SearchCommand {
    fn execute(&self, store: &mut CatalogStore, out: &mut dyn Write) -> Result<()> {
        let results = store.find_by_title(&self.title);
        write_records(out, &results, self.format, "No results.")
    }

    fn name(&self) -> &'static str {
        "search"
    }
}

impl SearchCommand {
    pub fn new(title: String, format: OutputFormat) -> Self {
        Self { title, format }
    }
}

/// Handler for the `show` command
pub struct ShowCommand {
    pub isbn: String,
    pub format: OutputFormat,
}

impl CommandHandler for ShowCommand {
    fn execute(&self, store: &mut CatalogStore, out: &mut dyn Write) -> Result<()> {
        let record = store.find_by_isbn(&self.isbn);
        match self.format {
            OutputFormat::Text => match record {
                Some(record) => writeln!(out, "{}", record)?,
                None => writeln!(out, "Not found.")?,
            },
            // `null` when missing
            OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&record)?)?,
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "show"
    }
}

impl ShowCommand {
    pub fn new(isbn: String, format: OutputFormat) -> Self {
        Self { isbn, format }
    }
}
