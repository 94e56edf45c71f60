use super::CommandHandler;
use crate::catalog::CatalogStore;
use crate::Result;
use std::io::Write;

/// Handler for the `add` command
pub struct AddCommand {
    pub title: String,
    pub author: String,
    pub isbn: String,
}

impl CommandHandler for AddCommand {
    fn execute(&self, store: &mut CatalogStore, out: &mut dyn Write) -> Result<()> {
        store.add(&self.title, &self.author, &self.isbn)?;
        writeln!(out, "Book added.")?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "add"
    }
}

impl AddCommand {
    /// Create new add command
    pub fn new(title: String, author: String, isbn: String) -> Self {
        Self {
            title,
            author,
            isbn,
        }
    }
}
