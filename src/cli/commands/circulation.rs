//! Issuing and returning books.

use super::CommandHandler;
use crate::catalog::CatalogStore;
use crate::Result;
use std::io::Write;

/// Handler for the `issue` command
pub struct IssueCommand {
    pub isbn: String,
}

impl CommandHandler for IssueCommand {
    fn execute(&self, store: &mut CatalogStore, out: &mut dyn Write) -> Result<()> {
        if store.issue(&self.isbn)? {
            writeln!(out, "Issued.")?;
        } else {
            writeln!(out, "Book already issued.")?;
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "issue"
    }
}

impl IssueCommand {
    pub fn new(isbn: String) -> Self {
        Self { isbn }
    }
}

/// Handler for the `return` command
pub struct ReturnCommand {
    pub isbn: String,
}

impl CommandHandler for ReturnCommand {
    fn execute(&self, store: &mut CatalogStore, out: &mut dyn Write) -> Result<()> {
        if store.return_item(&self.isbn)? {
            writeln!(out, "Returned.")?;
        } else {
            writeln!(out, "Book was not issued.")?;
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "return"
    }
}

impl ReturnCommand {
    pub fn new(isbn: String) -> Self {
        Self { isbn }
    }
}
