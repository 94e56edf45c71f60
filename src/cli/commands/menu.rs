//! The interactive numbered menu.

use super::{write_records, CommandHandler};
use crate::catalog::CatalogStore;
use crate::cli::OutputFormat;
use crate::Result;
use std::io::{self, BufRead, Write};
use tracing::error;

const MENU: &str = "
Library Inventory Manager
1. Add Book
2. Issue Book
3. Return Book
4. View All Books
5. Search by Title
6. Search by ISBN
7. Exit
Choose an option: ";

/// Handler for the `menu` command, reading choices from stdin
pub struct MenuCommand;

impl CommandHandler for MenuCommand {
    fn execute(&self, store: &mut CatalogStore, out: &mut dyn Write) -> Result<()> {
        let stdin = io::stdin();
        let mut input = stdin.lock();
        run_menu(store, &mut input, out)
    }

    fn name(&self) -> &'static str {
        "menu"
    }
}

enum Step {
    Continue,
    Exit,
}

/// Run the menu until the user picks Exit or input ends.
///
/// Errors from catalog operations are shown to the user and the loop carries
/// on. Only failures to read input or write output end it early.
pub fn run_menu<R: BufRead>(
    store: &mut CatalogStore,
    input: &mut R,
    out: &mut dyn Write,
) -> Result<()> {
    loop {
        let Some(choice) = prompt(input, out, MENU)? else {
            writeln!(out)?;
            return Ok(());
        };

        match handle_choice(&choice, store, input, out) {
            Ok(Step::Continue) => {}
            Ok(Step::Exit) => return Ok(()),
            Err(e) => {
                error!(choice = %choice, error = %e, "Error in menu");
                writeln!(out, "Error: {}", e)?;
            }
        }
    }
}

fn handle_choice<R: BufRead>(
    choice: &str,
    store: &mut CatalogStore,
    input: &mut R,
    out: &mut dyn Write,
) -> Result<Step> {
    match choice {
        "1" => {
            let Some(title) = prompt(input, out, "Title: ")? else {
                return Ok(Step::Exit);
            };
            let Some(author) = prompt(input, out, "Author: ")? else {
                return Ok(Step::Exit);
            };
            let Some(isbn) = prompt(input, out, "ISBN: ")? else {
                return Ok(Step::Exit);
            };
            store.add(&title, &author, &isbn)?;
            writeln!(out, "Book added.")?;
        }
        "2" => {
            let Some(isbn) = prompt(input, out, "ISBN to issue: ")? else {
                return Ok(Step::Exit);
            };
            let message = if store.issue(&isbn)? {
                "Issued."
            } else {
                "Book already issued."
            };
            writeln!(out, "{}", message)?;
        }
        "3" => {
            let Some(isbn) = prompt(input, out, "ISBN to return: ")? else {
                return Ok(Step::Exit);
            };
            let message = if store.return_item(&isbn)? {
                "Returned."
            } else {
                "Book was not issued."
            };
            writeln!(out, "{}", message)?;
        }
        "4" => {
            for line in store.display_all() {
                writeln!(out, "{}", line)?;
            }
        }
        "5" => {
            let Some(title) = prompt(input, out, "Search title (partial allowed): ")? else {
                return Ok(Step::Exit);
            };
            let results = store.find_by_title(&title);
            write_records(out, &results, OutputFormat::Text, "No results.")?;
        }
        "6" => {
            let Some(isbn) = prompt(input, out, "ISBN: ")? else {
                return Ok(Step::Exit);
            };
            match store.find_by_isbn(&isbn) {
                Some(record) => writeln!(out, "{}", record)?,
                None => writeln!(out, "Not found.")?,
            }
        }
        "7" => {
            writeln!(out, "Exiting.")?;
            return Ok(Step::Exit);
        }
        _ => writeln!(out, "Invalid choice. Enter 1-7.")?,
    }
    Ok(Step::Continue)
}

/// Show `label` and read one trimmed line. `None` at end of input.
fn prompt<R: BufRead>(input: &mut R, out: &mut dyn Write, label: &str) -> Result<Option<String>> {
    write!(out, "{}", label)?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
