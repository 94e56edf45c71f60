//! Library inventory: a small book catalog kept in a JSON file.
//!
//! [`catalog::CatalogStore`] owns the records and persistence, and
//! [`cli`] holds the command line and interactive menu built on top of it.

pub mod catalog;
pub mod cli;
pub mod error;
pub mod io;

pub use catalog::{CatalogStore, Record, Status};
pub use error::{LibraryError, Result};
