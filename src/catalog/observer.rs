//! Reporting hooks for catalog store events.
//!
//! The store never logs directly. It reports to a [`CatalogObserver`], which
//! the binary backs with `tracing` and tests back with whatever they like.

use super::record::Record;
use std::path::Path;
use tracing::{debug, error, info, warn};

/// Receives notifications about store activity. Every method defaults to a no-op.
pub trait CatalogObserver {
    /// No backing file existed, a fresh one is being created
    fn created(&self, _path: &Path) {}

    /// Backing file read successfully
    fn loaded(&self, _path: &Path, _count: usize) {}

    /// Backing file could not be read or parsed
    fn load_failed(&self, _path: &Path, _error: &str) {}

    /// Unreadable file was moved aside
    fn backed_up(&self, _path: &Path, _backup: &Path) {}

    /// Moving the unreadable file aside failed
    fn backup_failed(&self, _path: &Path, _error: &std::io::Error) {}

    fn saved(&self, _path: &Path, _count: usize) {}

    fn save_failed(&self, _path: &Path, _error: &std::io::Error) {}

    fn added(&self, _record: &Record) {}

    /// `changed` is false when the record was already issued
    fn issued(&self, _isbn: &str, _changed: bool) {}

    /// `changed` is false when the record was not issued
    fn returned(&self, _isbn: &str, _changed: bool) {}
}

/// Forwards store events to `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl CatalogObserver for TracingObserver {
    fn created(&self, path: &Path) {
        info!(path = %path.display(), "Books JSON not found, creating new file");
    }

    fn loaded(&self, path: &Path, count: usize) {
        info!(path = %path.display(), count, "Loaded books");
    }

    fn load_failed(&self, path: &Path, error: &str) {
        error!(path = %path.display(), error, "Failed to load books JSON");
    }

    fn backed_up(&self, path: &Path, backup: &Path) {
        info!(
            path = %path.display(),
            backup = %backup.display(),
            "Backed up unreadable catalog file"
        );
    }

    fn backup_failed(&self, path: &Path, error: &std::io::Error) {
        warn!(path = %path.display(), error = %error, "Could not back up unreadable catalog file");
    }

    fn saved(&self, path: &Path, count: usize) {
        debug!(path = %path.display(), count, "Saved books");
    }

    fn save_failed(&self, path: &Path, error: &std::io::Error) {
        error!(path = %path.display(), error = %error, "Failed to save books JSON");
    }

    fn added(&self, record: &Record) {
        info!(isbn = %record.isbn, title = %record.title, "Added book");
    }

    fn issued(&self, isbn: &str, changed: bool) {
        if changed {
            info!(isbn, "Issued book");
        } else {
            info!(isbn, "Book already issued");
        }
    }

    fn returned(&self, isbn: &str, changed: bool) {
        if changed {
            info!(isbn, "Returned book");
        } else {
            info!(isbn, "Book was not issued");
        }
    }
}

/// Discards every event
#[derive(Debug, Default, Clone, Copy)]
pub struct NullObserver;

impl CatalogObserver for NullObserver {}
