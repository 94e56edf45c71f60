use super::backup::BackupPolicy;
use super::observer::{CatalogObserver, TracingObserver};
use super::record::Record;
use crate::{LibraryError, Result};
use chrono::Utc;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// What [`CatalogStore::load`] found on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// No backing file existed; an empty one was written
    Created,
    /// Backing file parsed, holding this many books
    Loaded(usize),
    /// Backing file was unreadable. It was moved to `backup` when that
    /// succeeded, and an empty catalog was written in its place.
    Recovered { backup: Option<PathBuf> },
}

/// Owns every catalog record and mirrors them to a single JSON file.
///
/// Records keep insertion order. Each mutation rewrites the whole file.
pub struct CatalogStore {
    /// Backing JSON file
    path: PathBuf,
    books: Vec<Record>,
    backup_policy: BackupPolicy,
    observer: Box<dyn CatalogObserver>,
}

impl CatalogStore {
    /// Create an empty store for `path` without touching the filesystem
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            books: Vec::new(),
            backup_policy: BackupPolicy::default(),
            observer: Box::new(TracingObserver),
        }
    }

    /// Create a store for `path` and load it
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let mut store = Self::new(path);
        store.load()?;
        Ok(store)
    }

    /// Report events to `observer` instead of `tracing`
    pub fn with_observer(mut self, observer: impl CatalogObserver + 'static) -> Self {
        self.observer = Box::new(observer);
        self
    }

    pub fn with_backup_policy(mut self, policy: BackupPolicy) -> Self {
        self.backup_policy = policy;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Replace the in-memory catalog with the backing file's contents.
    ///
    /// A missing file yields an empty catalog. An unreadable one is moved
    /// aside and replaced by an empty catalog. Only a failure to write the
    /// fresh file is returned as an error.
    pub fn load(&mut self) -> Result<LoadOutcome> {
        if !self.path.exists() {
            self.observer.created(&self.path);
            self.books.clear();
            self.save()?;
            return Ok(LoadOutcome::Created);
        }

        match self.read_books() {
            Ok(books) => {
                self.books = books;
                self.observer.loaded(&self.path, self.books.len());
                Ok(LoadOutcome::Loaded(self.books.len()))
            }
            Err(e) => {
                self.observer.load_failed(&self.path, &e.to_string());
                let backup = self.quarantine();
                self.books.clear();
                self.save()?;
                Ok(LoadOutcome::Recovered { backup })
            }
        }
    }

    /// Write the whole catalog to the backing file, replacing its contents
    pub fn save(&self) -> Result<()> {
        let content = serde_json::to_string_pretty(&self.books)?;

        if let Err(source) = self.write_file(&content) {
            self.observer.save_failed(&self.path, &source);
            return Err(LibraryError::Save {
                path: self.path.clone(),
                source,
            });
        }

        self.observer.saved(&self.path, self.books.len());
        Ok(())
    }

    /// Append a new available book and persist it
    pub fn add(&mut self, title: &str, author: &str, isbn: &str) -> Result<&Record> {
        if self.find_by_isbn(isbn).is_some() {
            return Err(LibraryError::DuplicateIsbn(isbn.to_string()));
        }

        self.books.push(Record::new(title, author, isbn));
        self.save()?;

        let index = self.books.len() - 1;
        let record = &self.books[index];
        self.observer.added(record);
        Ok(record)
    }

    pub fn find_by_isbn(&self, isbn: &str) -> Option<&Record> {
        self.books.iter().find(|b| b.isbn == isbn)
    }

    /// Books whose title contains `query`, ignoring case, in catalog order
    pub fn find_by_title(&self, query: &str) -> Vec<&Record> {
        let query = query.to_lowercase();
        self.books
            .iter()
            .filter(|b| b.title.to_lowercase().contains(&query))
            .collect()
    }

    pub fn list_all(&self) -> &[Record] {
        &self.books
    }

    /// Every book rendered as a display line
    pub fn display_all(&self) -> Vec<String> {
        self.books.iter().map(|b| b.to_string()).collect()
    }

    /// Issue the book with `isbn`. The catalog is saved whether or not the
    /// status changed.
    pub fn issue(&mut self, isbn: &str) -> Result<bool> {
        let changed = self.record_mut(isbn)?.issue();
        self.observer.issued(isbn, changed);
        self.save()?;
        Ok(changed)
    }

    /// Return the book with `isbn`. The catalog is saved whether or not the
    /// status changed.
    pub fn return_item(&mut self, isbn: &str) -> Result<bool> {
        let changed = self.record_mut(isbn)?.return_item();
        self.observer.returned(isbn, changed);
        self.save()?;
        Ok(changed)
    }

    fn record_mut(&mut self, isbn: &str) -> Result<&mut Record> {
        self.books
            .iter_mut()
            .find(|b| b.isbn == isbn)
            .ok_or_else(|| LibraryError::NotFound(isbn.to_string()))
    }

    fn read_books(&self) -> Result<Vec<Record>> {
        let content = fs::read_to_string(&self.path)?;
        let books: Vec<Record> = serde_json::from_str(&content)?;

        {
            let mut seen = HashSet::new();
            for book in &books {
                if !seen.insert(book.isbn.as_str()) {
                    return Err(LibraryError::MalformedCatalog(format!(
                        "duplicate ISBN {}",
                        book.isbn
                    )));
                }
            }
        }
        Ok(books)
    }

    fn write_file(&self, content: &str) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, content)
    }

    /// Move the backing file aside. Failure is reported and otherwise ignored.
    fn quarantine(&self) -> Option<PathBuf> {
        let backup = self.backup_policy.backup_path(&self.path, Utc::now());
        match fs::rename(&self.path, &backup) {
            Ok(()) => {
                self.observer.backed_up(&self.path, &backup);
                Some(backup)
            }
            Err(e) => {
                self.observer.backup_failed(&self.path, &e);
                None
            }
        }
    }
}
