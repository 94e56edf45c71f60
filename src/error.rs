use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LibraryError {
    #[error("A book with ISBN {0} already exists")]
    DuplicateIsbn(String),

    #[error("Book not found: {0}")]
    NotFound(String),

    #[error("Failed to write catalog file {}: {source}", .path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed catalog file: {0}")]
    MalformedCatalog(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialization(#[from] serde_json::Error),

    #[error("Path error: {0}")]
    Path(String),
}

pub type Result<T> = std::result::Result<T, LibraryError>;
