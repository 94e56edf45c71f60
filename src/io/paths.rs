use crate::{LibraryError, Result};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

const DATA_FILE: &str = "books.json";
const LOG_FILE: &str = "app.log";

/// Where the catalog and its log live
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryPaths {
    /// Backing JSON file for the catalog
    pub data_file: PathBuf,
    /// Log output file
    pub log_file: PathBuf,
}

impl LibraryPaths {
    /// Paths under the platform's per-user data directory
    pub fn new() -> Result<Self> {
        let dirs = ProjectDirs::from("", "", "library-inventory").ok_or_else(|| {
            LibraryError::Path("Failed to determine project directories".to_string())
        })?;

        Ok(Self {
            data_file: dirs.data_dir().join(DATA_FILE),
            log_file: dirs.data_local_dir().join("logs").join(LOG_FILE),
        })
    }

    /// `data/books.json` and `logs/app.log` under `root`
    pub fn for_project(root: &Path) -> Self {
        Self {
            data_file: root.join("data").join(DATA_FILE),
            log_file: root.join("logs").join(LOG_FILE),
        }
    }

    /// Resolve paths from command line settings. Explicit files win over
    /// the chosen base location.
    pub fn resolve(
        user_dirs: bool,
        data_file: Option<PathBuf>,
        log_file: Option<PathBuf>,
    ) -> Result<Self> {
        let base = if user_dirs {
            Self::new()?
        } else {
            Self::default()
        };

        Ok(Self {
            data_file: data_file.unwrap_or(base.data_file),
            log_file: log_file.unwrap_or(base.log_file),
        })
    }
}

impl Default for LibraryPaths {
    /// Relative to the working directory
    fn default() -> Self {
        Self::for_project(Path::new(""))
    }
}
