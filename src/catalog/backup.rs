use chrono::{DateTime, Utc};
use clap::ValueEnum;
use std::path::{Path, PathBuf};

const BACKUP_EXTENSION: &str = "bak.json";

/// How an unreadable backing file is named when it is moved aside
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum BackupPolicy {
    /// `books.bak.json`; a later failure replaces the previous backup
    #[default]
    Overwrite,
    /// `books.20261019T101500Z.bak.json`; earlier backups are kept
    Timestamped,
}

impl BackupPolicy {
    /// Backup location for `path` at time `now`
    pub fn backup_path(&self, path: &Path, now: DateTime<Utc>) -> PathBuf {
        match self {
            BackupPolicy::Overwrite => path.with_extension(BACKUP_EXTENSION),
            BackupPolicy::Timestamped => {
                let stamp = now.format("%Y%m%dT%H%M%SZ");
                path.with_extension(format!("{stamp}.{BACKUP_EXTENSION}"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 10, 15, 0).unwrap()
    }

    #[test]
    fn test_overwrite_replaces_extension() {
        let policy = BackupPolicy::Overwrite;
        assert_eq!(
            policy.backup_path(Path::new("data/books.json"), fixed_time()),
            PathBuf::from("data/books.bak.json")
        );
    }

    #[test]
    fn test_overwrite_adds_suffix_without_extension() {
        let policy = BackupPolicy::Overwrite;
        assert_eq!(
            policy.backup_path(Path::new("data/books"), fixed_time()),
            PathBuf::from("data/books.bak.json")
        );
    }

    #[test]
    fn test_timestamped_embeds_utc_time() {
        let policy = BackupPolicy::Timestamped;
        assert_eq!(
            policy.backup_path(Path::new("data/books.json"), fixed_time()),
            PathBuf::from("data/books.20261019T101500Z.bak.json")
        );
    }
}
