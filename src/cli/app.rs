use crate::catalog::BackupPolicy;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Library: a small catalog of books kept in a JSON file
#[derive(Parser)]
#[command(name = "library")]
#[command(version)]
#[command(about = "Track books, loans and returns in a JSON catalog")]
#[command(
    long_about = "Library keeps a catalog of books with their availability in a JSON file. Run without a subcommand for the interactive menu."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Catalog file (default: data/books.json)
    #[arg(long, global = true)]
    pub data_file: Option<PathBuf>,

    /// Log file (default: logs/app.log)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Set log level
    #[arg(long, value_enum, default_value = "info", global = true)]
    pub log_level: LogLevel,

    /// Write logs to stderr instead of the log file
    #[arg(long, global = true)]
    pub log_stderr: bool,

    /// Keep data and logs in the per-user data directory
    #[arg(long, global = true)]
    pub user_dirs: bool,

    /// How an unreadable catalog file is backed up
    #[arg(long, value_enum, default_value = "overwrite", global = true)]
    pub backup_policy: BackupPolicy,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a book to the catalog
    Add {
        #[arg(long)]
        title: String,

        #[arg(long)]
        author: String,

        #[arg(long)]
        isbn: String,
    },

    /// Issue a book
    Issue {
        isbn: String,
    },

    /// Return an issued book
    Return {
        isbn: String,
    },

    /// List every book in the catalog
    List {
        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Search by title (partial, case-insensitive)
    Search {
        title: String,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Look up a book by ISBN
    Show {
        isbn: String,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Interactive menu (the default)
    Menu,
}

impl Commands {
    /// Get the command name as a string
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Add { .. } => "add",
            Commands::Issue { .. } => "issue",
            Commands::Return { .. } => "return",
            Commands::List { .. } => "list",
            Commands::Search { .. } => "search",
            Commands::Show { .. } => "show",
            Commands::Menu => "menu",
        }
    }

    /// Check if this command can change the catalog
    pub fn modifies_catalog(&self) -> bool {
        matches!(
            self,
            Commands::Add { .. } | Commands::Issue { .. } | Commands::Return { .. } | Commands::Menu
        )
    }
}

/// Log levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_filter_directive(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
