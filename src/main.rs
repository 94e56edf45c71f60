use anyhow::{Context, Result};
use clap::Parser;
use library_inventory::{
    catalog::CatalogStore,
    cli::commands::{
        add::AddCommand,
        circulation::{IssueCommand, ReturnCommand},
        list::ListCommand,
        menu::MenuCommand,
        search::{SearchCommand, ShowCommand},
        CommandHandler,
    },
    cli::{Cli, Commands, LogLevel},
    io::LibraryPaths,
};
use std::fs::{self, File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

/// Initialize tracing from CLI flags.
///
/// Logs are appended to `log_file` unless `to_stderr` is set or the file
/// cannot be opened. Stdout is reserved for command output.
fn initialize_tracing(log_level: LogLevel, log_file: &Path, to_stderr: bool) {
    let filter = EnvFilter::new(log_level.to_filter_directive());

    if !to_stderr {
        match open_log_file(log_file) {
            Ok(file) => {
                tracing_subscriber::fmt()
                    .with_env_filter(filter)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file))
                    .init();
                return;
            }
            Err(e) => {
                eprintln!(
                    "Warning: Failed to open log file {}: {}",
                    log_file.display(),
                    e
                );
            }
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn open_log_file(path: &Path) -> std::io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = LibraryPaths::resolve(cli.user_dirs, cli.data_file, cli.log_file)?;
    initialize_tracing(cli.log_level, &paths.log_file, cli.log_stderr);

    let command = cli.command.unwrap_or(Commands::Menu);
    debug!(
        command = command.name(),
        modifies_catalog = command.modifies_catalog(),
        data_file = %paths.data_file.display(),
        "Starting"
    );

    let mut store = CatalogStore::new(&paths.data_file).with_backup_policy(cli.backup_policy);
    store
        .load()
        .with_context(|| format!("Failed to open catalog {}", paths.data_file.display()))?;

    let handler: Box<dyn CommandHandler> = match command {
        Commands::Add {
            title,
            author,
            isbn,
        } => Box::new(AddCommand::new(title, author, isbn)),
        Commands::Issue { isbn } => Box::new(IssueCommand::new(isbn)),
        Commands::Return { isbn } => Box::new(ReturnCommand::new(isbn)),
        Commands::List { format } => Box::new(ListCommand::new(format)),
        Commands::Search { title, format } => Box::new(SearchCommand::new(title, format)),
        Commands::Show { isbn, format } => Box::new(ShowCommand::new(isbn, format)),
        Commands::Menu => Box::new(MenuCommand),
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = handler.execute(&mut store, &mut out) {
        error!(command = handler.name(), error = %e, "Command failed");
        return Err(e.into());
    }

    Ok(())
}
