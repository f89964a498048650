//! Bookshelf command-line front end.
//!
//! # Responsibility
//! - Own the session `BookStore` and wire it to the catalog service.
//! - Map command-line flags onto `CatalogConfig` and logging setup.
//! - Render results for humans or as JSON.

mod render;
mod shell;

use anyhow::{bail, Context, Result};
use bookshelf_core::{
    default_log_level, init_logging, BookFormData, BookService, BookStore, CatalogConfig,
    ColumnMapping, InMemoryBookRepository, DEFAULT_LATENCY_MS,
};
use clap::{Parser, Subcommand};
use render::Output;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Parser)]
#[command(name = "bookshelf", version, about = "In-memory book catalog manager")]
struct Cli {
    /// Simulated backend latency per operation, in milliseconds
    #[arg(long, global = true, default_value_t = DEFAULT_LATENCY_MS)]
    latency_ms: u64,

    /// Start without the sample catalog
    #[arg(long, global = true)]
    empty: bool,

    /// Print machine-readable JSON
    #[arg(long, global = true)]
    json: bool,

    /// Log level (trace|debug|info|warn|error)
    #[arg(long, global = true, requires = "log_dir")]
    log_level: Option<String>,

    /// Absolute directory for rolling log files; logging is off without it
    #[arg(long, global = true)]
    log_dir: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the catalog
    List,
    /// Add one book
    Add {
        #[arg(long)]
        title: String,
        #[arg(long)]
        author: String,
        #[arg(long)]
        year: i32,
    },
    /// Import books from a CSV file
    Import {
        path: PathBuf,
        /// Read columns by header label instead of position
        #[arg(long)]
        by_header: bool,
    },
    /// Run an interactive session over one catalog
    Shell,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        init_logging(level, log_dir).context("failed to initialize logging")?;
    }

    let mut config = CatalogConfig::default()
        .with_latency(Duration::from_millis(cli.latency_ms))
        .with_sample_catalog(!cli.empty);
    if let Command::Import {
        by_header: true, ..
    } = &cli.command
    {
        config = config.with_column_mapping(ColumnMapping::ByHeader);
    }

    let mut store = BookStore::from_config(&config);
    let mut service = BookService::with_config(InMemoryBookRepository::new(&mut store), &config);
    let output = Output::new(cli.json);
    log::info!(
        "event=session_start module=cli status=ok version={} books={} latency_ms={}",
        bookshelf_core::core_version(),
        service.repository().store().len(),
        cli.latency_ms
    );

    match cli.command {
        Command::List => output.books(&service.list_books().await)?,
        Command::Add {
            title,
            author,
            year,
        } => {
            let book = service
                .create_book(BookFormData::new(title.trim(), author.trim(), year))
                .await
                .context("add failed")?;
            output.book(&book)?;
        }
        Command::Import { path, .. } => {
            ensure_csv_path(&path)?;
            let result = service.import_csv_file(&path).await;
            output.import_result(&result)?;
            if !cli.json {
                output.books(&service.list_books().await)?;
            }
        }
        Command::Shell => shell::run(&mut service, &output).await?,
    }

    Ok(())
}

/// Rejects files that do not carry a `.csv` extension.
pub(crate) fn ensure_csv_path(path: &Path) -> Result<()> {
    let is_csv = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
    if !is_csv {
        bail!("Invalid file type: please select a CSV file");
    }
    Ok(())
}
