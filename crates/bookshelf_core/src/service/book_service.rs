//! Catalog use-case service.
//!
//! # Responsibility
//! - Provide the async CRUD and import entry points used by front ends.
//! - Validate form input before any repository mutation.
//! - Model backend round-trips as an explicit suspension point.
//!
//! # Invariants
//! - Every store-touching operation awaits the configured latency once,
//!   before it reads or mutates.
//! - Validation failures never reach the repository.
//! - Import entry points never return `Err`; see `ImportResult`.

use crate::config::CatalogConfig;
use crate::import::csv_import::{import_csv_with, ImportOptions, ImportResult};
use crate::model::book::{Book, BookFormData, BookId, BookValidationError};
use crate::repo::book_repo::{BookRepository, RepoError};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;
use std::time::Duration;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Service error for single-record operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// Input rejected before mutation.
    Validation(BookValidationError),
    /// Target book does not exist.
    NotFound(BookId),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "book not found: {id}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound(_) => None,
        }
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound(id) => Self::NotFound(id),
        }
    }
}

impl From<BookValidationError> for ServiceError {
    fn from(value: BookValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Async catalog facade over a repository implementation.
pub struct BookService<R: BookRepository> {
    repo: R,
    latency: Duration,
    import: ImportOptions,
}

impl<R: BookRepository> BookService<R> {
    /// Creates a service with default configuration.
    pub fn new(repo: R) -> Self {
        Self::with_config(repo, &CatalogConfig::default())
    }

    pub fn with_config(repo: R, config: &CatalogConfig) -> Self {
        Self {
            repo,
            latency: config.latency,
            import: config.import,
        }
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Lists all books in insertion order.
    pub async fn list_books(&self) -> Vec<Book> {
        self.round_trip().await;
        self.repo.list_books()
    }

    pub async fn get_book(&self, id: BookId) -> ServiceResult<Book> {
        self.round_trip().await;
        Ok(self.repo.get_book(id)?)
    }

    /// Validates and creates one book.
    pub async fn create_book(&mut self, data: BookFormData) -> ServiceResult<Book> {
        self.round_trip().await;
        if let Err(err) = data.validate() {
            warn!("event=book_create module=service status=rejected reason={err}");
            return Err(err.into());
        }

        let book = self.repo.create_book(&data);
        info!(
            "event=book_create module=service status=ok book_id={}",
            book.id
        );
        Ok(book)
    }

    /// Validates and fully replaces the editable fields of one book.
    pub async fn update_book(&mut self, id: BookId, data: BookFormData) -> ServiceResult<Book> {
        self.round_trip().await;
        if let Err(err) = data.validate() {
            warn!("event=book_update module=service status=rejected book_id={id} reason={err}");
            return Err(err.into());
        }

        match self.repo.update_book(id, &data) {
            Ok(book) => {
                info!("event=book_update module=service status=ok book_id={id}");
                Ok(book)
            }
            Err(err) => {
                warn!("event=book_update module=service status=not_found book_id={id}");
                Err(err.into())
            }
        }
    }

    pub async fn delete_book(&mut self, id: BookId) -> ServiceResult<()> {
        self.round_trip().await;
        match self.repo.delete_book(id) {
            Ok(()) => {
                info!("event=book_delete module=service status=ok book_id={id}");
                Ok(())
            }
            Err(err) => {
                warn!("event=book_delete module=service status=not_found book_id={id}");
                Err(err.into())
            }
        }
    }

    /// Imports CSV text using the configured column mapping.
    pub async fn import_csv(&mut self, text: &str) -> ImportResult {
        self.round_trip().await;
        import_csv_with(&mut self.repo, text, &self.import)
    }

    /// Reads a UTF-8 file and imports it.
    ///
    /// Unreadable or non-UTF-8 files yield the single row-0
    /// "Failed to read file" error.
    pub async fn import_csv_file(&mut self, path: impl AsRef<Path>) -> ImportResult {
        let path = path.as_ref();
        match tokio::fs::read_to_string(path).await {
            Ok(text) => self.import_csv(&text).await,
            Err(err) => {
                warn!(
                    "event=csv_import module=service status=error reason=read_failed kind={:?}",
                    err.kind()
                );
                ImportResult::read_failed()
            }
        }
    }

    async fn round_trip(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}
