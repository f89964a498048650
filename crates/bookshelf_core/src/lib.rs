//! Core domain logic for the Bookshelf catalog.
//! This crate is the single source of truth for catalog invariants.

pub mod config;
pub mod import;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod store;

pub use config::{CatalogConfig, DEFAULT_LATENCY_MS};
pub use import::csv_import::{
    import_csv, import_csv_with, validate_header, ColumnMapping, HeaderLayout, ImportFailure,
    ImportOptions, ImportResult, ImportRowError, HEADER_ROW,
};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::book::{Book, BookDecodeError, BookFormData, BookId, BookValidationError};
pub use repo::book_repo::{BookRepository, InMemoryBookRepository, RepoError, RepoResult};
pub use service::book_service::{BookService, ServiceError, ServiceResult};
pub use store::BookStore;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
