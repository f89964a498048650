//! Process-memory book storage.
//!
//! # Responsibility
//! - Own the canonical, insertion-ordered collection of books.
//! - Provide the sample catalog used by fresh sessions.
//!
//! # Invariants
//! - Nothing outside this crate holds references into the collection;
//!   repositories borrow the store and hand out clones.
//! - Contents live only as long as the owning `BookStore`.

use crate::config::CatalogConfig;
use crate::model::book::{Book, BookFormData, BookId};
use uuid::Uuid;

const SAMPLE_CATALOG: &[(&str, &str, i32)] = &[
    ("Clean Code", "Robert C. Martin", 2008),
    (
        "Designing Data-Intensive Applications",
        "Martin Kleppmann",
        2017,
    ),
    ("The Pragmatic Programmer", "Andy Hunt & Dave Thomas", 1999),
    ("Refactoring", "Martin Fowler", 1999),
];

/// Owned in-memory book collection.
///
/// Created by the composition root and lent to repositories; there is no
/// process-global instance.
#[derive(Debug, Default)]
pub struct BookStore {
    pub(crate) books: Vec<Book>,
}

impl BookStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded with the four sample books.
    pub fn with_sample_catalog() -> Self {
        let mut store = Self::new();
        for (title, author, year) in SAMPLE_CATALOG {
            let id = store.next_id();
            store
                .books
                .push(Book::with_id(id, BookFormData::new(*title, *author, *year)));
        }
        store
    }

    /// Creates the store a session described by `config` starts from.
    pub fn from_config(config: &CatalogConfig) -> Self {
        if config.seed_sample_catalog {
            Self::with_sample_catalog()
        } else {
            Self::new()
        }
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn contains(&self, id: BookId) -> bool {
        self.position(id).is_some()
    }

    pub(crate) fn position(&self, id: BookId) -> Option<usize> {
        self.books.iter().position(|book| book.id == id)
    }

    /// Draws a fresh v4 ID that no current record uses.
    ///
    /// Re-draws on collision, so uniqueness across the current contents is
    /// guaranteed rather than probabilistic.
    pub(crate) fn next_id(&self) -> BookId {
        loop {
            let candidate = Uuid::new_v4();
            if !candidate.is_nil() && !self.contains(candidate) {
                return candidate;
            }
        }
    }
}
