//! Book repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the canonical `BookStore` collection.
//! - Report semantic `NotFound` errors for absent IDs.
//!
//! # Invariants
//! - Repositories do not validate input; callers run
//!   `BookFormData::validate()` before `create_book`/`update_book`.
//! - `list_books` returns insertion order.
//! - `update_book` never changes a record's `id`.

use crate::model::book::{Book, BookFormData, BookId};
use crate::store::BookStore;
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for book read/write operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    NotFound(BookId),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "book not found: {id}"),
        }
    }
}

impl Error for RepoError {}

/// Repository interface for book CRUD operations.
pub trait BookRepository {
    fn list_books(&self) -> Vec<Book>;
    fn get_book(&self, id: BookId) -> RepoResult<Book>;
    fn create_book(&mut self, data: &BookFormData) -> Book;
    fn update_book(&mut self, id: BookId, data: &BookFormData) -> RepoResult<Book>;
    fn delete_book(&mut self, id: BookId) -> RepoResult<()>;
}

/// Repository over a borrowed `BookStore`.
pub struct InMemoryBookRepository<'store> {
    store: &'store mut BookStore,
}

impl<'store> InMemoryBookRepository<'store> {
    pub fn new(store: &'store mut BookStore) -> Self {
        Self { store }
    }

    /// Read-only view of the underlying store.
    pub fn store(&self) -> &BookStore {
        self.store
    }
}

impl BookRepository for InMemoryBookRepository<'_> {
    fn list_books(&self) -> Vec<Book> {
        self.store.books.clone()
    }

    fn get_book(&self, id: BookId) -> RepoResult<Book> {
        self.store
            .books
            .iter()
            .find(|book| book.id == id)
            .cloned()
            .ok_or(RepoError::NotFound(id))
    }

    fn create_book(&mut self, data: &BookFormData) -> Book {
        let book = Book::with_id(self.store.next_id(), data.clone());
        self.store.books.push(book.clone());
        debug!(
            "event=book_insert module=repo status=ok book_id={} total={}",
            book.id,
            self.store.len()
        );
        book
    }

    fn update_book(&mut self, id: BookId, data: &BookFormData) -> RepoResult<Book> {
        let index = self.store.position(id).ok_or(RepoError::NotFound(id))?;
        let book = &mut self.store.books[index];
        book.apply(data.clone());
        Ok(book.clone())
    }

    fn delete_book(&mut self, id: BookId) -> RepoResult<()> {
        let index = self.store.position(id).ok_or(RepoError::NotFound(id))?;
        self.store.books.remove(index);
        debug!(
            "event=book_remove module=repo status=ok book_id={} total={}",
            id,
            self.store.len()
        );
        Ok(())
    }
}
