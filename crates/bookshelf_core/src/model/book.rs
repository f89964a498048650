//! Book domain model.
//!
//! # Responsibility
//! - Define the canonical catalog record and its create/update input shape.
//! - Provide the validation rules that gate every store mutation.
//!
//! # Invariants
//! - `id` is stable and never reused for another book.
//! - `title` and `author` are non-blank.
//! - `published_year` is strictly positive.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a catalog record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type BookId = Uuid;

/// Validation errors for book input.
///
/// `Display` output is user-facing and shared by the form and import paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookValidationError {
    TitleRequired,
    AuthorRequired,
    InvalidPublishedYear(i32),
}

impl Display for BookValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TitleRequired => write!(f, "Title is required"),
            Self::AuthorRequired => write!(f, "Author is required"),
            Self::InvalidPublishedYear(_) => {
                write!(f, "Published year must be a positive number")
            }
        }
    }
}

impl Error for BookValidationError {}

/// Input shape for create/update: a book without its identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookFormData {
    pub title: String,
    pub author: String,
    pub published_year: i32,
}

impl BookFormData {
    pub fn new(title: impl Into<String>, author: impl Into<String>, published_year: i32) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            published_year,
        }
    }

    /// Validates fields in display order, reporting the first failure.
    ///
    /// Blank-after-trim counts as missing for `title` and `author`.
    pub fn validate(&self) -> Result<(), BookValidationError> {
        if self.title.trim().is_empty() {
            return Err(BookValidationError::TitleRequired);
        }
        if self.author.trim().is_empty() {
            return Err(BookValidationError::AuthorRequired);
        }
        if self.published_year <= 0 {
            return Err(BookValidationError::InvalidPublishedYear(
                self.published_year,
            ));
        }
        Ok(())
    }
}

/// Canonical catalog record.
///
/// Deserialization runs `BookFormData::validate()` so external payloads
/// cannot smuggle invalid state into the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "BookWire")]
pub struct Book {
    /// Opaque stable ID, assigned by the store on create.
    pub id: BookId,
    pub title: String,
    pub author: String,
    /// Serialized as `publishedYear` to match external schema naming.
    pub published_year: i32,
}

impl Book {
    /// Builds a record with a caller-provided stable ID.
    ///
    /// # Invariants
    /// - Callers must not pass the nil UUID; the store never generates it.
    /// - This constructor does not validate field contents; callers run
    ///   `BookFormData::validate()` first.
    pub fn with_id(id: BookId, data: BookFormData) -> Self {
        Self {
            id,
            title: data.title,
            author: data.author,
            published_year: data.published_year,
        }
    }

    /// Replaces every field except `id`.
    pub fn apply(&mut self, data: BookFormData) {
        self.title = data.title;
        self.author = data.author;
        self.published_year = data.published_year;
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct BookWire {
    id: BookId,
    title: String,
    author: String,
    published_year: i32,
}

/// Error returned when a serialized book violates model invariants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookDecodeError {
    NilId,
    Invalid(BookValidationError),
}

impl Display for BookDecodeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilId => write!(f, "book id must not be nil"),
            Self::Invalid(err) => write!(f, "{err}"),
        }
    }
}

impl Error for BookDecodeError {}

impl TryFrom<BookWire> for Book {
    type Error = BookDecodeError;

    fn try_from(value: BookWire) -> Result<Self, Self::Error> {
        if value.id.is_nil() {
            return Err(BookDecodeError::NilId);
        }
        let data = BookFormData::new(value.title, value.author, value.published_year);
        data.validate().map_err(BookDecodeError::Invalid)?;
        Ok(Book::with_id(value.id, data))
    }
}
