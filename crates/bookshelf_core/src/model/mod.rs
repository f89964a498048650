//! Domain model for the book catalog.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//! - Own field-level validation rules shared by form input and CSV import.
//!
//! # Invariants
//! - Every book is identified by a stable `BookId` that is never reassigned.
//! - Stored books always satisfy `BookFormData::validate()`.

pub mod book;
