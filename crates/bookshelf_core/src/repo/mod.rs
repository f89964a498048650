//! Repository layer abstractions and storage implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts.
//! - Isolate storage details from service/business orchestration.
//!
//! # Invariants
//! - Repository APIs return semantic errors (`NotFound`) instead of
//!   sentinel values.

pub mod book_repo;
