//! Bulk import of catalog records.
//!
//! # Responsibility
//! - Turn external text formats into validated `BookFormData` rows.
//! - Apply accepted rows through the repository contract.
//! - Report per-row diagnostics as data instead of failing the batch.
//!
//! # Invariants
//! - Import entry points never return `Err`; every failure is an
//!   `ImportRowError` inside `ImportResult`.
//! - Rejected rows cause no store mutation.

pub mod csv_import;
