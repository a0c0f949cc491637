//! Repository trait definitions for the domain layer.
//!
//! # Available Repositories
//!
//! - [`RecordRepository`] - Append-only record storage with predicate scans
//!
//! # Testing
//!
//! Mock implementations are generated via `mockall` for unit tests. See
//! `tests/repository_record.rs` for the file-backed implementation.

pub mod record_repository;

pub use record_repository::{RecordFilter, RecordRepository};

#[cfg(test)]
pub use record_repository::MockRecordRepository;
