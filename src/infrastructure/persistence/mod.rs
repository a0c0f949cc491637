//! File-backed repository implementations.
//!
//! # Repositories
//!
//! - [`JsonlRecordRepository`] - Append-only JSON-lines record log

pub mod jsonl_record_repository;

pub use jsonl_record_repository::JsonlRecordRepository;
