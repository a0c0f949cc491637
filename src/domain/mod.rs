//! Domain layer containing the record entity and the storage contract.
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependency on the file format: the JSON-lines
//! store lives in [`crate::infrastructure::persistence`] and implements the
//! [`repositories::RecordRepository`] contract defined here.

pub mod entities;
pub mod repositories;
