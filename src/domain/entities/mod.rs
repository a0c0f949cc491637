//! Core domain entities.
//!
//! - [`Record`] - A persisted long URL → short URL mapping
//! - [`field_label`] - Display labels for the stored field names

pub mod record;

pub use record::{Record, field_label};
