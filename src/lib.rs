//! # flatlink
//!
//! A URL shortener whose only storage is an append-only JSON-lines file.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - The [`Record`](domain::entities::Record) entity and the
//!   [`RecordRepository`](domain::repositories::RecordRepository) contract
//! - **Application Layer** ([`application`]) - The shortening engine
//! - **Infrastructure Layer** ([`infrastructure`]) - The JSON-lines record store
//!
//! ## Storage
//!
//! Each line of the record file is one self-contained JSON object:
//!
//! ```text
//! {"created_at":"2024-01-15 10:30:00","shorturl":"http://sucu.ri/3f9a1","longurl":"http://www.testurl.com"}
//! ```
//!
//! Lines are only ever appended. Lookups scan the file from the top and
//! return the first match. There is no file locking, so only one process
//! should write to a given record file at a time.
//!
//! ## Quick Start
//!
//! ```no_run
//! use flatlink::prelude::*;
//!
//! let config = ShortenerConfig::new(Some("shortener.db.json"), Some("http://sucu.ri"));
//! let shortener = ShortenerService::open(config);
//!
//! let short_url = shortener.shorten_url("http://www.testurl.com")?;
//! let record = shortener.get_shorturl_info(&short_url)?;
//! assert_eq!(record.unwrap().long_url, "http://www.testurl.com");
//! # Ok::<(), flatlink::AppError>(())
//! ```
//!
//! ## Configuration
//!
//! The binary reads its settings from environment variables via [`config::Config`].

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod utils;

pub use error::AppError;

/// Commonly used types for external consumers.
pub mod prelude {
    pub use crate::application::services::ShortenerService;
    pub use crate::config::ShortenerConfig;
    pub use crate::domain::entities::{Record, field_label};
    pub use crate::domain::repositories::{RecordFilter, RecordRepository};
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::JsonlRecordRepository;
}
