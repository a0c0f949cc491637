//! Repository trait for the append-only record store.

use crate::domain::entities::Record;
use crate::error::AppError;

/// Predicate used to scan the store for a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordFilter {
    /// Matches a record whose full short URL equals the value.
    ShortUrl(String),
    /// Matches a record whose long URL equals the value.
    LongUrl(String),
}

impl RecordFilter {
    pub fn short_url(value: impl Into<String>) -> Self {
        Self::ShortUrl(value.into())
    }

    pub fn long_url(value: impl Into<String>) -> Self {
        Self::LongUrl(value.into())
    }

    /// Returns true if `record` satisfies this filter.
    pub fn matches(&self, record: &Record) -> bool {
        match self {
            RecordFilter::ShortUrl(short_url) => record.short_url == *short_url,
            RecordFilter::LongUrl(long_url) => record.long_url == *long_url,
        }
    }
}

/// Repository interface for the URL mapping log.
///
/// Records are only ever appended; there is no update or delete. Lookups
/// are linear scans in storage order, so the first match is the oldest.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::JsonlRecordRepository`] - JSON-lines file
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait RecordRepository: Send + Sync {
    /// Returns the first record, oldest first, that satisfies `filter`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Record))` if found
    /// - `Ok(None)` if nothing matches, including when the store does not exist yet
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Io`] if the store exists but cannot be read.
    fn scan(&self, filter: &RecordFilter) -> Result<Option<Record>, AppError>;

    /// Appends a record at the end of the store, creating it if absent.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Io`] if the store cannot be opened or written.
    fn append(&self, record: &Record) -> Result<(), AppError>;

    /// Counts the decodable records in the store.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Io`] if the store exists but cannot be read.
    fn count(&self) -> Result<usize, AppError>;
}
