//! Shortening engine: alias generation, collision resolution and lookups.

use std::sync::Arc;

use crate::config::ShortenerConfig;
use crate::domain::entities::{Record, field_label};
use crate::domain::repositories::{RecordFilter, RecordRepository};
use crate::error::AppError;
use crate::infrastructure::persistence::JsonlRecordRepository;
use crate::utils::alias_generator::generate_alias;
use crate::utils::url_validator::validate_long_url;
use serde_json::json;

/// Service that maps long URLs to unique short URLs and back.
///
/// Every call to [`Self::shorten`] mints a new record, even for a long URL
/// that was shortened before. The uniqueness guarantee covers `short_url`
/// only and assumes a single writer process.
pub struct ShortenerService<R: RecordRepository> {
    repository: Arc<R>,
    config: ShortenerConfig,
}

impl ShortenerService<JsonlRecordRepository> {
    /// Creates a service backed by the JSON-lines file at `config.store_path`.
    pub fn open(config: ShortenerConfig) -> Self {
        let repository = Arc::new(JsonlRecordRepository::new(config.store_path.clone()));
        Self::new(repository, config)
    }
}

impl<R: RecordRepository> ShortenerService<R> {
    /// Creates a new shortener service.
    pub fn new(repository: Arc<R>, config: ShortenerConfig) -> Self {
        Self { repository, config }
    }

    pub fn config(&self) -> &ShortenerConfig {
        &self.config
    }

    pub fn repository(&self) -> &Arc<R> {
        &self.repository
    }

    /// Shortens `long_url` and returns the full short URL.
    ///
    /// # Errors
    ///
    /// See [`Self::shorten`].
    pub fn shorten_url(&self, long_url: &str) -> Result<String, AppError> {
        self.shorten(long_url).map(|record| record.short_url)
    }

    /// Shortens `long_url`, persists the mapping and returns the new record.
    ///
    /// # Code Generation
    ///
    /// - The first candidate alias has `min_alias_length` characters
    /// - On collision the alias is regenerated with length
    ///   `min_alias_length + attempt`, up to `max_attempts` times
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidInput`] if `long_url` is not an absolute URL with a host.
    /// Returns [`AppError::AliasExhausted`] if every attempt collided.
    /// Returns [`AppError::Io`] if the store cannot be read or written.
    ///
    /// Nothing is written when an error is returned.
    pub fn shorten(&self, long_url: &str) -> Result<Record, AppError> {
        validate_long_url(long_url).map_err(|e| {
            AppError::invalid_input(
                "Invalid URL given",
                json!({ "url": long_url, "reason": e.to_string() }),
            )
        })?;

        let alias = self.generate_unique_alias(long_url)?;
        let record = Record::now(long_url.to_string(), self.short_url_for(&alias));

        self.repository.append(&record)?;

        tracing::debug!(short_url = %record.short_url, long_url, "URL shortened");
        Ok(record)
    }

    /// Looks up the record for a full short URL.
    ///
    /// `Ok(None)` means no record matches; it is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Io`] if the store exists but cannot be read.
    pub fn get_shorturl_info(&self, short_url: &str) -> Result<Option<Record>, AppError> {
        self.repository.scan(&RecordFilter::short_url(short_url))
    }

    /// Looks up the oldest record for a long URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Io`] if the store exists but cannot be read.
    pub fn find_by_long_url(&self, long_url: &str) -> Result<Option<Record>, AppError> {
        self.repository.scan(&RecordFilter::long_url(long_url))
    }

    /// Returns the display label for a stored field name.
    pub fn field_label<'a>(&self, field: &'a str) -> &'a str {
        field_label(field)
    }

    /// Returns the product name and version.
    pub fn version_info(&self) -> String {
        format!("URL Shortener v{}", env!("CARGO_PKG_VERSION"))
    }

    /// Builds the full short URL for an alias.
    pub fn short_url_for(&self, alias: &str) -> String {
        format!("{}/{}", self.config.domain_prefix, alias)
    }

    /// Finds an alias whose short URL is not in the store yet.
    ///
    /// Checks at most `max_attempts + 1` candidates.
    fn generate_unique_alias(&self, long_url: &str) -> Result<String, AppError> {
        let min_length = self.config.min_alias_length;
        let max_attempts = self.config.max_attempts;

        let mut alias = generate_alias(long_url, min_length);
        let mut attempt = 0;

        while self.is_taken(&alias)? {
            if attempt == max_attempts {
                return Err(AppError::alias_exhausted(max_attempts));
            }

            alias = generate_alias(long_url, min_length + attempt);
            attempt += 1;
            tracing::warn!(attempt, length = alias.len(), "Alias collision, retrying");
        }

        Ok(alias)
    }

    fn is_taken(&self, alias: &str) -> Result<bool, AppError> {
        Ok(self
            .repository
            .scan(&RecordFilter::short_url(self.short_url_for(alias)))?
            .is_some())
    }
}
