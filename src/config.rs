//! Engine and process configuration.
//!
//! [`ShortenerConfig`] is the explicit configuration handed to the
//! shortening engine. [`Config`] wraps it together with logging settings and
//! is loaded from environment variables by the binary.
//!
//! ## Environment Variables
//!
//! - `SHORTENER_DB` - Record file path (default: `shortener.db.json`)
//! - `SHORTENER_DOMAIN` - Prefix for short URLs (default: `http://`)
//! - `SHORTENER_MIN_LENGTH` - Initial alias length (default: 5)
//! - `SHORTENER_MAX_ATTEMPTS` - Collision retries before giving up (default: 10)
//! - `RUST_LOG` - Log level (default: `warn`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

use crate::utils::alias_generator::MAX_ALIAS_LENGTH;

pub const DEFAULT_STORE_PATH: &str = "shortener.db.json";
pub const DEFAULT_DOMAIN_PREFIX: &str = "http://";
pub const DEFAULT_MIN_ALIAS_LENGTH: usize = 5;
pub const DEFAULT_MAX_ATTEMPTS: usize = 10;

/// Configuration of the shortening engine, fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortenerConfig {
    /// Location of the append-only record file.
    pub store_path: PathBuf,
    /// Prepended to every alias as `domain_prefix + "/" + alias`.
    pub domain_prefix: String,
    /// Length of the first candidate alias.
    pub min_alias_length: usize,
    /// Number of regenerations allowed after the first candidate collides.
    pub max_attempts: usize,
}

impl Default for ShortenerConfig {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from(DEFAULT_STORE_PATH),
            domain_prefix: DEFAULT_DOMAIN_PREFIX.to_string(),
            min_alias_length: DEFAULT_MIN_ALIAS_LENGTH,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl ShortenerConfig {
    /// Builds a configuration from optional store path and domain prefix.
    ///
    /// `None`, empty and whitespace-only values fall back to the defaults.
    pub fn new(store_path: Option<&str>, domain_prefix: Option<&str>) -> Self {
        let mut config = Self::default();

        if let Some(path) = non_blank(store_path) {
            config.store_path = PathBuf::from(path);
        }
        if let Some(domain) = non_blank(domain_prefix) {
            config.domain_prefix = domain.to_string();
        }

        config
    }

    pub fn with_min_alias_length(mut self, length: usize) -> Self {
        self.min_alias_length = length;
        self
    }

    pub fn with_max_attempts(mut self, attempts: usize) -> Self {
        self.max_attempts = attempts;
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `min_alias_length` is 0 or above the alias length cap
    /// - `max_attempts` is 0
    pub fn validate(&self) -> Result<()> {
        if self.min_alias_length == 0 {
            anyhow::bail!("SHORTENER_MIN_LENGTH must be at least 1");
        }

        if self.min_alias_length > MAX_ALIAS_LENGTH {
            anyhow::bail!(
                "SHORTENER_MIN_LENGTH is too large (max: {}), got {}",
                MAX_ALIAS_LENGTH,
                self.min_alias_length
            );
        }

        if self.max_attempts == 0 {
            anyhow::bail!("SHORTENER_MAX_ATTEMPTS must be at least 1");
        }

        Ok(())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Process configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub shortener: ShortenerConfig,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable is set but not a number.
    pub fn from_env() -> Result<Self> {
        let store_path = env::var("SHORTENER_DB").ok();
        let domain_prefix = env::var("SHORTENER_DOMAIN").ok();

        let mut shortener = ShortenerConfig::new(store_path.as_deref(), domain_prefix.as_deref());

        if let Some(length) = parse_var("SHORTENER_MIN_LENGTH")? {
            shortener.min_alias_length = length;
        }
        if let Some(attempts) = parse_var("SHORTENER_MAX_ATTEMPTS")? {
            shortener.max_attempts = attempts;
        }

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Ok(Self {
            shortener,
            log_level,
            log_format,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the engine settings are invalid or `log_format`
    /// is not `text` or `json`.
    pub fn validate(&self) -> Result<()> {
        self.shortener.validate()?;

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        Ok(())
    }

    /// Logs the effective configuration.
    pub fn print_summary(&self) {
        tracing::debug!("Configuration loaded:");
        tracing::debug!("  Record store: {}", self.shortener.store_path.display());
        tracing::debug!("  Domain prefix: {}", self.shortener.domain_prefix);
        tracing::debug!("  Min alias length: {}", self.shortener.min_alias_length);
        tracing::debug!("  Max attempts: {}", self.shortener.max_attempts);
        tracing::debug!("  Log level: {}", self.log_level);
        tracing::debug!("  Log format: {}", self.log_format);
    }
}

fn parse_var(name: &str) -> Result<Option<usize>> {
    match env::var(name) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map(Some)
            .with_context(|| format!("{name} must be a non-negative integer, got '{raw}'")),
        _ => Ok(None),
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable is malformed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
