//! Long URL validation.
//!
//! A long URL is accepted when it parses as an absolute URL with a scheme and
//! a non-empty host. The input is never rewritten: whatever the caller passed
//! is what gets stored, so lookups by long URL compare against the exact text.

use url::Url;

/// Errors that can occur while validating a long URL.
#[derive(Debug, thiserror::Error)]
pub enum UrlValidationError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("URL must not contain whitespace")]
    ContainsWhitespace,

    #[error("URL must include a host")]
    MissingHost,
}

/// Checks that `input` is a well-formed absolute URL.
///
/// # Rules
///
/// 1. Must parse as an absolute URL (scheme required)
/// 2. Must have a non-empty host (`mailto:`, `data:`, `file:///` are rejected)
/// 3. Must not contain whitespace anywhere
///
/// # Errors
///
/// Returns [`UrlValidationError::InvalidFormat`] for unparseable input.
/// Returns [`UrlValidationError::MissingHost`] for URLs without a host.
/// Returns [`UrlValidationError::ContainsWhitespace`] if any whitespace is present.
pub fn validate_long_url(input: &str) -> Result<Url, UrlValidationError> {
    if input.chars().any(char::is_whitespace) {
        return Err(UrlValidationError::ContainsWhitespace);
    }

    let url = Url::parse(input).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(url),
        _ => Err(UrlValidationError::MissingHost),
    }
}
