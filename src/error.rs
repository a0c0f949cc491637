//! Error taxonomy shared by the record store and the shortening engine.
//!
//! A lookup that finds nothing is not an error: repositories and services
//! return `Ok(None)` for that case, so a missing record can never be confused
//! with [`AppError::Io`].

use serde_json::Value;

/// Errors surfaced by the shortening engine and the record store.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The caller passed something that is not a well-formed absolute URL.
    #[error("{message}")]
    InvalidInput { message: String, details: Value },

    /// Every collision-resolution attempt produced an alias that was already taken.
    #[error("Could not generate a unique short url after {attempts} attempts")]
    AliasExhausted { attempts: usize },

    /// The record file could not be read or written.
    #[error("Record store I/O failure: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    pub fn invalid_input(message: impl Into<String>, details: Value) -> Self {
        Self::InvalidInput {
            message: message.into(),
            details,
        }
    }

    pub fn alias_exhausted(attempts: usize) -> Self {
        Self::AliasExhausted { attempts }
    }

    /// Short machine-readable code for the error category.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::InvalidInput { .. } => "invalid_input",
            AppError::AliasExhausted { .. } => "alias_exhausted",
            AppError::Io(_) => "io_failure",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io;

    #[test]
    fn test_invalid_input_displays_message() {
        let err = AppError::invalid_input("Invalid URL given", json!({ "url": "www.abc.com" }));
        assert_eq!(err.to_string(), "Invalid URL given");
        assert_eq!(err.code(), "invalid_input");
    }

    #[test]
    fn test_alias_exhausted_mentions_attempts() {
        let err = AppError::alias_exhausted(10);
        assert!(err.to_string().contains("10 attempts"));
        assert_eq!(err.code(), "alias_exhausted");
    }

    #[test]
    fn test_io_error_converts() {
        let err: AppError = io::Error::new(io::ErrorKind::PermissionDenied, "read-only").into();
        assert!(matches!(err, AppError::Io(_)));
        assert_eq!(err.code(), "io_failure");
        assert!(err.to_string().contains("read-only"));
    }
}
