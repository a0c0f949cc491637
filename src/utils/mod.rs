//! Helpers used by the shortening engine.
//!
//! - [`alias_generator`] - Hash-based alias generation
//! - [`url_validator`] - Long URL validation

pub mod alias_generator;
pub mod url_validator;
