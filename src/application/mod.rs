//! Application layer services implementing the shortening workflow.
//!
//! Services consume repository traits from [`crate::domain::repositories`]
//! and expose a synchronous API to callers such as the CLI.
//!
//! # Available Services
//!
//! - [`services::shortener_service::ShortenerService`] - Alias generation, collision handling and lookups

pub mod services;
