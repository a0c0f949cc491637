//! Short alias generation.
//!
//! Aliases are built by hashing the long URL together with a nanosecond
//! timestamp and a random salt, then concatenating hex digests until the
//! requested length is reached.

use chrono::Utc;
use rand::Rng;
use sha2::{Digest, Sha256};

/// Upper bound on the length of a generated alias.
pub const MAX_ALIAS_LENGTH: usize = 160;

/// Generates a pseudo-random alias of exactly `length` characters for `url`.
///
/// `length` is clamped to [`MAX_ALIAS_LENGTH`]. Each digest round mixes in a
/// fresh timestamp and random number, so two calls with the same URL and
/// length return different aliases. Output characters are lowercase hex.
///
/// # Examples
///
/// ```ignore
/// let alias = generate_alias("http://www.testurl.com", 5);
/// assert_eq!(alias.len(), 5);
/// assert!(alias.chars().all(|c| c.is_ascii_hexdigit()));
/// ```
pub fn generate_alias(url: &str, length: usize) -> String {
    let length = length.min(MAX_ALIAS_LENGTH);
    let mut rng = rand::rng();
    let mut alias = String::with_capacity(length + 64);

    while alias.len() < length {
        let nanos = Utc::now().timestamp_nanos_opt().unwrap_or_default();
        let salt: u32 = rng.random();

        let mut hasher = Sha256::new();
        hasher.update(url.as_bytes());
        hasher.update(nanos.to_string().as_bytes());
        hasher.update(salt.to_string().as_bytes());

        alias.push_str(&hex::encode(hasher.finalize()));
    }

    alias.truncate(length);
    alias
}
