#![allow(dead_code)]

use std::fs;
use std::path::Path;
use std::sync::Arc;

use flatlink::application::services::ShortenerService;
use flatlink::config::ShortenerConfig;
use flatlink::infrastructure::persistence::JsonlRecordRepository;
use tempfile::TempDir;

pub const TEST_DOMAIN: &str = "http://sucu.ri";

/// A shortener over a fresh record file inside its own temp directory.
///
/// The directory is removed when the returned `TempDir` is dropped.
pub fn create_test_shortener() -> (ShortenerService<JsonlRecordRepository>, TempDir) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("test-shorten.db.json");

    let config = ShortenerConfig::new(path.to_str(), Some(TEST_DOMAIN));
    let repository = Arc::new(JsonlRecordRepository::new(path));

    (ShortenerService::new(repository, config), dir)
}

pub fn line_count(path: &Path) -> usize {
    match fs::read_to_string(path) {
        Ok(content) => content.lines().count(),
        Err(_) => 0,
    }
}
