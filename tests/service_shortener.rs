mod common;

use std::collections::HashSet;
use std::fs;

use flatlink::prelude::*;
use tempfile::TempDir;

#[test]
fn test_shorten_and_lookup_round_trip() {
    let (shortener, _dir) = common::create_test_shortener();

    let short_url = shortener.shorten_url("http://www.testurl.com").unwrap();

    let rest = short_url.strip_prefix("http://sucu.ri/").unwrap();
    assert!(!rest.is_empty());

    let record = shortener.get_shorturl_info(&short_url).unwrap().unwrap();
    assert_eq!(record.long_url, "http://www.testurl.com");
    assert_eq!(record.short_url, short_url);
}

#[test]
fn test_shorten_returns_persisted_record() {
    let (shortener, _dir) = common::create_test_shortener();

    let record = shortener.shorten("https://example.com/a?b=c").unwrap();
    let stored = shortener.get_shorturl_info(&record.short_url).unwrap();

    assert_eq!(stored, Some(record));
}

#[test]
fn test_invalid_url_leaves_store_unchanged() {
    let (shortener, _dir) = common::create_test_shortener();
    shortener.shorten_url("http://www.abc123.com").unwrap();

    let before = shortener.repository().count().unwrap();

    for bad in ["www.abc123.com", "", "not a url", "mailto:a@b.com", "http://"] {
        let result = shortener.shorten_url(bad);
        assert!(
            matches!(result, Err(AppError::InvalidInput { .. })),
            "'{bad}' should be rejected"
        );
    }

    assert_eq!(shortener.repository().count().unwrap(), before);
}

#[test]
fn test_invalid_url_on_fresh_store_creates_no_file() {
    let (shortener, _dir) = common::create_test_shortener();

    assert!(shortener.shorten_url("www.abc123.com").is_err());
    assert!(!shortener.config().store_path.exists());
}

#[test]
fn test_short_urls_are_unique() {
    let (shortener, _dir) = common::create_test_shortener();

    let mut seen = HashSet::new();
    for i in 0..200 {
        let url = if i % 2 == 0 {
            "http://www.same.com".to_string()
        } else {
            format!("http://www.example.com/{i}")
        };
        assert!(seen.insert(shortener.shorten_url(&url).unwrap()));
    }

    assert_eq!(shortener.repository().count().unwrap(), 200);
}

#[test]
fn test_same_long_url_gets_new_alias_each_time() {
    let (shortener, _dir) = common::create_test_shortener();

    let first = shortener.shorten_url("http://www.testurl.com").unwrap();
    let second = shortener.shorten_url("http://www.testurl.com").unwrap();

    assert_ne!(first, second);

    let oldest = shortener
        .find_by_long_url("http://www.testurl.com")
        .unwrap()
        .unwrap();
    assert_eq!(oldest.short_url, first);
}

#[test]
fn test_lookup_is_idempotent() {
    let (shortener, _dir) = common::create_test_shortener();
    let short_url = shortener.shorten_url("http://www.testurl.com").unwrap();

    let first = shortener.get_shorturl_info(&short_url).unwrap();
    let second = shortener.get_shorturl_info(&short_url).unwrap();

    assert!(first.is_some());
    assert_eq!(first, second);
}

#[test]
fn test_lookup_of_unknown_url_is_not_found() {
    let (shortener, _dir) = common::create_test_shortener();

    // Before the store exists
    assert!(shortener
        .get_shorturl_info("http://domain/never-issued")
        .unwrap()
        .is_none());

    shortener.shorten_url("http://www.testurl.com").unwrap();

    // After it exists
    assert!(shortener
        .get_shorturl_info("http://sucu.ri/invalid-url-not-in-db")
        .unwrap()
        .is_none());
}

#[test]
fn test_alias_exhausted_when_every_candidate_is_taken() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("full.db.json");

    // Occupy every one-character hex alias.
    {
        let repo = JsonlRecordRepository::new(&path);
        for c in "0123456789abcdef".chars() {
            let record = Record::now("http://filler.com".to_string(), format!("http://sucu.ri/{c}"));
            repo.append(&record).unwrap();
        }
    }

    // One-character aliases and a single retry that stays at one character.
    let config = ShortenerConfig::new(path.to_str(), Some("http://sucu.ri"))
        .with_min_alias_length(1)
        .with_max_attempts(1);
    let shortener = ShortenerService::open(config);

    let result = shortener.shorten_url("http://www.testurl.com");

    assert!(matches!(result, Err(AppError::AliasExhausted { attempts: 1 })));
    assert_eq!(common::line_count(&path), 16);
}

#[test]
fn test_collision_resolves_by_lengthening() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("full.db.json");

    {
        let repo = JsonlRecordRepository::new(&path);
        for c in "0123456789abcdef".chars() {
            let record = Record::now("http://filler.com".to_string(), format!("http://sucu.ri/{c}"));
            repo.append(&record).unwrap();
        }
    }

    // Attempt lengths run 1, 1, 2: the third candidate cannot collide.
    let config = ShortenerConfig::new(path.to_str(), Some("http://sucu.ri"))
        .with_min_alias_length(1)
        .with_max_attempts(2);
    let shortener = ShortenerService::open(config);

    let short_url = shortener.shorten_url("http://www.testurl.com").unwrap();
    let alias = short_url.strip_prefix("http://sucu.ri/").unwrap();

    assert_eq!(alias.len(), 2);
    assert_eq!(common::line_count(&path), 17);
}

#[test]
fn test_shorten_into_unwritable_location_is_io_failure() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("no-such-dir").join("db.json");

    let config = ShortenerConfig::new(path.to_str(), Some("http://sucu.ri"));
    let shortener = ShortenerService::open(config);

    let result = shortener.shorten_url("http://www.testurl.com");
    assert!(matches!(result, Err(AppError::Io(_))));
}

#[test]
fn test_malformed_lines_do_not_hide_later_records() {
    let (shortener, _dir) = common::create_test_shortener();
    let path = shortener.config().store_path.clone();

    fs::write(&path, "garbage\n{\"shorturl\":1}\n").unwrap();

    let short_url = shortener.shorten_url("http://www.testurl.com").unwrap();
    let record = shortener.get_shorturl_info(&short_url).unwrap().unwrap();

    assert_eq!(record.long_url, "http://www.testurl.com");
    assert_eq!(shortener.repository().corrupt_lines_seen(), 2);
}

#[test]
fn test_default_domain_prefix() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("default.db.json");

    let shortener = ShortenerService::open(ShortenerConfig::new(path.to_str(), Some("")));
    let short_url = shortener.shorten_url("http://www.testurl.com").unwrap();

    assert!(short_url.starts_with("http:///"));
}

#[test]
fn test_shorten_after_interrupted_write_is_retrievable() {
    let (shortener, _dir) = common::create_test_shortener();
    let path = shortener.config().store_path.clone();

    shortener.shorten_url("http://www.abc123.com").unwrap();
    let mut content = fs::read_to_string(&path).unwrap();
    content.push_str(r#"{"created_at":"2024-01-15 10:30:00","shorturl":"http://sucu"#);
    fs::write(&path, content).unwrap();

    let short_url = shortener.shorten_url("http://www.testurl.com").unwrap();
    let record = shortener.get_shorturl_info(&short_url).unwrap().unwrap();

    assert_eq!(record.long_url, "http://www.testurl.com");
}
