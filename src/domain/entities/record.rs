//! Record entity: one persisted long URL → short URL mapping.

use chrono::{DateTime, Timelike, Utc};
use serde::{Deserialize, Serialize};

/// Human-readable labels for the persisted field names.
const FIELD_LABELS: &[(&str, &str)] = &[
    ("created_at", "Created"),
    ("longurl", "Long URL"),
    ("shorturl", "Short URL"),
];

/// A shortened URL mapping as stored in the record file.
///
/// Records are written once and never mutated. Field order matches the
/// on-disk layout: `created_at`, `shorturl`, `longurl`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(with = "timestamp_format")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "shorturl")]
    pub short_url: String,
    #[serde(rename = "longurl")]
    pub long_url: String,
}

impl Record {
    /// Creates a new Record instance.
    pub fn new(created_at: DateTime<Utc>, long_url: String, short_url: String) -> Self {
        Self {
            created_at,
            long_url,
            short_url,
        }
    }

    /// Creates a record stamped with the current time.
    ///
    /// The timestamp is truncated to whole seconds, the precision of the
    /// stored format, so a record read back compares equal to the one written.
    pub fn now(long_url: String, short_url: String) -> Self {
        let now = Utc::now();
        let created_at = now.with_nanosecond(0).unwrap_or(now);
        Self::new(created_at, long_url, short_url)
    }

    /// Field name/value pairs in storage order.
    pub fn fields(&self) -> [(&'static str, String); 3] {
        [
            ("created_at", timestamp_format::to_string(&self.created_at)),
            ("shorturl", self.short_url.clone()),
            ("longurl", self.long_url.clone()),
        ]
    }
}

/// Returns the display label for a stored field name.
///
/// Unknown names are returned unchanged.
pub fn field_label(field: &str) -> &str {
    FIELD_LABELS
        .iter()
        .find(|(name, _)| *name == field)
        .map(|(_, label)| *label)
        .unwrap_or(field)
}

mod timestamp_format {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    pub fn to_string(value: &DateTime<Utc>) -> String {
        value.format(FORMAT).to_string()
    }

    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&to_string(value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, FORMAT)
            .map(|naive| naive.and_utc())
            .map_err(serde::de::Error::custom)
    }
}
