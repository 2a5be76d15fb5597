//! Frontend Models
//!
//! Data structures matching backend todo records.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Opaque todo identifier.
///
/// The backend may send ids as strings or integers; both are held as text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(from = "RawId")]
pub struct TodoId(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(i64),
}

impl From<RawId> for TodoId {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Text(s) => TodoId(s),
            RawId::Number(n) => TodoId(n.to_string()),
        }
    }
}

impl TodoId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TodoId {
    fn from(s: &str) -> Self {
        TodoId(s.to_string())
    }
}

impl From<String> for TodoId {
    fn from(s: String) -> Self {
        TodoId(s)
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Todo record (matches backend)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TodoRecord {
    #[serde(alias = "todoID")]
    pub id: TodoId,
    pub name: String,
    pub completed: bool,
    #[serde(deserialize_with = "deserialize_created")]
    pub created: DateTime<Utc>,
}

/// Offset-less forms, read as UTC
const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// `created` arrives as epoch milliseconds (integer or float) or as text.
///
/// Text is RFC 3339, with or without offset, `T` or space separated, or a bare date.
fn deserialize_created<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawCreated {
        Millis(i64),
        FloatMillis(f64),
        Text(String),
    }

    let parsed = match RawCreated::deserialize(deserializer)? {
        RawCreated::Millis(ms) => DateTime::from_timestamp_millis(ms),
        RawCreated::FloatMillis(ms) if ms.is_finite() => DateTime::from_timestamp_millis(ms as i64),
        RawCreated::FloatMillis(_) => None,
        RawCreated::Text(text) => parse_created_text(text.trim()),
    };
    parsed.ok_or_else(|| serde::de::Error::custom("unrecognised `created` timestamp"))
}

fn parse_created_text(text: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc));
    }
    // "2024-05-01 10:00:00+02:00"
    if let Ok(dt) = DateTime::parse_from_rfc3339(&text.replacen(' ', "T", 1)) {
        return Some(dt.with_timezone(&Utc));
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(text, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
        .map(|naive| naive.and_utc())
}

/// Request body for `/todo/update-name/{id}`
#[derive(Debug, Serialize)]
pub struct UpdateNameArgs<'a> {
    pub name: &'a str,
}
