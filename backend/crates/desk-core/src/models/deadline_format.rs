//! Serde adapter for ticket deadlines.
//!
//! Deadlines travel as local wall-clock strings in `yyyy-MM-dd HH:mm` form.
//! `yyyy-MM-ddTHH:mm[:ss]` is accepted on input as well.

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serializer, de::Error as DeError};

pub const FORMAT: &str = "%Y-%m-%d %H:%M";

const ACCEPTED_FORMATS: [&str; 4] = [
    FORMAT,
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S",
];

/// Parse a deadline string in any accepted format
pub fn parse(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    ACCEPTED_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
}

/// Render a deadline in the canonical format
pub fn format(value: &NaiveDateTime) -> String {
    value.format(FORMAT).to_string()
}

pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format(value))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse(&raw).ok_or_else(|| {
        D::Error::custom(format!(
            "invalid deadline '{}', expected yyyy-MM-dd HH:mm",
            raw
        ))
    })
}
