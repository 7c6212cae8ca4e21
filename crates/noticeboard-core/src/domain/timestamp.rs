//! ISO-8601 timestamp parsing and rendering.
//!
//! Announcement dates travel and rest as strings. They are parsed only to
//! validate them and to check that an expiration lies in the future.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Format used for "now" and for `created_at`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Offset forms that RFC 3339 rejects: minutes precision or a space separator.
const OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%d %H:%M%:z",
    "%Y-%m-%d %H:%M:%S%.f%:z",
];

/// Hour-only values are matched after appending `:00`.
const HOUR_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M"];

/// Parse an ISO-8601 date or date-time.
///
/// Values carrying an offset are converted to UTC; naive values are taken to
/// already be UTC. A bare date means midnight.
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }

    let with_offset = match value.strip_suffix(['Z', 'z']) {
        Some(rest) => format!("{rest}+00:00"),
        None => value.to_string(),
    };
    for format in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(&with_offset, format) {
            return Some(dt.with_timezone(&Utc));
        }
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Some(naive.and_utc());
        }
    }

    let padded = format!("{value}:00");
    for format in HOUR_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(&padded, format) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Render an instant the way stored dates are compared against.
pub fn render_timestamp(instant: DateTime<Utc>) -> String {
    instant.naive_utc().format(TIMESTAMP_FORMAT).to_string()
}
