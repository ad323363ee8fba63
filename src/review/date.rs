//! Review date formatting.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::error::ClientError;

const DISPLAY_FORMAT: &str = "%B %-d %Y";

/// Formats a review date as "Month Day Year", e.g. `March 5 2024`.
///
/// Accepts `YYYY-MM-DD`, RFC 3339 timestamps, and local timestamps of the
/// form `YYYY-MM-DDTHH:MM:SS` with an optional fractional part. Timestamps
/// with an offset are rendered in their own offset.
///
/// # Errors
///
/// Returns [`ClientError::InvalidDate`] for anything else.
///
/// # Example
///
/// ```
/// use gavel::review::format_review_date;
///
/// assert_eq!(format_review_date("2024-03-05").ok().as_deref(), Some("March 5 2024"));
/// ```
pub fn format_review_date(raw: &str) -> Result<String, ClientError> {
    parse_review_date(raw.trim())
        .map(|date| date.format(DISPLAY_FORMAT).to_string())
        .ok_or_else(|| ClientError::InvalidDate {
            value: raw.to_owned(),
        })
}

fn parse_review_date(value: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Some(timestamp.date_naive());
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|timestamp| timestamp.date())
}
