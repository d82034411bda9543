//! Timestamp helpers.
//!
//! The gateway reports timestamps as RFC 3339 strings; fixtures and older
//! payloads sometimes carry a bare `YYYY-MM-DD` date, which is read as
//! midnight UTC.

use chrono::{DateTime, NaiveDate, Utc};

/// Parse an RFC 3339 timestamp or a bare date into UTC.
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
