//! Tolerant date parsing for registry exports.
//!
//! Exports mix ISO dates, Brazilian day-first dates, and full timestamps.
//! Parsing never fails a batch: anything unrecognized yields `None`, which
//! propagates to a null survival time for that record only.

use chrono::NaiveDate;

/// Formats accepted for date cells, tried in order.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d/%m/%Y", "%d-%m-%Y"];

/// Formats accepted for timestamp cells; the time part is discarded.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%d/%m/%Y %H:%M:%S",
];

/// Parse a date cell, returning `None` for empty or unrecognized values.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Some(date);
        }
    }
    for format in DATETIME_FORMATS {
        if let Ok(datetime) = chrono::NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(datetime.date());
        }
    }
    None
}
