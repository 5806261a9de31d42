//! ISO 8601 date/time reformatting for itinerary tokens.
//!
//! Token contents are offset date-times (RFC 3339 grammar). Output uses the
//! fixed English month abbreviations and always writes the UTC offset as
//! `±HH:MM`, so a literal `Z` renders as `+00:00`.

use chrono::{DateTime, FixedOffset};

/// Parse an RFC 3339 offset date-time, `None` on any failure.
///
/// Callers treat `None` as the silent fallback case; nothing is reported.
pub fn parse_offset_datetime(raw: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(raw).ok()
}

/// Format the date as two-digit day, month abbreviation, and four-digit
/// year, e.g. `05 Mar 2024`.
///
/// Time of day and offset are parsed but do not appear in the output.
pub fn format_date(raw: &str) -> Option<String> {
    Some(parse_offset_datetime(raw)?.format("%d %b %Y").to_string())
}

/// Format the time on a 12-hour clock with the UTC offset, e.g.
/// `10:30am (-05:00)`.
pub fn format_clock12(raw: &str) -> Option<String> {
    Some(parse_offset_datetime(raw)?.format("%I:%M%P (%:z)").to_string())
}

/// Format the time on a 24-hour clock with the UTC offset, e.g.
/// `18:30 (-05:00)`.
pub fn format_clock24(raw: &str) -> Option<String> {
    Some(parse_offset_datetime(raw)?.format("%H:%M (%:z)").to_string())
}
