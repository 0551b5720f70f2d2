//! Blog post date handling.
//!
//! Post dates are stored as ISO `YYYY-MM-DD` strings. They are shown to
//! readers in long en-US form and emitted as RFC 2822 in the RSS feed.

use chrono::NaiveDate;

/// Parse a `YYYY-MM-DD` string. Longer RFC 3339 strings keep their date part.
pub fn parse_ymd(s: &str) -> Option<NaiveDate> {
    let date = s.get(..10)?;
    NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()
}

/// Format a date the way the post header shows it: `January 15, 2024`.
///
/// Unparseable input is returned unchanged.
pub fn format_long(s: &str) -> String {
    match parse_ymd(s) {
        Some(date) => date.format("%B %-d, %Y").to_string(),
        None => s.to_owned(),
    }
}

/// Midnight UTC of the given date in RFC 2822 form.
pub fn to_rfc2822(s: &str) -> Option<String> {
    let date = parse_ymd(s)?;
    Some(date.and_hms_opt(0, 0, 0)?.and_utc().to_rfc2822())
}
