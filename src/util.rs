// Utility helpers for parsing raw CSV fields.
//
// This module centralizes all the "dirty" string handling so the rest of the
// code can assume clean, typed values.
use chrono::NaiveDate;
use num_format::{Locale, ToFormattedString};

/// Parse a date in the dataset's `M/D/YYYY` format.
///
/// - Accepts `Option<&str>` so callers can pass through optional fields.
/// - Trims whitespace.
/// - Zero padding is optional: `1/2/2020` and `01/02/2020` both parse.
/// - Returns `None` for anything else (including ISO dates like
///   `2020-01-02`), which callers treat as a row skip.
pub fn parse_date_safe(s: Option<&str>) -> Option<NaiveDate> {
    let s = s?.trim();
    if s.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(s, "%m/%d/%Y").ok()
}

/// Parse a count column into `u64` while being forgiving about formatting
/// issues that are common in CSV exports.
///
/// - Trims whitespace and strips thousands separators like `","`.
/// - Returns `None` for empty cells, negative values, and non-numeric text;
///   the configured `NumericPolicy` decides what happens then.
pub fn parse_count_safe(s: Option<&str>) -> Option<u64> {
    let s = s?.trim();
    if s.is_empty() {
        return None;
    }
    let s = s.replace(',', "");
    s.parse::<u64>().ok()
}

pub fn format_int<T>(n: T) -> String
where
    T: ToFormattedString,
{
    // Thin wrapper around `num-format` for integer-like values. This is used
    // for counts in console messages (e.g., `31,822 rows read`).
    n.to_formatted_string(&Locale::en)
}
