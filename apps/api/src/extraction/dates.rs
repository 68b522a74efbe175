use std::sync::LazyLock;

use regex::Regex;

use crate::extraction::models::PRESENT;

pub(crate) static YEAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(?:19|20)\d{2}\b").unwrap());
static ONGOING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:present|current|now)\b").unwrap());
static PRESENT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\bpresent\b").unwrap());

/// Resolved start/end pair. Empty strings mean "not found".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateRange {
    pub start: String,
    pub end: String,
}

/// True when a line carries a year or the word "Present".
/// "Current" and "now" alone are too common in prose to mark a date line.
pub fn has_date_marker(line: &str) -> bool {
    YEAR_RE.is_match(line) || PRESENT_RE.is_match(line)
}

/// Resolves a free-form date fragment into a start/end pair.
///
/// - ongoing marker present → end is `"Present"`, start is the first year (or empty)
/// - two or more years → first and last
/// - one year → that year for both
/// - no year → both empty
pub fn resolve_date_range(text: &str) -> DateRange {
    let years: Vec<&str> = YEAR_RE.find_iter(text).map(|m| m.as_str()).collect();
    let start = years.first().map(|y| y.to_string()).unwrap_or_default();

    if ONGOING_RE.is_match(text) {
        return DateRange {
            start,
            end: PRESENT.to_string(),
        };
    }

    let end = years.last().map(|y| y.to_string()).unwrap_or_default();
    DateRange { start, end }
}
