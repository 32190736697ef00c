//! Date normalization.
//!
//! Source documents emit dates in two encodings depending on which upstream
//! subsystem produced the field: hyphen-delimited with a trailing UTC-offset
//! suffix (`2018-04-03-04:00`), and compact 8-digit (`20180402`). Both
//! normalize to canonical `YYYY-MM-DD`. Anything else passes through
//! unchanged - normalization is best-effort, never an error.

use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

/// Compact date pattern: exactly 8 digits (YYYYMMDD).
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static COMPACT_DATE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{8}$").expect("valid regex"));

/// Normalize a raw date string to `YYYY-MM-DD`.
///
/// Recognized shapes:
/// - hyphen-delimited with optional offset suffix: only the first three
///   hyphen-delimited components are kept (`2018-04-03-04:00` becomes
///   `2018-04-03`; an already-canonical date is unchanged)
/// - compact 8-digit `YYYYMMDD`, split by fixed offsets
///
/// Any other non-empty input is returned unchanged; empty or
/// whitespace-only input yields `None`.
///
/// # Examples
/// ```
/// use merkrecht_extractor::dates::normalize;
///
/// assert_eq!(normalize("2018-04-03-04:00"), Some("2018-04-03".to_string()));
/// assert_eq!(normalize("20180402"), Some("2018-04-02".to_string()));
/// assert_eq!(normalize(""), None);
/// ```
#[must_use]
pub fn normalize(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    if trimmed.contains('-') {
        let parts: Vec<&str> = trimmed.split('-').take(3).collect();
        return Some(parts.join("-"));
    }

    if COMPACT_DATE_PATTERN.is_match(trimmed) {
        return Some(format!(
            "{}-{}-{}",
            &trimmed[0..4],
            &trimmed[4..6],
            &trimmed[6..8]
        ));
    }

    Some(trimmed.to_string())
}

/// Chronological sort key for a normalized date string.
///
/// Returns `None` for strings that are not a real `YYYY-MM-DD` date (e.g.
/// passthrough values), so they order together with undated entries.
#[must_use]
pub fn sort_key(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()
}
