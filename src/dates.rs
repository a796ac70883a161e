use crate::models::JournalEntry;
use chrono::{DateTime, NaiveDate, NaiveDateTime};

const CANONICAL_FORMAT: &str = "%Y-%m-%d";

/// Deterministic fallback formats tried in order; no host-locale parsing.
const FALLBACK_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%m/%d/%Y",
    "%Y/%m/%d",
    "%d %b %Y",
    "%B %d, %Y",
];

const CREATED_AT_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

/// Reduce a raw date string to a calendar date. Canonical `YYYY-MM-DD`
/// prefixes win (covers full timestamps), then the fallback formats. `None`
/// means the entry is unplaceable and must be dropped from date-keyed views.
pub fn canonical_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Some(prefix) = raw.get(..10) {
        if let Ok(date) = NaiveDate::parse_from_str(prefix, CANONICAL_FORMAT) {
            return Some(date);
        }
    }
    for format in FALLBACK_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(raw, format) {
            return Some(date);
        }
    }
    None
}

/// Resolve the entry's raw date field (`entryDate` before `date`) and
/// canonicalize it.
pub fn normalize_entry_date(entry: &JournalEntry) -> Option<NaiveDate> {
    canonical_date(entry.raw_date()?)
}

pub fn date_key(date: NaiveDate) -> String {
    date.format(CANONICAL_FORMAT).to_string()
}

/// Millis-since-epoch sort key for `createdAt`. Absent or unparseable
/// timestamps sort as epoch zero so the stable sort keeps input order.
pub fn created_sort_key(entry: &JournalEntry) -> i64 {
    entry.created_at.as_deref().map_or(0, timestamp_millis)
}

fn timestamp_millis(raw: &str) -> i64 {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return ts.timestamp_millis();
    }
    for format in CREATED_AT_FORMATS {
        if let Ok(ts) = NaiveDateTime::parse_from_str(raw, format) {
            return ts.and_utc().timestamp_millis();
        }
    }
    match canonical_date(raw) {
        Some(date) => date.and_hms_opt(0, 0, 0).map_or(0, |ts| ts.and_utc().timestamp_millis()),
        None => 0,
    }
}
