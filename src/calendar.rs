use crate::classify::is_gratitude;
use crate::dates::{created_sort_key, date_key, normalize_entry_date};
use crate::models::{CalendarCell, JournalEntry};
use crate::mood;
use chrono::{Datelike, NaiveDate};
use std::collections::BTreeMap;

/// Unique moods shown per day before collapsing into an overflow count.
pub const MAX_MOOD_BADGES: usize = 3;

/// Build the mood calendar for one month. Gratitude notes and entries with
/// no resolvable date are dropped; everything else keyed by canonical date.
/// "Last mood of the day" follows input order, not `createdAt`.
pub fn build_calendar(
    entries: &[JournalEntry],
    year: i32,
    month: u32,
) -> BTreeMap<String, CalendarCell> {
    let mut cells: BTreeMap<String, CalendarCell> = BTreeMap::new();

    for entry in entries {
        if is_gratitude(entry) {
            continue;
        }
        let Some(date) = normalize_entry_date(entry) else {
            continue;
        };
        if date.year() != year || date.month() != month {
            continue;
        }
        let label = mood::normalize(entry.mood.as_deref());
        let cell = cells.entry(date_key(date)).or_default();
        cell.primary_mood = label.clone();
        cell.moods.push(label);
    }

    for cell in cells.values_mut() {
        let mut unique: Vec<String> = Vec::new();
        for label in &cell.moods {
            if !unique.contains(label) {
                unique.push(label.clone());
            }
        }
        cell.extra_moods = unique.len().saturating_sub(MAX_MOOD_BADGES);
        unique.truncate(MAX_MOOD_BADGES);
        cell.badges = unique;
    }

    cells
}

/// Entries attributed to a single day, for the day drawer. Gratitude notes
/// are dropped; the rest sort ascending by `createdAt` with missing
/// timestamps at epoch zero, ties keeping input order.
pub fn entries_for_date(entries: &[JournalEntry], date: NaiveDate) -> Vec<JournalEntry> {
    let mut matched: Vec<JournalEntry> = entries
        .iter()
        .filter(|entry| !is_gratitude(entry))
        .filter(|entry| normalize_entry_date(entry) == Some(date))
        .cloned()
        .collect();
    matched.sort_by_key(created_sort_key);
    matched
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: u64, date: &str, mood: &str, content: &str) -> JournalEntry {
        JournalEntry {
            id,
            date: Some(date.to_string()),
            mood: if mood.is_empty() {
                None
            } else {
                Some(mood.to_string())
            },
            content: content.to_string(),
            ..JournalEntry::default()
        }
    }

    #[test]
    fn gratitude_entries_never_reach_the_calendar() {
        let entries = vec![
            entry(1, "2024-03-05", "peaceful", "[gratitude] sunshine"),
            entry(2, "2024-03-05", "happy", "good walk"),
        ];
        let cells = build_calendar(&entries, 2024, 3);
        let cell = &cells["2024-03-05"];
        assert_eq!(cell.primary_mood, "happy");
        assert_eq!(cell.moods, vec!["happy"]);
    }

    #[test]
    fn primary_mood_is_last_in_input_order() {
        let entries = vec![
            entry(1, "2024-03-05", "happy", "morning"),
            entry(2, "2024-03-05", "sad", "noon"),
            entry(3, "2024-03-05", "Happy", "evening, same mood different case"),
        ];
        let cells = build_calendar(&entries, 2024, 3);
        let cell = &cells["2024-03-05"];
        assert_eq!(cell.primary_mood, "happy");
        assert_eq!(cell.moods, vec!["happy", "sad", "happy"]);
        assert_eq!(cell.badges, vec!["happy", "sad"]);
        assert_eq!(cell.extra_moods, 0);
    }

    #[test]
    fn badges_cap_at_three_with_overflow_count() {
        let entries = vec![
            entry(1, "2024-03-09", "happy", "a"),
            entry(2, "2024-03-09", "sad", "b"),
            entry(3, "2024-03-09", "calm", "c"),
            entry(4, "2024-03-09", "tired", "d"),
            entry(5, "2024-03-09", "angry", "e"),
            entry(6, "2024-03-09", "SAD", "duplicate, different case"),
        ];
        let cells = build_calendar(&entries, 2024, 3);
        let cell = &cells["2024-03-09"];
        assert_eq!(cell.badges, vec!["happy", "sad", "calm"]);
        assert_eq!(cell.extra_moods, 2);
    }

    #[test]
    fn entries_outside_the_month_or_undateable_are_dropped() {
        let entries = vec![
            entry(1, "2024-02-28", "happy", "last month"),
            entry(2, "not-a-date", "sad", "unplaceable"),
            entry(3, "2024-03-01", "calm", "in range"),
        ];
        let cells = build_calendar(&entries, 2024, 3);
        assert_eq!(cells.len(), 1);
        assert!(cells.contains_key("2024-03-01"));
    }

    #[test]
    fn missing_mood_shows_the_unknown_sentinel() {
        let entries = vec![entry(1, "2024-03-05", "", "no mood recorded")];
        let cells = build_calendar(&entries, 2024, 3);
        assert_eq!(cells["2024-03-05"].primary_mood, mood::UNKNOWN);
    }

    #[test]
    fn empty_month_is_an_empty_map() {
        let entries = vec![entry(1, "2024-03-05", "happy", "march")];
        assert!(build_calendar(&entries, 2024, 4).is_empty());
        assert!(build_calendar(&[], 2024, 3).is_empty());
    }

    #[test]
    fn build_calendar_is_idempotent() {
        let entries = vec![
            entry(1, "2024-03-05", "happy", "x"),
            entry(2, "2024-03-06", "sad", "y"),
        ];
        assert_eq!(
            build_calendar(&entries, 2024, 3),
            build_calendar(&entries, 2024, 3)
        );
    }

    #[test]
    fn day_view_sorts_by_created_at_and_keeps_tie_order() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        let mut late = entry(1, "2024-03-05", "happy", "posted second, written later");
        late.created_at = Some("2024-03-05T20:00:00Z".to_string());
        let mut early = entry(2, "2024-03-05", "sad", "written earlier");
        early.created_at = Some("2024-03-05T08:00:00Z".to_string());
        let no_ts_a = entry(3, "2024-03-05", "calm", "no timestamp a");
        let no_ts_b = entry(4, "2024-03-05", "tired", "no timestamp b");

        let entries = vec![late, early, no_ts_a, no_ts_b];
        let ordered = entries_for_date(&entries, date);
        let ids: Vec<u64> = ordered.iter().map(|e| e.id).collect();
        // Missing timestamps sort as epoch zero, stable in input order.
        assert_eq!(ids, vec![3, 4, 2, 1]);
    }

    #[test]
    fn day_view_excludes_gratitude_and_other_days() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        let entries = vec![
            entry(1, "2024-03-05", "peaceful", "[gratitude] thanks"),
            entry(2, "2024-03-06", "happy", "wrong day"),
            entry(3, "2024-03-05", "calm", "right day"),
        ];
        let ordered = entries_for_date(&entries, date);
        assert_eq!(ordered.len(), 1);
        assert_eq!(ordered[0].id, 3);
    }

    #[test]
    fn day_view_with_no_matches_is_empty() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert!(entries_for_date(&[], date).is_empty());
    }
}
