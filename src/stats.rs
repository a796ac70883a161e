use crate::classify::is_gratitude;
use crate::dates::{created_sort_key, normalize_entry_date};
use crate::models::{Goal, JournalEntry, StatsResponse};
use crate::mood;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Dashboard statistics over the whole entry list. Gratitude notes count
/// nowhere here; the goal counts pass through from the goals collection.
pub fn compute_stats(entries: &[JournalEntry], goals: &[Goal]) -> StatsResponse {
    let mut total_entries = 0u64;
    let mut mood_distribution: BTreeMap<String, u64> = BTreeMap::new();
    let mut latest: Option<(NaiveDate, i64)> = None;
    let mut current_mood: Option<String> = None;

    for entry in entries {
        if is_gratitude(entry) {
            continue;
        }
        total_entries += 1;

        if let Some(label) = mood::known(entry.mood.as_deref()) {
            *mood_distribution.entry(label).or_insert(0) += 1;
        }

        // Most recently dated entry wins; equal dates fall back to createdAt,
        // remaining ties to the later input position.
        if let Some(date) = normalize_entry_date(entry) {
            let key = (date, created_sort_key(entry));
            if latest.is_none_or(|best| key >= best) {
                latest = Some(key);
                current_mood = Some(mood::normalize(entry.mood.as_deref()));
            }
        }
    }

    let total_goals = goals.len() as u64;
    let completed_goals = goals.iter().filter(|goal| goal.completed).count() as u64;
    let goals_progress = if total_goals == 0 {
        0
    } else {
        ((completed_goals as f64 / total_goals as f64) * 100.0).round() as u8
    };

    let current_mood = match current_mood {
        Some(label) if label == mood::UNKNOWN => mood::UNKNOWN_GLYPH.to_string(),
        Some(label) => label,
        None => mood::NEUTRAL_GLYPH.to_string(),
    };

    StatsResponse {
        total_entries,
        total_goals,
        completed_goals,
        goals_progress,
        current_mood,
        mood_distribution,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(date: &str, mood: &str, content: &str) -> JournalEntry {
        JournalEntry {
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

    fn goal(completed: bool) -> Goal {
        Goal {
            completed,
            ..Goal::default()
        }
    }

    #[test]
    fn empty_input_yields_zeroed_stats() {
        let stats = compute_stats(&[], &[]);
        assert_eq!(stats.total_entries, 0);
        assert_eq!(stats.goals_progress, 0);
        assert_eq!(stats.current_mood, mood::NEUTRAL_GLYPH);
        assert!(stats.mood_distribution.is_empty());
    }

    #[test]
    fn gratitude_notes_count_nowhere() {
        let entries = vec![
            entry("2024-03-05", "peaceful", "[gratitude] thanks"),
            entry("2024-03-04", "happy", "regular"),
        ];
        let stats = compute_stats(&entries, &[]);
        assert_eq!(stats.total_entries, 1);
        assert_eq!(stats.mood_distribution.get("peaceful"), None);
        assert_eq!(stats.mood_distribution.get("happy"), Some(&1));
    }

    #[test]
    fn distribution_merges_case_insensitively_and_skips_absent_moods() {
        let entries = vec![
            entry("2024-03-01", "Happy", "a"),
            entry("2024-03-02", "happy", "b"),
            entry("2024-03-03", "", "no mood, counted but not bucketed"),
        ];
        let stats = compute_stats(&entries, &[]);
        assert_eq!(stats.total_entries, 3);
        assert_eq!(stats.mood_distribution.get("happy"), Some(&2));
        assert_eq!(stats.mood_distribution.len(), 1);
    }

    #[test]
    fn current_mood_follows_latest_date_then_created_at() {
        let mut older = entry("2024-03-01", "sad", "old");
        older.created_at = Some("2024-03-01T23:00:00Z".to_string());
        let mut same_day_early = entry("2024-03-05", "calm", "morning");
        same_day_early.created_at = Some("2024-03-05T08:00:00Z".to_string());
        let mut same_day_late = entry("2024-03-05", "happy", "evening");
        same_day_late.created_at = Some("2024-03-05T21:00:00Z".to_string());

        let stats = compute_stats(&[older, same_day_late, same_day_early], &[]);
        assert_eq!(stats.current_mood, "happy");
    }

    #[test]
    fn current_mood_without_mood_is_the_unknown_glyph() {
        let stats = compute_stats(&[entry("2024-03-05", "", "blank mood")], &[]);
        assert_eq!(stats.current_mood, mood::UNKNOWN_GLYPH);
    }

    #[test]
    fn undated_entries_never_set_current_mood() {
        let entries = vec![entry("someday", "happy", "unplaceable")];
        let stats = compute_stats(&entries, &[]);
        assert_eq!(stats.total_entries, 1);
        assert_eq!(stats.current_mood, mood::NEUTRAL_GLYPH);
    }

    #[test]
    fn goals_progress_rounds_half_up() {
        let stats = compute_stats(&[], &[goal(true), goal(true), goal(false)]);
        assert_eq!(stats.total_goals, 3);
        assert_eq!(stats.completed_goals, 2);
        assert_eq!(stats.goals_progress, 67);

        // 1/8 = 12.5% rounds up to 13.
        let goals = vec![
            goal(true),
            goal(false),
            goal(false),
            goal(false),
            goal(false),
            goal(false),
            goal(false),
            goal(false),
        ];
        assert_eq!(compute_stats(&[], &goals).goals_progress, 13);
    }

    #[test]
    fn zero_goals_never_divides() {
        assert_eq!(compute_stats(&[], &[]).goals_progress, 0);
    }

    #[test]
    fn compute_stats_is_idempotent() {
        let entries = vec![entry("2024-03-05", "happy", "x")];
        let goals = vec![goal(true)];
        assert_eq!(
            compute_stats(&entries, &goals),
            compute_stats(&entries, &goals)
        );
    }
}
