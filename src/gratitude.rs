use crate::classify::{gratitude_text, is_gratitude};
use crate::dates::{date_key, normalize_entry_date};
use crate::models::{GratitudeNote, JournalEntry};

/// Project the gratitude notes out of the entry list, input order preserved.
/// Unlike the calendar, a note survives an unresolvable date; it just renders
/// with an empty date.
pub fn gratitude_notes(entries: &[JournalEntry]) -> Vec<GratitudeNote> {
    entries
        .iter()
        .filter(|entry| is_gratitude(entry))
        .map(|entry| GratitudeNote {
            id: entry.id,
            date: normalize_entry_date(entry)
                .map(date_key)
                .unwrap_or_default(),
            text: gratitude_text(&entry.content),
        })
        .collect()
}
