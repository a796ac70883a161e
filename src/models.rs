use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Explicit entry discriminator. New entries get one assigned at write time;
/// legacy records carry `None` and fall back to the `[gratitude]` content
/// marker (see `classify::entry_kind`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Regular,
    Gratitude,
}

/// A raw journal entry as producers send it. Upstream was never consistent
/// about the date field name, so both spellings are kept and resolved by
/// priority in `raw_date`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct JournalEntry {
    pub id: u64,
    #[serde(rename = "entryDate", skip_serializing_if = "Option::is_none")]
    pub entry_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mood: Option<String>,
    pub content: String,
    #[serde(
        rename = "createdAt",
        alias = "created_at",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<EntryKind>,
}

impl JournalEntry {
    /// The raw date string, `entryDate` taking precedence over `date`.
    pub fn raw_date(&self) -> Option<&str> {
        self.entry_date.as_deref().or(self.date.as_deref())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Goal {
    pub id: u64,
    pub title: String,
    pub completed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppData {
    pub entries: Vec<JournalEntry>,
    pub goals: Vec<Goal>,
}

#[derive(Debug, Deserialize)]
pub struct NewEntryRequest {
    pub date: Option<String>,
    pub mood: Option<String>,
    pub content: String,
    pub kind: Option<EntryKind>,
}

/// One day on the mood calendar. `primary_mood` is the last mood recorded
/// that day in input order; `badges` is the de-duplicated mood set truncated
/// for display, with `extra_moods` counting the uniques beyond the cap.
#[derive(Debug, Clone, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CalendarCell {
    pub primary_mood: String,
    pub moods: Vec<String>,
    pub badges: Vec<String>,
    pub extra_moods: usize,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct GratitudeNote {
    pub id: u64,
    /// Canonical `YYYY-MM-DD`, or empty when the raw date never resolved.
    pub date: String,
    pub text: String,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub total_entries: u64,
    pub total_goals: u64,
    pub completed_goals: u64,
    /// Integer percent in 0..=100, rounded half-up. 0 when there are no goals.
    pub goals_progress: u8,
    pub current_mood: String,
    pub mood_distribution: BTreeMap<String, u64>,
}
