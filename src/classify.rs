use crate::models::{EntryKind, JournalEntry};

/// Legacy convention: gratitude notes share the entries table with regular
/// journal entries, tagged only by this content prefix.
pub const GRATITUDE_MARKER: &str = "[gratitude]";

/// True iff the trimmed, lowercased content starts with the gratitude marker.
pub fn content_is_gratitude(content: &str) -> bool {
    content.trim().to_lowercase().starts_with(GRATITUDE_MARKER)
}

/// The entry's kind: the explicit discriminator when present, otherwise
/// derived from the content marker. Legacy records predate the `kind` field.
pub fn entry_kind(entry: &JournalEntry) -> EntryKind {
    match entry.kind {
        Some(kind) => kind,
        None if content_is_gratitude(&entry.content) => EntryKind::Gratitude,
        None => EntryKind::Regular,
    }
}

pub fn is_gratitude(entry: &JournalEntry) -> bool {
    entry_kind(entry) == EntryKind::Gratitude
}

/// Strip one leading gratitude marker (case-insensitive) plus any whitespace
/// after it. Content without the marker comes back unchanged.
pub fn gratitude_text(content: &str) -> String {
    let trimmed = content.trim_start();
    let has_marker = trimmed
        .get(..GRATITUDE_MARKER.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(GRATITUDE_MARKER));
    if has_marker {
        trimmed[GRATITUDE_MARKER.len()..].trim_start().to_string()
    } else {
        content.to_string()
    }
}
