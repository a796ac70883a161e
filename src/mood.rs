//! One mood policy for every view: absent or blank moods normalize to the
//! `unknown` sentinel (rendered `❓`) in display contexts and are excluded
//! from counting contexts like the mood distribution.

/// Sentinel label for an absent or blank mood.
pub const UNKNOWN: &str = "unknown";

/// Glyph for the unknown sentinel and for labels outside the known set.
pub const UNKNOWN_GLYPH: &str = "❓";

/// Dashboard default when no dated entry exists at all.
pub const NEUTRAL_GLYPH: &str = "😐";

/// Case-normalized mood label, `unknown` when absent or blank.
pub fn normalize(raw: Option<&str>) -> String {
    match known(raw) {
        Some(label) => label,
        None => UNKNOWN.to_string(),
    }
}

/// Case-normalized label only when a real one is present. Counting contexts
/// use this so the sentinel never becomes a map key.
pub fn known(raw: Option<&str>) -> Option<String> {
    let trimmed = raw?.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

pub fn glyph(label: &str) -> &'static str {
    match label {
        "happy" => "😊",
        "sad" => "😢",
        "angry" => "😠",
        "anxious" => "😰",
        "calm" => "😌",
        "tired" => "😴",
        "neutral" => "😐",
        "excited" => "🤩",
        "frustrated" => "😤",
        "peaceful" => "🕊️",
        _ => UNKNOWN_GLYPH,
    }
}
