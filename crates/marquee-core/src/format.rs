//! Display helpers shared by the TUI and the one-shot CLI.

/// Marker rendered for any absent field.
pub const NOT_AVAILABLE: &str = "N/A";

/// Placeholder image reference for a card without a poster.
pub const CARD_POSTER_PLACEHOLDER: &str = "https://via.placeholder.com/200x300?text=No+Image";

/// Placeholder image reference for the detail panel without a poster.
pub const VIEWER_POSTER_PLACEHOLDER: &str = "https://via.placeholder.com/300x450?text=No+Image";

/// Separator between the parts of a meta line (`2010 • PG-13 • 148 min`).
pub const META_SEPARATOR: &str = " • ";

pub fn or_na(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => NOT_AVAILABLE.to_string(),
    }
}

/// Human-readable result count shown above the grid.
pub fn count_label(count: usize) -> String {
    if count == 1 {
        "Found 1 result".to_string()
    } else {
        format!("Found {count} results")
    }
}

/// Empty-state message for a search that produced no cards.
pub fn empty_state_message(query: &str) -> String {
    format!("No results found for \"{query}\".")
}

pub fn join_meta<S: AsRef<str>>(parts: &[S]) -> String {
    parts
        .iter()
        .map(|p| p.as_ref())
        .collect::<Vec<_>>()
        .join(META_SEPARATOR)
}

/// Truncate to at most `max` characters, appending `…` when cut.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let cut: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{cut}…")
}
