// src/domain/filter.rs
use crate::domain::Note;

/// Case-insensitive substring match against title, content and every tag.
///
/// An empty query matches every note.
pub fn note_matches(note: &Note, query: &str) -> bool {
    let needle = query.to_lowercase();
    let contains = |text: &str| text.to_lowercase().contains(&needle);

    contains(note.title())
        || contains(note.content())
        || note.tags().iter().any(|tag| contains(tag))
}
