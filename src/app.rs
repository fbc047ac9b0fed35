// src/app.rs
use crate::application::{IdGenerator, KeyValueStore, NoteCollection, TagCollection};
use crate::domain::DomainError;
use crate::ports::NoteBoard;
use tracing::info;

/// Owns both collections for the lifetime of one session.
///
/// `S` and `G` are cloned so each collection holds its own handle; clones
/// must refer to the same underlying store.
pub struct NotesApp<S, G>
where
    S: KeyValueStore + Clone,
    G: IdGenerator + Clone,
{
    tags: TagCollection<S, G>,
    board: NoteBoard<S, G>,
}

impl<S, G> NotesApp<S, G>
where
    S: KeyValueStore + Clone,
    G: IdGenerator + Clone,
{
    /// Load tags, then notes, seeding either when the store has none.
    pub fn new(store: S, ids: G, default_author: &str) -> Result<Self, DomainError> {
        let tags = TagCollection::load(store.clone(), ids.clone())?;
        let notes = NoteCollection::load(store, ids, default_author)?;
        info!(notes = notes.len(), tags = tags.tags().len(), "Notes app ready");
        Ok(Self {
            tags,
            board: NoteBoard::new(notes),
        })
    }

    pub fn tags(&self) -> &TagCollection<S, G> {
        &self.tags
    }

    pub fn board(&self) -> &NoteBoard<S, G> {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut NoteBoard<S, G> {
        &mut self.board
    }
}
