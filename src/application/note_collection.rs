// src/application/note_collection.rs
use crate::application::store::{load_records, save_records};
use crate::application::{IdGenerator, KeyValueStore};
use crate::constants::NOTES_KEY;
use crate::domain::{DomainError, Note, NoteDraft, NoteEdit};
use tracing::{debug, info, instrument};

const SEED_CONTENT_LONG: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do eiusmod tempor incididunt ut labore et dolore magna aliqua. Ut enim ad minim veniam, quis nostrud exercitation ullamco laboris nisi ut aliquip ex ea commodo consequat.";
const SEED_CONTENT_SHORT: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do eiusmod tempor incididunt ut labore et dolore magna aliqua. ";
const SEED_TAGS: [&str; 2] = ["tag 1", "tag 2"];

/// Ordered set of notes, newest first, mirrored to one store key.
///
/// Every mutation rewrites the whole collection. A failed write leaves the
/// in-memory change in place and returns the error.
pub struct NoteCollection<S: KeyValueStore, G: IdGenerator> {
    store: S,
    ids: G,
    default_author: String,
    notes: Vec<Note>,
}

impl<S: KeyValueStore, G: IdGenerator> NoteCollection<S, G> {
    /// Build the collection from whatever the store holds, seeding it when
    /// that is nothing usable.
    pub fn load(store: S, ids: G, default_author: impl Into<String>) -> Result<Self, DomainError> {
        let mut collection = Self {
            store,
            ids,
            default_author: default_author.into(),
            notes: Vec::new(),
        };
        collection.reload()?;
        Ok(collection)
    }

    /// Replace the in-memory notes with the stored ones.
    #[instrument(level = "debug", skip(self))]
    pub fn reload(&mut self) -> Result<(), DomainError> {
        self.notes = load_records(&self.store, NOTES_KEY)?;
        if self.notes.is_empty() {
            self.seed()?;
        }
        debug!(count = self.notes.len(), "Loaded notes");
        Ok(())
    }

    #[instrument(level = "debug", skip(self), fields(count = self.notes.len()))]
    pub fn persist(&mut self) -> Result<(), DomainError> {
        save_records(&mut self.store, NOTES_KEY, &self.notes)
    }

    /// Insert an empty note at the front and return it.
    pub fn add_note(&mut self) -> Result<&Note, DomainError> {
        let note = Note::create(
            self.ids.generate(),
            NoteDraft {
                author: self.default_author.clone(),
                ..Default::default()
            },
        );
        info!(note_id = note.id(), "Adding note");
        self.notes.insert(0, note);
        self.persist()?;
        Ok(&self.notes[0])
    }

    /// Remove the note with `id`. Unknown ids are ignored.
    pub fn delete_note(&mut self, id: &str) -> Result<(), DomainError> {
        let Some(index) = self.notes.iter().position(|n| n.id() == id) else {
            debug!(note_id = id, "No note to delete");
            return Ok(());
        };
        self.notes.remove(index);
        info!(note_id = id, "Deleted note");
        self.persist()
    }

    /// Replace title, content, colour and tags of the note with `id`.
    /// Unknown ids are ignored.
    pub fn update_note(&mut self, id: &str, edit: NoteEdit) -> Result<(), DomainError> {
        let Some(note) = self.notes.iter_mut().find(|n| n.id() == id) else {
            debug!(note_id = id, "No note to update");
            return Ok(());
        };
        note.apply(edit);
        info!(note_id = id, "Updated note");
        self.persist()
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Note> {
        self.notes.iter().find(|n| n.id() == id)
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    fn seed(&mut self) -> Result<(), DomainError> {
        info!("Seeding example notes");
        let seeds = [
            ("Test note 1", SEED_CONTENT_LONG, "Alex Moreton"),
            ("Shopping list", SEED_CONTENT_LONG, "Rachel"),
            ("Job interview", SEED_CONTENT_SHORT, "Al"),
        ];
        self.notes = seeds
            .into_iter()
            .map(|(title, content, author)| {
                Note::create(
                    self.ids.generate(),
                    NoteDraft {
                        title: title.to_string(),
                        content: content.to_string(),
                        tags: SEED_TAGS.iter().map(|t| t.to_string()).collect(),
                        author: author.to_string(),
                        ..Default::default()
                    },
                )
            })
            .collect();
        self.persist()
    }
}
