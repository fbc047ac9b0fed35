// src/ports/board.rs
use crate::application::{IdGenerator, KeyValueStore, NoteCollection};
use crate::constants::TAG_SEPARATOR;
use crate::domain::{note_matches, DomainError, Note, NoteEdit};
use tracing::{debug, instrument};

/// Field values as an editor holds them, tags as one delimited line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditForm {
    pub title: String,
    pub content: String,
    pub colour: String,
    pub tags: String,
}

impl EditForm {
    /// Prefill the form from a note, tags joined with `", "`
    pub fn from_note(note: &Note) -> Self {
        Self {
            title: note.title().to_string(),
            content: note.content().to_string(),
            colour: note.colour().to_string(),
            tags: join_tags(note.tags()),
        }
    }

    pub fn into_edit(self) -> NoteEdit {
        NoteEdit {
            tags: split_tags(&self.tags),
            title: self.title,
            content: self.content,
            colour: self.colour,
        }
    }
}

/// Split a tag line on the literal `", "`. An empty line yields one empty tag.
pub fn split_tags(line: &str) -> Vec<String> {
    line.split(TAG_SEPARATOR).map(str::to_string).collect()
}

pub fn join_tags(tags: &[String]) -> String {
    tags.join(TAG_SEPARATOR)
}

/// The command surface a front end drives: create, edit, delete, list, filter.
pub struct NoteBoard<S: KeyValueStore, G: IdGenerator> {
    notes: NoteCollection<S, G>,
}

impl<S: KeyValueStore, G: IdGenerator> NoteBoard<S, G> {
    pub fn new(notes: NoteCollection<S, G>) -> Self {
        Self { notes }
    }

    pub fn create_note(&mut self) -> Result<&Note, DomainError> {
        self.notes.add_note()
    }

    pub fn delete_note(&mut self, id: &str) -> Result<(), DomainError> {
        self.notes.delete_note(id)
    }

    pub fn update_note(&mut self, id: &str, form: EditForm) -> Result<(), DomainError> {
        self.notes.update_note(id, form.into_edit())
    }

    /// Notes matching `query` in display order
    #[instrument(level = "debug", skip(self))]
    pub fn filter_notes(&self, query: &str) -> Vec<&Note> {
        let matched: Vec<&Note> = self
            .notes
            .notes()
            .iter()
            .filter(|note| note_matches(note, query))
            .collect();
        debug!(matched = matched.len(), "Filtered notes");
        matched
    }

    pub fn list_all_notes(&self) -> &[Note] {
        self.notes.notes()
    }

    pub fn find_note(&self, id: &str) -> Option<&Note> {
        self.notes.find_by_id(id)
    }
}
