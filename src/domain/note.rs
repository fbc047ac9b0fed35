// src/domain/note.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

pub const DEFAULT_COLOUR: &str = "#ffffff";

/// A single note card.
///
/// Serializes to the stored record `{id, title, author, content, date, tags, colour}`.
/// Records missing anything but `id` are completed with the same defaults
/// [`Note::create`] uses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    id: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    author: String,
    #[serde(default)]
    content: String,
    #[serde(default = "Utc::now", deserialize_with = "date_or_now")]
    date: DateTime<Utc>,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default = "default_colour")]
    colour: String,
}

fn default_colour() -> String {
    DEFAULT_COLOUR.to_string()
}

/// A `null` date gets the current time, like a missing one.
fn date_or_now<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
    Ok(Option::<DateTime<Utc>>::deserialize(deserializer)?.unwrap_or_else(Utc::now))
}

/// Optional fields for [`Note::create`]; anything left at its default gets
/// the note default (empty text, no tags, current time, white).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
    pub author: String,
    pub date: Option<DateTime<Utc>>,
    pub colour: Option<String>,
}

/// The fields an edit replaces. `id`, `author` and `date` are never touched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteEdit {
    pub title: String,
    pub content: String,
    pub colour: String,
    pub tags: Vec<String>,
}

impl Note {
    pub fn create(id: impl Into<String>, draft: NoteDraft) -> Self {
        Self {
            id: id.into(),
            title: draft.title,
            author: draft.author,
            content: draft.content,
            date: draft.date.unwrap_or_else(Utc::now),
            tags: draft.tags,
            colour: draft.colour.unwrap_or_else(default_colour),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn colour(&self) -> &str {
        &self.colour
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    pub fn set_colour(&mut self, colour: impl Into<String>) {
        self.colour = colour.into();
    }

    pub fn set_tags(&mut self, tags: Vec<String>) {
        self.tags = tags;
    }

    pub fn apply(&mut self, edit: NoteEdit) {
        self.set_title(edit.title);
        self.set_content(edit.content);
        self.set_colour(edit.colour);
        self.set_tags(edit.tags);
    }
}
