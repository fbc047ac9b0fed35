// src/domain/mod.rs
pub mod error;
pub mod filter;
pub mod note;
pub mod tag;

pub use error::DomainError;
pub use filter::note_matches;
pub use note::{Note, NoteDraft, NoteEdit, DEFAULT_COLOUR};
pub use tag::Tag;
