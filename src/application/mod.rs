// src/application/mod.rs
pub mod ids;
pub mod note_collection;
pub mod store;
pub mod tag_collection;

pub use ids::IdGenerator;
pub use note_collection::NoteCollection;
pub use store::KeyValueStore;
pub use tag_collection::TagCollection;
