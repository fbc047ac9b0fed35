// src/ports/mod.rs
pub mod board;
pub mod html;

pub use board::{EditForm, NoteBoard};
pub use html::HtmlPresenter;
