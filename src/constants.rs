// src/constants.rs
//
// Application-wide constants shared between the collections, the board and the CLI.

/// Store key holding the JSON array of notes.
///
/// Used in: `application/note_collection.rs`
pub const NOTES_KEY: &str = "myNotes";

/// Store key holding the JSON array of tags.
///
/// Used in: `application/tag_collection.rs`
pub const TAGS_KEY: &str = "myTagList";

/// Separator between tag names in the editable tag line.
///
/// Splitting is literal, so a tag name containing ", " is split in two.
///
/// Used in: `ports/board.rs`
pub const TAG_SEPARATOR: &str = ", ";

/// Alpha suffix appended to a note colour for its card background.
///
/// Used in: `ports/html.rs`
pub const CARD_BACKGROUND_ALPHA: &str = "a6";

/// Directory name below the platform config and data directories.
///
/// Used in: `infrastructure/config.rs`
pub const APP_DIR_NAME: &str = "notecards";

/// Delay in milliseconds after handing the HTML file to the browser.
///
/// The temporary directory is removed when the renderer is dropped, so the
/// process has to stay alive long enough for the browser to read the file.
///
/// Used in: `infrastructure/renderer.rs`
pub const BROWSER_LAUNCH_DELAY_MS: u64 = 500;
