mod helpers;

use anyhow::Result;
use helpers::TestStore;
use notecards::app::NotesApp;
use notecards::cli::args::Command;
use notecards::domain::{DomainError, Note};
use notecards::execute;
use notecards::infrastructure::FileStore;
use notecards::util::testing::SequentialIds;

fn run(app: &mut NotesApp<FileStore, SequentialIds>, command: Command) -> Result<String> {
    let mut out = Vec::new();
    execute(app, command, &mut out)?;
    Ok(String::from_utf8(out)?)
}

fn edit(note_id: &str) -> Command {
    Command::Edit {
        note_id: note_id.to_string(),
        title: None,
        content: None,
        colour: None,
        tags: None,
    }
}

#[test]
fn given_seeded_store_when_listing_then_prints_one_line_per_note() -> Result<()> {
    // Arrange
    let test_store = TestStore::new()?;
    let mut app = test_store.start_app("id")?;

    // Act
    let output = run(&mut app, Command::List { search: None, json: false })?;

    // Assert
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].contains("Test note 1"));
    assert!(lines[0].ends_with("[tag 1, tag 2]"));
    assert!(lines[2].contains("Job interview"));
    Ok(())
}

#[test]
fn given_search_when_listing_json_then_prints_matching_records() -> Result<()> {
    // Arrange
    let test_store = TestStore::new()?;
    let mut app = test_store.start_app("id")?;

    // Act
    let output = run(
        &mut app,
        Command::List {
            search: Some("shopping".to_string()),
            json: true,
        },
    )?;

    // Assert
    let notes: Vec<Note> = serde_json::from_str(&output)?;
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].title(), "Shopping list");
    Ok(())
}

#[test]
fn given_no_match_when_listing_then_says_so() -> Result<()> {
    // Arrange
    let test_store = TestStore::new()?;
    let mut app = test_store.start_app("id")?;

    // Act
    let output = run(
        &mut app,
        Command::List {
            search: Some("xyzzy".to_string()),
            json: false,
        },
    )?;

    // Assert
    assert_eq!(output.trim(), "No notes found!");
    Ok(())
}

#[test]
fn given_new_then_edit_when_executing_then_only_given_fields_change() -> Result<()> {
    // Arrange
    let test_store = TestStore::new()?;
    let mut app = test_store.start_app("id")?;
    let id = run(&mut app, Command::New)?.trim().to_string();

    // Act
    run(
        &mut app,
        Command::Edit {
            note_id: id.clone(),
            title: Some("Books to read".to_string()),
            content: None,
            colour: None,
            tags: Some("books, job-hunting".to_string()),
        },
    )?;
    run(
        &mut app,
        Command::Edit {
            note_id: id.clone(),
            title: None,
            content: None,
            colour: Some("#abcdef".to_string()),
            tags: None,
        },
    )?;

    // Assert
    let reloaded = test_store.start_app("other")?;
    let note = reloaded.board().find_note(&id).expect("note persisted");
    assert_eq!(note.title(), "Books to read");
    assert_eq!(note.content(), "");
    assert_eq!(note.colour(), "#abcdef");
    assert_eq!(note.tags(), ["books".to_string(), "job-hunting".to_string()]);
    assert_eq!(reloaded.board().list_all_notes()[0].id(), id);
    Ok(())
}

#[test]
fn given_unknown_id_when_editing_or_deleting_then_succeeds_without_change() -> Result<()> {
    // Arrange
    let test_store = TestStore::new()?;
    let mut app = test_store.start_app("id")?;
    let before = test_store.read_raw(notecards::constants::NOTES_KEY)?;

    // Act
    run(&mut app, edit("missing"))?;
    run(&mut app, Command::Delete { note_id: "missing".to_string() })?;

    // Assert
    assert_eq!(test_store.read_raw(notecards::constants::NOTES_KEY)?, before);
    Ok(())
}

#[test]
fn given_unknown_id_when_showing_then_returns_not_found() -> Result<()> {
    // Arrange
    let test_store = TestStore::new()?;
    let mut app = test_store.start_app("id")?;

    // Act
    let result = run(
        &mut app,
        Command::Show {
            note_id: "missing".to_string(),
            json: false,
        },
    );

    // Assert
    let err = result.expect_err("Should fail for unknown id");
    match err.downcast_ref::<DomainError>() {
        Some(DomainError::NoteNotFound(id)) => assert_eq!(id, "missing"),
        _ => panic!("Expected NoteNotFound error"),
    }
    Ok(())
}

#[test]
fn given_known_id_when_showing_then_prints_fields() -> Result<()> {
    // Arrange
    let test_store = TestStore::new()?;
    let mut app = test_store.start_app("id")?;
    let id = app.board().list_all_notes()[1].id().to_string();

    // Act
    let output = run(&mut app, Command::Show { note_id: id.clone(), json: false })?;

    // Assert
    assert!(output.contains(&format!("id:      {id}")));
    assert!(output.contains("title:   Shopping list"));
    assert!(output.contains("author:  Rachel"));
    assert!(output.contains("tags:    tag 1, tag 2"));
    Ok(())
}

#[test]
fn given_deleted_note_when_listing_then_it_is_gone() -> Result<()> {
    // Arrange
    let test_store = TestStore::new()?;
    let mut app = test_store.start_app("id")?;
    let id = app.board().list_all_notes()[0].id().to_string();

    // Act
    run(&mut app, Command::Delete { note_id: id.clone() })?;
    let output = run(&mut app, Command::List { search: None, json: false })?;

    // Assert
    assert_eq!(output.lines().count(), 2);
    assert!(!output.contains("Test note 1"));
    Ok(())
}

#[test]
fn given_tags_command_when_executing_then_lists_seeded_tags() -> Result<()> {
    // Arrange
    let test_store = TestStore::new()?;
    let mut app = test_store.start_app("id")?;

    // Act
    let output = run(&mut app, Command::Tags { names: false })?;

    // Assert
    let names: Vec<&str> = output
        .lines()
        .filter_map(|line| line.split_once("  ").map(|(_, name)| name))
        .collect();
    assert_eq!(names, ["job-hunting", "books"]);
    Ok(())
}

#[test]
fn given_tags_names_flag_when_executing_then_prints_only_names() -> Result<()> {
    // Arrange
    let test_store = TestStore::new()?;
    let mut app = test_store.start_app("id")?;

    // Act
    let output = run(&mut app, Command::Tags { names: true })?;

    // Assert
    assert_eq!(output, "job-hunting\nbooks\n");
    Ok(())
}
