// src/lib.rs
pub mod app;
pub mod application;
pub mod cli;
pub mod constants;
pub mod domain;
pub mod infrastructure;
pub mod ports;
pub mod util;

use std::io::Write;

use anyhow::{Context, Result};
use app::NotesApp;
use application::{IdGenerator, KeyValueStore};
use domain::{DomainError, Note};
use infrastructure::{renderer::BoardRenderer, Config, FileStore, UuidGenerator};
use ports::board::join_tags;
use ports::{EditForm, HtmlPresenter};
use tracing::{debug, info, warn};
use util::text::summary_line;

use crate::cli::args::{Args, Command};

const LIST_TITLE_WIDTH: usize = 40;

pub fn run(args: Args) -> Result<()> {
    debug!(?args, "Starting notecards with arguments");

    let config = Config::resolve(args.config.as_deref())?;
    let store_dir = match args.store {
        Some(dir) => {
            debug!(?dir, "Using provided store directory");
            dir
        }
        None => config.store_dir()?,
    };

    let store = FileStore::open(&store_dir)?;
    let mut app = NotesApp::new(store, UuidGenerator, &config.notes.author)
        .context("Failed to load notes")?;

    let stdout = std::io::stdout();
    execute(&mut app, args.command, &mut stdout.lock())
}

/// Run one command against a loaded app, writing user-facing output to `out`
pub fn execute<S, G, W>(app: &mut NotesApp<S, G>, command: Command, out: &mut W) -> Result<()>
where
    S: KeyValueStore + Clone,
    G: IdGenerator + Clone,
    W: Write,
{
    match command {
        Command::List { search, json } => {
            let board = app.board();
            let notes = board.filter_notes(search.as_deref().unwrap_or(""));
            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&notes)?)?;
                return Ok(());
            }
            if notes.is_empty() {
                writeln!(out, "No notes found!")?;
            }
            for note in notes {
                write_list_line(out, note)?;
            }
        }
        Command::New => {
            let note = app.board_mut().create_note()?;
            info!(note_id = note.id(), "Created note");
            writeln!(out, "{}", note.id())?;
        }
        Command::Edit {
            note_id,
            title,
            content,
            colour,
            tags,
        } => {
            let board = app.board_mut();
            let Some(note) = board.find_note(&note_id) else {
                warn!(note_id = %note_id, "No such note, nothing edited");
                return Ok(());
            };
            let current = EditForm::from_note(note);
            let form = EditForm {
                title: title.unwrap_or(current.title),
                content: content.unwrap_or(current.content),
                colour: colour.unwrap_or(current.colour),
                tags: tags.unwrap_or(current.tags),
            };
            board.update_note(&note_id, form)?;
        }
        Command::Delete { note_id } => {
            app.board_mut().delete_note(&note_id)?;
        }
        Command::Show { note_id, json } => {
            let note = app
                .board()
                .find_note(&note_id)
                .ok_or_else(|| DomainError::NoteNotFound(note_id.clone()))?;
            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(note)?)?;
            } else {
                write_note(out, note)?;
            }
        }
        Command::Tags { names: true } => {
            for name in app.tags().names() {
                writeln!(out, "{name}")?;
            }
        }
        Command::Tags { names: false } => {
            for tag in app.tags().tags() {
                writeln!(out, "{}  {}", tag.id, tag.name)?;
            }
        }
        Command::Render { search } => {
            let notes = app.board().filter_notes(search.as_deref().unwrap_or(""));
            let html = HtmlPresenter::new().render(&notes);

            let mut renderer = BoardRenderer::new();
            let path = renderer.create_temp_file(&html)?;
            info!(?path, count = notes.len(), "Opening board in browser");
            renderer.open_in_browser(&path)?;
        }
    }
    Ok(())
}

fn write_list_line<W: Write>(out: &mut W, note: &Note) -> Result<()> {
    let title = summary_line(note.title(), LIST_TITLE_WIDTH);
    let title = if title.is_empty() { "(untitled)".to_string() } else { title };
    if note.tags().is_empty() {
        writeln!(out, "{}  {}", note.id(), title)?;
    } else {
        writeln!(out, "{}  {}  [{}]", note.id(), title, join_tags(note.tags()))?;
    }
    Ok(())
}

fn write_note<W: Write>(out: &mut W, note: &Note) -> Result<()> {
    writeln!(out, "id:      {}", note.id())?;
    writeln!(out, "title:   {}", note.title())?;
    writeln!(out, "author:  {}", note.author())?;
    writeln!(out, "date:    {}", note.date().to_rfc3339())?;
    writeln!(out, "colour:  {}", note.colour())?;
    writeln!(out, "tags:    {}", join_tags(note.tags()))?;
    writeln!(out)?;
    writeln!(out, "{}", note.content())?;
    Ok(())
}
