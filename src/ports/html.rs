// src/ports/html.rs
use crate::constants::CARD_BACKGROUND_ALPHA;
use crate::domain::Note;
use crate::ports::board::join_tags;
use html_escape::{encode_double_quoted_attribute, encode_text};
use tracing::instrument;

#[derive(Debug, Default)]
pub struct HtmlPresenter;

impl HtmlPresenter {
    pub fn new() -> Self {
        Self
    }

    #[instrument(level = "trace", skip(self))]
    fn render_card(&self, note: &Note) -> String {
        let id = encode_double_quoted_attribute(note.id());
        let colour = encode_double_quoted_attribute(note.colour());
        format!(
            r#"        <div class="note-card" data-id="{id}" style="background-color: {colour}{alpha};">
            <input type="text" class="note-title" data-id="{id}" value="{title}" placeholder="Title...">
            <br>
            <textarea class="note-content" rows="5" data-id="{id}" placeholder="Content...">{content}</textarea>
            <br>
            <span class="note-tag-list" data-id="{id}">{tags}</span>
            <br>
            <button type="button" class="delete-note" data-id="{id}"></button>
            <input type="color" class="note-colour" name="note-colour" data-id="{id}" value="{colour}">
            <div class="note-info">{author} &middot; {date}</div>
        </div>
"#,
            id = id,
            colour = colour,
            alpha = CARD_BACKGROUND_ALPHA,
            title = encode_double_quoted_attribute(note.title()),
            content = encode_text(note.content()),
            tags = encode_text(&join_tags(note.tags())),
            author = encode_text(note.author()),
            date = note.date().format("%Y-%m-%d %H:%M"),
        )
    }

    /// Render a full page with one card per note, in the given order
    pub fn render(&self, notes: &[&Note]) -> String {
        let cards = if notes.is_empty() {
            "        No notes found!\n".to_string()
        } else {
            notes.iter().map(|note| self.render_card(note)).collect()
        };

        format!(
            r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>Notes</title>
    <style>
        body {{
            font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
            line-height: 1.6;
            max-width: 1000px;
            margin: 2rem auto;
            padding: 0 1rem;
            background-color: #f5f5f5;
        }}
        .notes-list {{
            display: flex;
            flex-wrap: wrap;
            gap: 1rem;
        }}
        .note-card {{
            width: 280px;
            border-radius: 8px;
            padding: 1rem;
            box-shadow: 0 2px 4px rgba(0,0,0,0.1);
        }}
        .note-title, .note-content {{
            width: 100%;
            border: none;
            background: transparent;
        }}
        .note-title {{
            font-weight: bold;
            font-size: 1.1em;
        }}
        .note-tag-list {{
            font-size: 0.8em;
            color: #444;
        }}
        .note-info {{
            margin-top: 0.5rem;
            font-size: 0.8em;
            color: #666;
        }}
    </style>
</head>
<body>
    <div class="notes-list">
{cards}    </div>
</body>
</html>"#,
            cards = cards
        )
    }
}
