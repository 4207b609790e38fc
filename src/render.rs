//! Text and JSON views of the board.

use crate::entity::Note;
use crate::error::Result;
use crate::workflow::{FormMode, NoteForm};

/// One line summary of a note.
pub fn note_line(note: &Note) -> String {
    let drag = if note.is_dragging { " [dragging]" } else { "" };
    format!(
        "{} {} at {}{} - {}",
        note.id, note.background_color, note.position, drag, note.title
    )
}

/// A note with its content, as shown by `show`.
pub fn note_detail(note: &Note) -> String {
    let mut out = note_line(note);
    for line in note.content.lines() {
        out.push_str("\n    ");
        out.push_str(line);
    }
    out
}

/// The board in paint order, bottom note first.
pub fn board_text(notes: &[&Note]) -> String {
    if notes.is_empty() {
        return "No notes on the board.".to_string();
    }
    let mut out = format!("Notes ({}):\n", notes.len());
    for note in notes {
        out.push('\n');
        out.push_str("  ");
        out.push_str(&note_detail(note).replace('\n', "\n  "));
    }
    out
}

pub fn board_json(notes: &[&Note]) -> Result<String> {
    Ok(serde_json::to_string_pretty(notes)?)
}

pub fn note_json(note: &Note) -> Result<String> {
    Ok(serde_json::to_string_pretty(note)?)
}

pub fn form_text(form: &NoteForm) -> String {
    match form.mode() {
        FormMode::Closed => "Form closed".to_string(),
        FormMode::Create => format!(
            "Form open: new note\n  title: {:?}\n  content: {:?}",
            form.title(),
            form.content()
        ),
        FormMode::Edit(id) => format!(
            "Form open: editing note {}\n  title: {:?}\n  content: {:?}",
            id,
            form.title(),
            form.content()
        ),
    }
}
