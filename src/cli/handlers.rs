use std::io::{BufRead, Write};

use clap::{CommandFactory, Parser};

use crate::board::Board;
use crate::config::BoardConfig;
use crate::entity::{NoteId, Position};
use crate::error::{BoardError, Result};
use crate::render;
use crate::workflow::Submitted;

use super::commands::{split_words, Gesture, GestureLine};

/// Whether the session should keep reading gestures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Per-session presentation settings.
#[derive(Debug, Clone)]
pub struct SessionOptions {
    pub json: bool,
    /// Printed before each line when `Some`.
    pub prompt: Option<String>,
}

impl SessionOptions {
    pub fn from_config(config: &BoardConfig, interactive: bool) -> Self {
        Self {
            json: config.json,
            prompt: interactive.then(|| config.prompt.clone()),
        }
    }
}

/// Parse one input line. Blank lines and `#` comments yield `None`.
pub fn parse_gesture(line: &str) -> Result<Option<Gesture>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    let words = split_words(line).map_err(BoardError::InvalidGesture)?;
    let parsed = GestureLine::try_parse_from(words)
        .map_err(|e| BoardError::InvalidGesture(e.to_string().trim_end().to_string()))?;
    Ok(Some(parsed.gesture))
}

/// Read gestures until end of input or `quit`.
///
/// Failed gestures are reported on `err` and the session carries on.
pub fn run_session<I, O, E>(
    board: &mut Board,
    mut input: I,
    out: &mut O,
    err: &mut E,
    options: &SessionOptions,
) -> Result<()>
where
    I: BufRead,
    O: Write,
    E: Write,
{
    let mut buf = Vec::new();
    loop {
        if let Some(prompt) = &options.prompt {
            write!(out, "{}", prompt)?;
            out.flush()?;
        }
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }

        let result = std::str::from_utf8(&buf)
            .map_err(|_| BoardError::InvalidGesture("line is not valid UTF-8".to_string()))
            .and_then(parse_gesture)
            .and_then(|gesture| match gesture {
                Some(gesture) => handle_gesture(board, gesture, out, options),
                None => Ok(Flow::Continue),
            });

        match result {
            Ok(Flow::Continue) => {}
            Ok(Flow::Quit) => break,
            Err(e) if e.is_warning() => writeln!(err, "Warning: {}", e)?,
            Err(BoardError::Io(e)) => return Err(BoardError::Io(e)),
            Err(e) => writeln!(err, "Error: {}", e)?,
        }
    }
    tracing::debug!(notes = board.notes().len(), "session ended");
    Ok(())
}

/// Apply one gesture to the board and print its outcome.
pub fn handle_gesture<O: Write>(
    board: &mut Board,
    gesture: Gesture,
    out: &mut O,
    options: &SessionOptions,
) -> Result<Flow> {
    tracing::debug!(?gesture, "gesture");
    match gesture {
        Gesture::New => {
            board.open_create();
            writeln!(out, "{}", render::form_text(board.form()))?;
        }
        Gesture::Title { text } => board.set_title(text.join(" "))?,
        Gesture::Content { text } => board.set_content(text.join(" "))?,
        Gesture::Submit => {
            let outcome = board.submit()?;
            report_submitted(board, outcome, out)?;
        }
        Gesture::Cancel => {
            board.cancel();
            writeln!(out, "{}", render::form_text(board.form()))?;
        }
        Gesture::Form => writeln!(out, "{}", render::form_text(board.form()))?,
        Gesture::Add { title, content } => {
            let outcome = board.create(title, content)?;
            report_submitted(board, outcome, out)?;
        }
        Gesture::Edit { id } => {
            board.open_edit(id)?;
            writeln!(out, "{}", render::form_text(board.form()))?;
        }
        Gesture::Update { id, title, content } => {
            let outcome = board.update(id, title, content)?;
            report_submitted(board, outcome, out)?;
        }
        Gesture::Delete { id } => handle_delete(board, id, out)?,
        Gesture::Grab { id } => {
            let known = board.store().get(id).is_some();
            board.drag_start(id);
            if known {
                writeln!(out, "Dragging note {}", id)?;
            }
        }
        Gesture::Release { id, x, y } => {
            let known = board.store().get(id).is_some();
            board.drag_stop(id, Position::new(x, y));
            report_moved(board, id, known, out)?;
        }
        Gesture::Move { id, x, y } => {
            let known = board.store().get(id).is_some();
            board.move_to(id, Position::new(x, y));
            report_moved(board, id, known, out)?;
        }
        Gesture::List => {
            let notes = board.stacking_order();
            if options.json {
                writeln!(out, "{}", render::board_json(&notes)?)?;
            } else {
                writeln!(out, "{}", render::board_text(&notes))?;
            }
        }
        Gesture::Show { id } => {
            let note = board.note(id)?;
            if options.json {
                writeln!(out, "{}", render::note_json(note)?)?;
            } else {
                writeln!(out, "{}", render::note_detail(note))?;
            }
        }
        Gesture::Search { query } => {
            tracing::debug!(query = %query.join(" "), "search ignored");
            writeln!(out, "Search is not available; no notes were filtered.")?;
        }
        Gesture::Help => {
            let help = GestureLine::command().render_long_help();
            writeln!(out, "{}", help)?;
        }
        Gesture::Quit => return Ok(Flow::Quit),
    }
    Ok(Flow::Continue)
}

fn handle_delete<O: Write>(board: &mut Board, id: NoteId, out: &mut O) -> Result<()> {
    let known = board.store().get(id).is_some();
    board.delete(id);
    if known {
        writeln!(out, "Deleted note {}", id)?;
    } else {
        tracing::debug!(note = %id, "delete of unknown note ignored");
    }
    Ok(())
}

fn report_submitted<O: Write>(board: &Board, outcome: Submitted, out: &mut O) -> Result<()> {
    match outcome {
        Submitted::Created(id) => {
            let note = board.note(id)?;
            writeln!(out, "Created note {} ({})", id, note.background_color)?;
        }
        Submitted::Edited(id) => writeln!(out, "Updated note {}", id)?,
        Submitted::Vanished(id) => {
            writeln!(out, "Note {} no longer exists; nothing was updated", id)?
        }
    }
    Ok(())
}

fn report_moved<O: Write>(board: &Board, id: NoteId, known: bool, out: &mut O) -> Result<()> {
    if known {
        let note = board.note(id)?;
        writeln!(out, "Moved note {} to {}", id, note.position)?;
    }
    Ok(())
}
