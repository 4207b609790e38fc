use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::entity::NoteId;

#[derive(Parser, Debug)]
#[command(name = "stickyboard")]
#[command(version, about = "An in-memory sticky-note board")]
#[command(
    after_help = "Gestures are read one per line from stdin (or --script). Type 'help' in the session for the list."
)]
pub struct Cli {
    /// YAML configuration file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Seed for note colors, for reproducible boards
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print notes as JSON
    #[arg(long)]
    pub json: bool,

    /// Read gestures from a file instead of stdin
    #[arg(long, value_name = "FILE")]
    pub script: Option<PathBuf>,
}

/// One line of session input.
#[derive(Parser, Debug)]
#[command(name = "gesture", no_binary_name = true)]
#[command(
    disable_help_subcommand = true,
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct GestureLine {
    #[command(subcommand)]
    pub gesture: Gesture,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Gesture {
    /// Open the form for a new note
    New,

    /// Set the title in the open form
    #[command(disable_help_flag = true)]
    Title {
        #[arg(allow_hyphen_values = true)]
        text: Vec<String>,
    },

    /// Set the content in the open form
    #[command(disable_help_flag = true)]
    Content {
        #[arg(allow_hyphen_values = true)]
        text: Vec<String>,
    },

    /// Save the open form
    Submit,

    /// Close the form without saving
    Cancel,

    /// Show the form
    Form,

    /// Create a note in one step
    #[command(disable_help_flag = true)]
    Add {
        #[arg(allow_hyphen_values = true)]
        title: String,

        #[arg(default_value = "", allow_hyphen_values = true)]
        content: String,
    },

    /// Open the form on an existing note
    Edit { id: NoteId },

    /// Replace a note's title and content in one step
    #[command(disable_help_flag = true)]
    Update {
        id: NoteId,

        #[arg(allow_hyphen_values = true)]
        title: String,

        #[arg(default_value = "", allow_hyphen_values = true)]
        content: String,
    },

    /// Delete a note
    #[command(alias = "rm")]
    Delete { id: NoteId },

    /// Start dragging a note
    Grab { id: NoteId },

    /// Drop a dragged note at a position
    #[command(name = "drop", alias = "release")]
    Release {
        id: NoteId,

        #[arg(allow_negative_numbers = true, value_parser = parse_coordinate)]
        x: f64,

        #[arg(allow_negative_numbers = true, value_parser = parse_coordinate)]
        y: f64,
    },

    /// Drag a note to a position in one step
    Move {
        id: NoteId,

        #[arg(allow_negative_numbers = true, value_parser = parse_coordinate)]
        x: f64,

        #[arg(allow_negative_numbers = true, value_parser = parse_coordinate)]
        y: f64,
    },

    /// Show the board
    #[command(alias = "ls")]
    List,

    /// Show one note
    Show { id: NoteId },

    /// Search notes (not implemented; nothing is filtered)
    #[command(disable_help_flag = true)]
    Search {
        #[arg(allow_hyphen_values = true)]
        query: Vec<String>,
    },

    /// List gestures
    Help,

    /// End the session
    #[command(alias = "exit")]
    Quit,
}

/// Canvas coordinates must be finite.
fn parse_coordinate(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .parse()
        .map_err(|_| format!("Invalid coordinate: {}", s))?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(format!("Coordinate must be a finite number: {}", s))
    }
}

/// Split a line into words. Single and double quotes group words, and a
/// backslash escapes the next character outside single quotes.
pub fn split_words(line: &str) -> Result<Vec<String>, String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match (quote, c) {
            (Some('\''), '\'') => quote = None,
            (Some('"'), '"') => quote = None,
            (Some('"'), '\\') | (None, '\\') => match chars.next() {
                Some(escaped) => {
                    current.push(escaped);
                    in_word = true;
                }
                None => return Err("Trailing backslash".to_string()),
            },
            (Some(_), c) => current.push(c),
            (None, '\'') | (None, '"') => {
                quote = Some(c);
                in_word = true;
            }
            (None, c) if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            (None, c) => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if quote.is_some() {
        return Err("Unterminated quote".to_string());
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}
