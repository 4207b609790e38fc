// src/entity/note.rs
use serde::{Deserialize, Serialize};

use super::{BackgroundColor, NoteId, Position};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub content: String,
    pub background_color: BackgroundColor,
    pub position: Position,
    pub is_dragging: bool,
}

impl Note {
    /// A freshly created note sits at the origin and is not being dragged.
    pub fn new(
        id: NoteId,
        title: String,
        content: String,
        background_color: BackgroundColor,
    ) -> Self {
        Self {
            id,
            title,
            content,
            background_color,
            position: Position::ORIGIN,
            is_dragging: false,
        }
    }

    /// True when this note carries exactly the given title and content.
    pub fn has_text(&self, title: &str, content: &str) -> bool {
        self.title == title && self.content == content
    }
}
