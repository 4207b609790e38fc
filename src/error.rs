use thiserror::Error;

use crate::entity::NoteId;

#[derive(Error, Debug)]
pub enum BoardError {
    #[error("A note titled {title:?} with the same content already exists")]
    DuplicateNote { title: String, content: String },

    #[error("Note not found: {0}")]
    NoteNotFound(NoteId),

    #[error("No note form is open. Use 'new' or 'edit <id>' first.")]
    FormClosed,

    #[error("Invalid gesture: {0}")]
    InvalidGesture(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl BoardError {
    /// Rejections the user can fix by changing their input.
    pub fn is_warning(&self) -> bool {
        matches!(
            self,
            BoardError::DuplicateNote { .. } | BoardError::FormClosed
        )
    }
}

pub type Result<T> = std::result::Result<T, BoardError>;
