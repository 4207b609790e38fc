pub mod board;
pub mod cli;
pub mod config;
pub mod drag;
pub mod entity;
pub mod error;
pub mod id;
pub mod render;
pub mod store;
pub mod workflow;

pub use board::Board;
pub use config::BoardConfig;
pub use entity::{BackgroundColor, Note, NoteId, Position, PALETTE};
pub use error::{BoardError, Result};
pub use store::{reduce, Action, NotesStore};
