//! The note form: opening it for a new or existing note, filling it in,
//! and turning a submission into store actions.

use rand::Rng;

use crate::entity::{BackgroundColor, Note, NoteId};
use crate::error::{BoardError, Result};
use crate::id::IdGenerator;
use crate::store::{Action, NotesStore};

/// What the modal is currently doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Closed,
    Create,
    Edit(NoteId),
}

/// Result of a successful submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submitted {
    Created(NoteId),
    Edited(NoteId),
    /// The note being edited was deleted while the form was open.
    Vanished(NoteId),
}

#[derive(Debug, Default, Clone)]
pub struct NoteForm {
    mode: FormMode,
    title: String,
    content: String,
}

impl NoteForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn is_open(&self) -> bool {
        self.mode != FormMode::Closed
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Open an empty form for a new note.
    pub fn open_create(&mut self) {
        self.clear();
        self.mode = FormMode::Create;
    }

    /// Open the form pre-filled with an existing note.
    pub fn open_edit(&mut self, note: &Note) {
        self.mode = FormMode::Edit(note.id);
        self.title = note.title.clone();
        self.content = note.content.clone();
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> Result<()> {
        self.ensure_open()?;
        self.title = title.into();
        Ok(())
    }

    pub fn set_content(&mut self, content: impl Into<String>) -> Result<()> {
        self.ensure_open()?;
        self.content = content.into();
        Ok(())
    }

    /// Discard the input and close the modal.
    pub fn cancel(&mut self) {
        self.clear();
    }

    /// Submit the form against `store`.
    ///
    /// The form is cleared and closed whatever the outcome, including a
    /// duplicate rejection.
    pub fn submit<R: Rng + ?Sized>(
        &mut self,
        store: &mut NotesStore,
        ids: &mut IdGenerator,
        rng: &mut R,
    ) -> Result<Submitted> {
        let mode = self.mode;
        let title = std::mem::take(&mut self.title);
        let content = std::mem::take(&mut self.content);
        self.clear();

        match mode {
            FormMode::Closed => Err(BoardError::FormClosed),
            FormMode::Edit(id) => {
                let Some(existing) = store.get(id) else {
                    tracing::debug!(note = %id, "edited note no longer exists");
                    return Ok(Submitted::Vanished(id));
                };
                let edited = Note {
                    title,
                    content,
                    ..existing.clone()
                };
                store.dispatch(Action::Edit(edited));
                Ok(Submitted::Edited(id))
            }
            FormMode::Create => {
                if let Some(existing) = store.find_duplicate(&title, &content) {
                    tracing::info!(note = %existing.id, "rejected duplicate note");
                    return Err(BoardError::DuplicateNote { title, content });
                }
                let note = Note::new(ids.next_id(), title, content, BackgroundColor::random(rng));
                let id = note.id;
                store.dispatch(Action::Add(note));
                Ok(Submitted::Created(id))
            }
        }
    }

    fn ensure_open(&self) -> Result<()> {
        if self.is_open() {
            Ok(())
        } else {
            Err(BoardError::FormClosed)
        }
    }

    fn clear(&mut self) {
        self.mode = FormMode::Closed;
        self.title.clear();
        self.content.clear();
    }
}
