//! The board ties the store, the note form, id allocation and the color
//! picker together. It is the only state the presentation layer holds and
//! is passed around explicitly.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::drag;
use crate::entity::{Note, NoteId, Position};
use crate::error::{BoardError, Result};
use crate::id::IdGenerator;
use crate::store::{Action, NotesStore};
use crate::workflow::{NoteForm, Submitted};

pub struct Board<R = StdRng> {
    store: NotesStore,
    form: NoteForm,
    ids: IdGenerator,
    rng: R,
}

impl Board<StdRng> {
    /// Board whose colors come from OS entropy.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Board with a reproducible color sequence.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::new(),
        }
    }
}

impl Default for Board<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Board<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            store: NotesStore::new(),
            form: NoteForm::new(),
            ids: IdGenerator::new(),
            rng,
        }
    }

    pub fn store(&self) -> &NotesStore {
        &self.store
    }

    pub fn notes(&self) -> &[Note] {
        self.store.notes()
    }

    pub fn form(&self) -> &NoteForm {
        &self.form
    }

    pub fn note(&self, id: NoteId) -> Result<&Note> {
        self.store.get(id).ok_or(BoardError::NoteNotFound(id))
    }

    /// Notes bottom to top, with dragged notes on top.
    pub fn stacking_order(&self) -> Vec<&Note> {
        drag::stacking_order(self.store.notes())
    }

    pub fn open_create(&mut self) {
        self.form.open_create();
    }

    /// Open the form on an existing note. The form is left untouched when
    /// the note does not exist.
    pub fn open_edit(&mut self, id: NoteId) -> Result<()> {
        let note = self.store.get(id).ok_or(BoardError::NoteNotFound(id))?;
        self.form.open_edit(note);
        Ok(())
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> Result<()> {
        self.form.set_title(title)
    }

    pub fn set_content(&mut self, content: impl Into<String>) -> Result<()> {
        self.form.set_content(content)
    }

    pub fn cancel(&mut self) {
        self.form.cancel();
    }

    pub fn submit(&mut self) -> Result<Submitted> {
        self.form
            .submit(&mut self.store, &mut self.ids, &mut self.rng)
    }

    /// Open, fill in and submit the form for a new note.
    pub fn create(&mut self, title: impl Into<String>, content: impl Into<String>) -> Result<Submitted> {
        self.open_create();
        self.set_title(title)?;
        self.set_content(content)?;
        self.submit()
    }

    /// Open, fill in and submit the form for an existing note.
    pub fn update(
        &mut self,
        id: NoteId,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Result<Submitted> {
        self.open_edit(id)?;
        self.set_title(title)?;
        self.set_content(content)?;
        self.submit()
    }

    pub fn delete(&mut self, id: NoteId) {
        self.store.dispatch(Action::Delete(id));
    }

    pub fn drag_start(&mut self, id: NoteId) {
        self.dispatch_all(drag::start(id));
    }

    pub fn drag_stop(&mut self, id: NoteId, position: Position) {
        self.dispatch_all(drag::stop(id, position));
    }

    /// Pick a note up and drop it at `position` in one gesture.
    pub fn move_to(&mut self, id: NoteId, position: Position) {
        self.drag_start(id);
        self.drag_stop(id, position);
    }

    fn dispatch_all(&mut self, actions: Vec<Action>) {
        for action in actions {
            self.store.dispatch(action);
        }
    }
}
