mod reducer;

pub use reducer::{reduce, Action};

use crate::entity::{Note, NoteId};

/// Owner of the authoritative notes collection.
///
/// All changes go through [`NotesStore::dispatch`], which swaps in the
/// collection produced by [`reduce`].
#[derive(Debug, Default, Clone)]
pub struct NotesStore {
    notes: Vec<Note>,
}

impl NotesStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dispatch(&mut self, action: Action) {
        let before = self.notes.len();
        self.notes = reduce(&self.notes, &action);
        tracing::debug!(
            action = action.name(),
            note = %action.target(),
            before,
            after = self.notes.len(),
            "dispatched"
        );
    }

    /// Notes in display order.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn get(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| note.id == id)
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// First note with exactly this title and content, if any.
    pub fn find_duplicate(&self, title: &str, content: &str) -> Option<&Note> {
        self.notes.iter().find(|note| note.has_text(title, content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{BackgroundColor, Position};
    use std::collections::HashSet;

    fn note(id: u64, title: &str, content: &str) -> Note {
        Note::new(
            NoteId(id),
            title.to_string(),
            content.to_string(),
            BackgroundColor::PowderBlue,
        )
    }

    #[test]
    fn test_new_store_is_empty() {
        let store = NotesStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn test_distinct_adds_keep_count_and_unique_ids() {
        let mut store = NotesStore::new();
        for i in 0..50 {
            store.dispatch(Action::Add(note(i, &format!("t{}", i), &format!("c{}", i))));
        }
        assert_eq!(store.len(), 50);
        let ids: HashSet<_> = store.notes().iter().map(|n| n.id).collect();
        assert_eq!(ids.len(), 50);
    }

    #[test]
    fn test_get_and_find_duplicate() {
        let mut store = NotesStore::new();
        store.dispatch(Action::Add(note(1, "A", "1")));
        store.dispatch(Action::Add(note(2, "B", "2")));

        assert_eq!(store.get(NoteId(2)).map(|n| n.title.as_str()), Some("B"));
        assert!(store.get(NoteId(3)).is_none());
        assert_eq!(store.find_duplicate("A", "1").map(|n| n.id), Some(NoteId(1)));
        assert!(store.find_duplicate("A", "2").is_none());
    }

    #[test]
    fn test_edit_keeps_position_and_other_notes() {
        let mut store = NotesStore::new();
        store.dispatch(Action::Add(note(1, "A", "1")));
        store.dispatch(Action::Add(note(2, "B", "2")));
        store.dispatch(Action::UpdatePosition {
            id: NoteId(1),
            position: Position::new(30.0, 40.0),
        });
        let other = store.get(NoteId(2)).cloned();

        let mut edited = note(1, "A2", "1b");
        edited.position = Position::new(30.0, 40.0);
        store.dispatch(Action::Edit(edited));

        let first = store.get(NoteId(1)).unwrap();
        assert_eq!(first.title, "A2");
        assert_eq!(first.position, Position::new(30.0, 40.0));
        assert_eq!(store.get(NoteId(2)).cloned(), other);
    }

    #[test]
    fn test_delete_repeat_does_not_change_length() {
        let mut store = NotesStore::new();
        store.dispatch(Action::Add(note(1, "A", "1")));
        store.dispatch(Action::Add(note(2, "B", "2")));

        store.dispatch(Action::Delete(NoteId(1)));
        assert_eq!(store.len(), 1);
        store.dispatch(Action::Delete(NoteId(1)));
        assert_eq!(store.len(), 1);
    }
}
