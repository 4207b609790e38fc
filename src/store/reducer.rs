use crate::entity::{Note, NoteId, Position};

/// A request to transition the notes collection.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Append a fully formed note. A note whose id is already present is ignored.
    Add(Note),
    /// Replace the note with the same id, keeping its place in the sequence.
    Edit(Note),
    /// Remove the note with this id.
    Delete(NoteId),
    /// Move a note.
    UpdatePosition { id: NoteId, position: Position },
    /// Raise or clear the drag flag of a note.
    SetDragging { id: NoteId, is_dragging: bool },
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::Add(_) => "add",
            Action::Edit(_) => "edit",
            Action::Delete(_) => "delete",
            Action::UpdatePosition { .. } => "update_position",
            Action::SetDragging { .. } => "set_dragging",
        }
    }

    /// The note this action targets.
    pub fn target(&self) -> NoteId {
        match self {
            Action::Add(note) | Action::Edit(note) => note.id,
            Action::Delete(id) => *id,
            Action::UpdatePosition { id, .. } | Action::SetDragging { id, .. } => *id,
        }
    }
}

/// Apply `action` to `state`, returning the new collection.
///
/// The input is never modified. Actions naming an id that is not present
/// leave the collection unchanged. `Add` keeps ids unique but does not
/// compare titles or content.
pub fn reduce(state: &[Note], action: &Action) -> Vec<Note> {
    match action {
        Action::Add(note) if state.iter().any(|existing| existing.id == note.id) => {
            state.to_vec()
        }
        Action::Add(note) => {
            let mut next = Vec::with_capacity(state.len() + 1);
            next.extend_from_slice(state);
            next.push(note.clone());
            next
        }
        Action::Edit(edited) => state
            .iter()
            .map(|note| {
                if note.id == edited.id {
                    edited.clone()
                } else {
                    note.clone()
                }
            })
            .collect(),
        Action::Delete(id) => state.iter().filter(|note| note.id != *id).cloned().collect(),
        Action::UpdatePosition { id, position } => state
            .iter()
            .map(|note| {
                if note.id == *id {
                    Note {
                        position: *position,
                        ..note.clone()
                    }
                } else {
                    note.clone()
                }
            })
            .collect(),
        Action::SetDragging { id, is_dragging } => state
            .iter()
            .map(|note| {
                if note.id == *id {
                    Note {
                        is_dragging: *is_dragging,
                        ..note.clone()
                    }
                } else {
                    note.clone()
                }
            })
            .collect(),
    }
}
