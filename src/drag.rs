use crate::entity::{Note, NoteId, Position};
use crate::store::Action;

/// Actions for picking a note up.
pub fn start(id: NoteId) -> Vec<Action> {
    vec![Action::SetDragging {
        id,
        is_dragging: true,
    }]
}

/// Actions for letting go of a note at `position`. The move is applied
/// before the flag is cleared.
pub fn stop(id: NoteId, position: Position) -> Vec<Action> {
    vec![
        Action::UpdatePosition { id, position },
        Action::SetDragging {
            id,
            is_dragging: false,
        },
    ]
}

/// Notes in paint order, bottom first. Notes being dragged are painted
/// last so they sit above everything else; order is otherwise preserved.
pub fn stacking_order(notes: &[Note]) -> Vec<&Note> {
    let (dragging, resting): (Vec<&Note>, Vec<&Note>) =
        notes.iter().partition(|note| note.is_dragging);
    resting.into_iter().chain(dragging).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::BackgroundColor;
    use crate::store::NotesStore;

    fn board_with(ids: &[u64]) -> NotesStore {
        let mut store = NotesStore::new();
        for id in ids {
            store.dispatch(Action::Add(Note::new(
                NoteId(*id),
                format!("n{}", id),
                String::new(),
                BackgroundColor::LemonChiffon,
            )));
        }
        store
    }

    #[test]
    fn test_start_then_stop_moves_and_clears_flag() {
        let mut store = board_with(&[1, 2]);
        for action in start(NoteId(1)) {
            store.dispatch(action);
        }
        assert!(store.get(NoteId(1)).unwrap().is_dragging);

        for action in stop(NoteId(1), Position::new(10.0, 20.0)) {
            store.dispatch(action);
        }
        let note = store.get(NoteId(1)).unwrap();
        assert_eq!(note.position, Position::new(10.0, 20.0));
        assert!(!note.is_dragging);
        assert_eq!(store.get(NoteId(2)).unwrap().position, Position::ORIGIN);
    }

    #[test]
    fn test_stop_orders_position_before_flag() {
        let actions = stop(NoteId(3), Position::new(1.0, 2.0));
        assert!(matches!(actions[0], Action::UpdatePosition { .. }));
        assert!(matches!(
            actions[1],
            Action::SetDragging {
                is_dragging: false,
                ..
            }
        ));
    }

    #[test]
    fn test_stacking_order_lifts_dragged_note() {
        let mut store = board_with(&[1, 2, 3]);
        for action in start(NoteId(1)) {
            store.dispatch(action);
        }
        let order: Vec<_> = stacking_order(store.notes()).iter().map(|n| n.id).collect();
        assert_eq!(order, vec![NoteId(2), NoteId(3), NoteId(1)]);
    }

    #[test]
    fn test_stacking_order_without_drag_is_collection_order() {
        let store = board_with(&[5, 3, 9]);
        let order: Vec<_> = stacking_order(store.notes()).iter().map(|n| n.id).collect();
        assert_eq!(order, vec![NoteId(5), NoteId(3), NoteId(9)]);
    }

    #[test]
    fn test_drag_of_unknown_note_changes_nothing() {
        let mut store = board_with(&[1]);
        let before = store.notes().to_vec();
        for action in start(NoteId(8))
            .into_iter()
            .chain(stop(NoteId(8), Position::new(4.0, 4.0)))
        {
            store.dispatch(action);
        }
        assert_eq!(store.notes(), &before[..]);
    }
}
