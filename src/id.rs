//! Note id allocation.
//!
//! Ids are derived from the wall clock in milliseconds, but never repeat:
//! when two notes are created within the same millisecond (or the clock
//! steps backwards) the next id is bumped past the previous one.

use chrono::Utc;

use crate::entity::NoteId;

#[derive(Debug, Default, Clone)]
pub struct IdGenerator {
    last: Option<u64>,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate an id from the current time.
    pub fn next_id(&mut self) -> NoteId {
        self.next_at(Utc::now().timestamp_millis())
    }

    /// Allocate an id as if the clock read `now_ms`.
    pub fn next_at(&mut self, now_ms: i64) -> NoteId {
        let now = u64::try_from(now_ms).unwrap_or(0);
        let id = match self.last {
            Some(last) if now <= last => last + 1,
            _ => now,
        };
        self.last = Some(id);
        NoteId(id)
    }
}
