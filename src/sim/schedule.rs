//! Deferred effects
//!
//! Timed effects (rain ending, catcher size reverting) are queued against the
//! simulation clock and drained at the start of each tick. Every entry carries
//! the session it was scheduled in; bumping the session drops all pending
//! entries so nothing from a previous run can touch the next one.

use serde::{Deserialize, Serialize};

/// An effect that fires once its deadline passes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ScheduledEvent {
    /// Rain session is over
    EndRain,
    /// Big-board boost expired; restore the catcher width
    RevertSize { original_size: f32 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Entry {
    due_ms: u64,
    session: u32,
    event: ScheduledEvent,
}

/// Session-tagged queue of deferred effects
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    session: u32,
    /// Kept sorted by `due_ms`, insertion order among equal deadlines
    entries: Vec<Entry>,
}

impl Schedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current session id
    pub fn session(&self) -> u32 {
        self.session
    }

    /// Queue `event` to fire at `due_ms` in the current session
    pub fn schedule(&mut self, due_ms: u64, event: ScheduledEvent) {
        let at = self.entries.partition_point(|e| e.due_ms <= due_ms);
        self.entries.insert(
            at,
            Entry {
                due_ms,
                session: self.session,
                event,
            },
        );
    }

    /// Remove and return every pending event matching `pred`
    pub fn cancel_where<F>(&mut self, mut pred: F) -> Vec<ScheduledEvent>
    where
        F: FnMut(&ScheduledEvent) -> bool,
    {
        let mut removed = Vec::new();
        self.entries.retain(|e| {
            if pred(&e.event) {
                removed.push(e.event);
                false
            } else {
                true
            }
        });
        removed
    }

    /// Remove and return events due at or before `now_ms`, earliest first.
    /// Entries from earlier sessions are discarded.
    pub fn drain_due(&mut self, now_ms: u64) -> Vec<ScheduledEvent> {
        let split = self.entries.partition_point(|e| e.due_ms <= now_ms);
        let session = self.session;
        self.entries
            .drain(..split)
            .filter(|e| e.session == session)
            .map(|e| e.event)
            .collect()
    }

    /// Start a new session, dropping everything still pending
    pub fn new_session(&mut self) {
        self.session = self.session.wrapping_add(1);
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
