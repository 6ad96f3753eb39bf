use dashmap::DashMap;
use std::time::{Duration, Instant};

use super::SessionId;

/// Single-slot, single-read flash notifications, one slot per session.
///
/// A second `push` before the slot is read replaces the first message.
/// Slots nobody reads are removed by `evict_older_than`.
#[derive(Debug, Default)]
pub struct FlashMailbox {
    slots: DashMap<SessionId, (String, Instant)>,
}

impl FlashMailbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, session: SessionId, message: impl Into<String>) {
        self.slots.insert(session, (message.into(), Instant::now()));
    }

    /// Removes and returns the pending message, if any.
    pub fn take(&self, session: SessionId) -> Option<String> {
        self.slots.remove(&session).map(|(_, (message, _))| message)
    }

    pub fn pending(&self) -> usize {
        self.slots.len()
    }

    /// Drops every slot that has waited at least `ttl`. Returns how many went.
    pub fn evict_older_than(&self, ttl: Duration) -> usize {
        let before = self.slots.len();
        self.slots.retain(|_, (_, pushed_at)| pushed_at.elapsed() < ttl);
        before.saturating_sub(self.slots.len())
    }
}
