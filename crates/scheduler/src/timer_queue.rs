//! Keyed one-shot timers with cancellation.

use chrono::{DateTime, Utc};

/// Handle to a scheduled timer.
///
/// Store the handle alongside the entity the timer affects; cancelling it on
/// dismissal/teardown guarantees the timer can never mutate state that is
/// logically dead. A handle identifies at most one pending timer — once
/// fired or cancelled it never fires again.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

/// One-shot timers keyed by an owner-chosen token.
///
/// `fire_due(now)` returns the keys of every timer whose deadline has
/// passed, in deadline order (ties resolve in registration order). The
/// owner maps keys back to the mutation the timer stands for. Collections
/// are expected to stay small; operations are O(n).
#[derive(Debug)]
pub struct TimerQueue<K> {
    entries: Vec<TimerEntry<K>>,
    next_handle: u64,
}

#[derive(Debug)]
struct TimerEntry<K> {
    handle: TimerHandle,
    deadline: DateTime<Utc>,
    key: K,
}

impl<K> TimerQueue<K> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_handle: 0,
        }
    }

    /// Schedule `key` to fire once `deadline` has been reached.
    pub fn schedule(&mut self, key: K, deadline: DateTime<Utc>) -> TimerHandle {
        let handle = TimerHandle(self.next_handle);
        self.next_handle += 1;
        self.entries.push(TimerEntry {
            handle,
            deadline,
            key,
        });
        handle
    }

    /// Cancel a pending timer. Returns `false` if it already fired or was
    /// already cancelled — both are safe to ignore.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.handle != handle);
        before != self.entries.len()
    }

    /// Whether the timer behind `handle` is still pending.
    pub fn is_scheduled(&self, handle: TimerHandle) -> bool {
        self.entries.iter().any(|e| e.handle == handle)
    }

    /// Remove and return the keys of all timers due at `now`, in deadline
    /// order (registration order for equal deadlines).
    pub fn fire_due(&mut self, now: DateTime<Utc>) -> Vec<K> {
        let mut due = Vec::new();
        let mut i = 0;
        while i < self.entries.len() {
            if self.entries[i].deadline <= now {
                due.push(self.entries.remove(i));
            } else {
                i += 1;
            }
        }

        due.sort_by(|a, b| a.deadline.cmp(&b.deadline).then(a.handle.0.cmp(&b.handle.0)));
        due.into_iter().map(|e| e.key).collect()
    }

    /// Earliest pending deadline, if any.
    pub fn next_deadline(&self) -> Option<DateTime<Utc>> {
        self.entries.iter().map(|e| e.deadline).min()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K> Default for TimerQueue<K> {
    fn default() -> Self {
        Self::new()
    }
}
