//! The notification queue.

use chrono::{DateTime, Duration, Utc};

use techstore_core::EntityId;
use techstore_scheduler::{TimerHandle, TimerQueue};

use crate::toast::{Severity, Toast, ToastId};

/// A queued toast plus the handle of its expiry timer.
///
/// The handle lives and dies with the toast: dismissal cancels it, so a
/// timer can never fire for a toast that is already gone.
#[derive(Debug)]
struct ToastRecord {
    toast: Toast,
    expiry: Option<TimerHandle>,
}

/// Insertion-ordered queue of toasts with timed expiry.
///
/// Single-threaded like the rest of the core: expiry happens when the owner
/// pumps [`NotificationQueue::expire_due`] with the current time, not on a
/// background thread. Dismissal and timed expiry are idempotent with respect
/// to each other — whichever fires first wins and the other is a safe no-op.
#[derive(Debug)]
pub struct NotificationQueue {
    records: Vec<ToastRecord>,
    timers: TimerQueue<ToastId>,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            timers: TimerQueue::new(),
        }
    }

    /// Append a toast and return its freshly generated id.
    ///
    /// With a `duration`, the toast self-removes once `now + duration` has
    /// been reached (via [`NotificationQueue::expire_due`]); without one it
    /// stays until dismissed.
    pub fn enqueue(
        &mut self,
        message: impl Into<String>,
        severity: Severity,
        duration: Option<Duration>,
        now: DateTime<Utc>,
    ) -> ToastId {
        let id = ToastId::new(EntityId::new());
        let message = message.into();
        let expires_at = duration.map(|d| now + d);
        let expiry = expires_at.map(|deadline| self.timers.schedule(id, deadline));

        tracing::debug!(toast_id = %id, %message, "toast enqueued");

        self.records.push(ToastRecord {
            toast: Toast {
                id,
                message,
                severity,
                expires_at,
            },
            expiry,
        });

        id
    }

    /// Remove a toast and cancel its pending expiry timer.
    ///
    /// Dismissing an unknown (or already expired) id is a no-op; returns
    /// whether a toast was actually removed.
    pub fn dismiss(&mut self, id: ToastId) -> bool {
        let Some(pos) = self.records.iter().position(|r| r.toast.id == id) else {
            return false;
        };

        let record = self.records.remove(pos);
        if let Some(handle) = record.expiry {
            self.timers.cancel(handle);
        }

        tracing::debug!(toast_id = %id, "toast dismissed");
        true
    }

    /// Remove every toast whose duration has elapsed at `now`.
    ///
    /// Returns the removed ids in deadline order. Toasts that were already
    /// dismissed cancelled their timers, so they cannot come back here.
    pub fn expire_due(&mut self, now: DateTime<Utc>) -> Vec<ToastId> {
        let due = self.timers.fire_due(now);
        let mut expired = Vec::with_capacity(due.len());

        for id in due {
            if let Some(pos) = self.records.iter().position(|r| r.toast.id == id) {
                self.records.remove(pos);
                tracing::debug!(toast_id = %id, "toast expired");
                expired.push(id);
            }
        }

        expired
    }

    /// Current toasts in enqueue order.
    pub fn toasts(&self) -> Vec<&Toast> {
        self.records.iter().map(|r| &r.toast).collect()
    }

    pub fn contains(&self, id: ToastId) -> bool {
        self.records.iter().any(|r| r.toast.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Earliest pending expiry, if any toast carries a duration.
    pub fn next_expiry(&self) -> Option<DateTime<Utc>> {
        self.timers.next_deadline()
    }
}

impl Default for NotificationQueue {
    fn default() -> Self {
        Self::new()
    }
}
