//! Event publishing/subscription abstraction (mechanics only).
//!
//! The bus is the seam between the storefront core and anything that wants
//! to observe mutations (the notification wiring, a presentation layer, a
//! test). It is intentionally **lightweight**:
//!
//! - **Transport-agnostic**: the trait makes no assumptions beyond
//!   publish/subscribe; the in-memory implementation is the only one this
//!   core ships.
//! - **Broadcast semantics**: each subscriber gets a copy of every event
//!   published after it subscribed.
//! - **No persistence**: the bus distributes events, it does not store them.
//!   Stores are the source of truth for current state.
//!
//! Because all storefront mutation is single-threaded, subscribers observe
//! events in exactly the order mutations were applied.

use std::sync::Arc;
use std::sync::mpsc::Receiver;

/// A subscription to an event stream.
///
/// Each subscription gets a copy of all events published to the bus after it
/// was created. The storefront drains its own subscription synchronously
/// after each mutation, so `try_recv` is the primary access path; `recv`
/// exists for consumers that run on their own thread.
#[derive(Debug)]
pub struct Subscription<M> {
    receiver: Receiver<M>,
}

impl<M> Subscription<M> {
    pub fn new(receiver: Receiver<M>) -> Self {
        Self { receiver }
    }

    /// Block until the next message is available.
    pub fn recv(&self) -> Result<M, std::sync::mpsc::RecvError> {
        self.receiver.recv()
    }

    /// Try to receive a message without blocking.
    pub fn try_recv(&self) -> Result<M, std::sync::mpsc::TryRecvError> {
        self.receiver.try_recv()
    }

    /// Drain every message currently queued, in publish order.
    pub fn drain(&self) -> Vec<M> {
        let mut out = Vec::new();
        while let Ok(message) = self.try_recv() {
            out.push(message);
        }
        out
    }
}

/// Domain-agnostic event bus (pub/sub abstraction).
///
/// `publish()` can fail (e.g. a poisoned subscriber list); failures are
/// surfaced to the caller. Delivery to individual subscribers is
/// best-effort: a dropped subscriber is pruned, not an error.
pub trait EventBus<M>: Send + Sync {
    type Error: core::fmt::Debug + Send + Sync + 'static;

    fn publish(&self, message: M) -> Result<(), Self::Error>;

    fn subscribe(&self) -> Subscription<M>;
}

impl<M, B> EventBus<M> for Arc<B>
where
    B: EventBus<M> + ?Sized,
{
    type Error = B::Error;

    fn publish(&self, message: M) -> Result<(), Self::Error> {
        (**self).publish(message)
    }

    fn subscribe(&self) -> Subscription<M> {
        (**self).subscribe()
    }
}
