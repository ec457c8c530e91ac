//! `techstore-events` — event mechanics for the storefront core.
//!
//! Domain crates define their own event enums; this crate provides the
//! shared contracts (the [`Event`] trait, the [`EventBus`] pub/sub seam) and
//! the deterministic [`execute`] helper that runs a command through an
//! aggregate's decide/evolve lifecycle.

pub mod bus;
pub mod event;
pub mod handler;
pub mod in_memory;

pub use bus::{EventBus, Subscription};
pub use event::Event;
pub use handler::execute;
pub use in_memory::InMemoryEventBus;
