//! `techstore-scheduler` — deterministic timer mechanics.
//!
//! The storefront core is single-threaded and event-driven: nothing here
//! spawns threads or reads the wall clock. Owners drive time explicitly by
//! passing `now` into [`TimerQueue::fire_due`] / [`Ticker::poll`], which
//! makes every timer-dependent behavior reproducible in tests.
//!
//! Two primitives cover the core's temporal behavior:
//!
//! - [`TimerQueue`]: keyed one-shot timers with cancellation handles
//!   (toast auto-dismiss).
//! - [`Ticker`]: a repeating interval that skips missed periods
//!   (countdown recomputation).

pub mod ticker;
pub mod timer_queue;

pub use ticker::Ticker;
pub use timer_queue::{TimerHandle, TimerQueue};
