//! Storefront facade: the in-process contract between the core stores and
//! the presentation layer.
//!
//! The presentation layer calls mutation methods and reads snapshots; it
//! never touches the catalog, cart or notification queue directly. All
//! mutation is single-threaded and synchronous — a read taken after any
//! mutation observes the new state.

pub mod countdown;
pub mod store;

pub use countdown::{Countdown, TimeRemaining};
pub use store::{CartSnapshot, Storefront, default_toast_duration};
