//! Toast notifications for the storefront.
//!
//! An insertion-ordered queue of transient user-facing messages. Toasts
//! either live until explicitly dismissed or carry a duration, in which case
//! the queue's own timer guarantees removal once the duration elapses.

pub mod queue;
pub mod toast;

pub use queue::NotificationQueue;
pub use toast::{Severity, Toast, ToastId};
