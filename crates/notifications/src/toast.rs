use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use techstore_core::EntityId;

/// Toast identifier.
///
/// Generated fresh at enqueue time and never reused, so a stale handle held
/// by the presentation layer can at worst dismiss nothing.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ToastId(pub EntityId);

impl ToastId {
    pub fn new(id: EntityId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for ToastId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Toast severity, which drives icon and color in the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
    Info,
}

/// A transient user-facing status message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
    pub id: ToastId,
    pub message: String,
    pub severity: Severity,
    /// When the toast self-removes; `None` means it stays until dismissed.
    pub expires_at: Option<DateTime<Utc>>,
}
