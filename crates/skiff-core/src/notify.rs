//! Pending notification records.
//!
//! The platform notification layer captures at most one notification at cold
//! start. The bootstrap sequence consumes it at most once: the resolver
//! always clears the held record after inspecting it, so a record is never
//! replayed on a later call.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A notification-reply record queued by the platform notification layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PendingNotification {
    /// Opaque payload forwarded verbatim to the reply dispatcher.
    pub data: Value,
    /// Reply text entered by the user.
    pub text: String,
    /// Badge count carried by the notification.
    pub badge: i32,
    /// Whether the reply was completed. An in-flight record carries no
    /// actionable reply text and is discarded without dispatching.
    pub completed: bool,
}

/// Holds the notification captured at process cold start, if any.
#[derive(Debug, Default)]
pub struct NotificationCenter {
    pending: Option<PendingNotification>,
}

impl NotificationCenter {
    /// Create an empty center.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a notification, replacing any previous record.
    pub fn push(&mut self, notification: PendingNotification) {
        self.pending = Some(notification);
    }

    /// The queued record, if any. Non-destructive; use [`reset`](Self::reset)
    /// to clear.
    pub fn get(&self) -> Option<PendingNotification> {
        self.pending.clone()
    }

    /// Clear the held record.
    pub fn reset(&mut self) {
        self.pending = None;
    }
}
