//! User-facing notification capability.

use serde::{Deserialize, Serialize};
use strum::Display;

/// Outcome category of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum NotificationKind {
    Success,
    Info,
    Error,
}

/// A notification emitted by a use case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn new(kind: NotificationKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Fire-and-forget sink for user-facing notifications.
///
/// Implementations must not block and must not fail; a notification that
/// cannot be delivered is dropped.
pub trait NotificationSink: Send + Sync {
    fn notify(&self, notification: Notification);

    fn success(&self, message: &str) {
        self.notify(Notification::new(NotificationKind::Success, message));
    }

    fn info(&self, message: &str) {
        self.notify(Notification::new(NotificationKind::Info, message));
    }

    fn error(&self, message: &str) {
        self.notify(Notification::new(NotificationKind::Error, message));
    }
}
