//! Notification and live-region sinks.
//!
//! The page surfaces outcomes through two injected collaborators: a
//! notifier for the toast stack and an announcer for the screen-reader
//! live region. Implementations decide how to render; the core only
//! produces messages.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Mutex;

/// Visual category of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Info,
    Success,
    Warning,
    Error,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Toast notification sink.
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str, kind: NotificationKind);
}

/// Screen-reader live-region sink, fired on filter and theme changes.
pub trait Announcer: Send + Sync {
    fn announce(&self, message: &str);
}

/// A sink that records everything it receives.
///
/// Used by tests and by headless wiring where no toast surface exists.
#[derive(Debug, Default)]
pub struct BufferedNotifier {
    notifications: Mutex<Vec<(String, NotificationKind)>>,
    announcements: Mutex<Vec<String>>,
}

impl BufferedNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything notified so far, in order.
    pub fn notifications(&self) -> Vec<(String, NotificationKind)> {
        self.notifications
            .lock()
            .expect("notifier lock poisoned")
            .clone()
    }

    /// Everything announced so far, in order.
    pub fn announcements(&self) -> Vec<String> {
        self.announcements
            .lock()
            .expect("notifier lock poisoned")
            .clone()
    }

    /// The most recent notification, if any.
    pub fn last_notification(&self) -> Option<(String, NotificationKind)> {
        self.notifications
            .lock()
            .expect("notifier lock poisoned")
            .last()
            .cloned()
    }
}

impl Notifier for BufferedNotifier {
    fn notify(&self, message: &str, kind: NotificationKind) {
        self.notifications
            .lock()
            .expect("notifier lock poisoned")
            .push((message.to_string(), kind));
    }
}

impl Announcer for BufferedNotifier {
    fn announce(&self, message: &str) {
        self.announcements
            .lock()
            .expect("notifier lock poisoned")
            .push(message.to_string());
    }
}
