//! User-facing notification channel

use std::sync::Mutex;

/// Receives human-readable messages meant for the user
pub trait Notifier: Send + Sync {
    fn show_error(&self, message: &str);
    fn show_warning(&self, message: &str);
}

/// Severity of a recorded notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Error,
    Warning,
}

/// A notification captured by [`RecordingNotifier`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

/// Keeps every notification in memory, for hosts that render them later
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    notifications: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far
    pub fn notifications(&self) -> Vec<Notification> {
        self.lock().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.messages(NotificationLevel::Error)
    }

    pub fn warnings(&self) -> Vec<String> {
        self.messages(NotificationLevel::Warning)
    }

    fn messages(&self, level: NotificationLevel) -> Vec<String> {
        self.lock()
            .iter()
            .filter(|n| n.level == level)
            .map(|n| n.message.clone())
            .collect()
    }

    fn record(&self, level: NotificationLevel, message: &str) {
        self.lock().push(Notification {
            level,
            message: message.to_string(),
        });
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Notification>> {
        // A poisoned list is still a valid list
        self.notifications
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Notifier for RecordingNotifier {
    fn show_error(&self, message: &str) {
        self.record(NotificationLevel::Error, message);
    }

    fn show_warning(&self, message: &str) {
        self.record(NotificationLevel::Warning, message);
    }
}
