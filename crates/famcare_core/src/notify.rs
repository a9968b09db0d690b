//! User-facing notifications emitted by core operations.
//!
//! # Responsibility
//! - Describe toast content (title, description, severity) without presenting it.
//! - Provide the sink seam consumed by the external toast presenter.
//!
//! # Invariants
//! - Every commit emits exactly one notification, success or failure.
//! - Queue access never panics; a poisoned lock is recovered.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use uuid::Uuid;

pub const SUCCESS_TITLE: &str = "Success";
pub const ERROR_TITLE: &str = "Error";

/// Toast variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Info,
    Destructive,
}

/// One toast message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Presenter-side handle for dismissing this toast.
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

impl Notification {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(Severity::Info, title, description)
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(Severity::Destructive, title, description)
    }

    fn new(severity: Severity, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: description.into(),
            severity,
        }
    }

    pub fn is_destructive(&self) -> bool {
        self.severity == Severity::Destructive
    }
}

/// Receiver of notifications, implemented by whatever presents toasts.
pub trait NotificationSink {
    fn notify(&self, notification: Notification);
}

impl<S: NotificationSink + ?Sized> NotificationSink for &S {
    fn notify(&self, notification: Notification) {
        (**self).notify(notification);
    }
}

/// Shared FIFO of pending notifications.
///
/// Clones share the same queue, so every screen of a session can push into
/// one place that the UI drains after each action.
#[derive(Debug, Clone, Default)]
pub struct NotificationQueue {
    inner: Arc<Mutex<VecDeque<Notification>>>,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes and returns all pending notifications, oldest first.
    pub fn drain(&self) -> Vec<Notification> {
        self.lock().drain(..).collect()
    }

    /// Most recent pending notification, if any.
    pub fn latest(&self) -> Option<Notification> {
        self.lock().back().cloned()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, VecDeque<Notification>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl NotificationSink for NotificationQueue {
    fn notify(&self, notification: Notification) {
        self.lock().push_back(notification);
    }
}

#[cfg(test)]
mod tests {
    use super::{Notification, NotificationQueue, NotificationSink, Severity};

    #[test]
    fn clones_share_one_queue() {
        let queue = NotificationQueue::new();
        let handle = queue.clone();
        handle.notify(Notification::info("Success", "first"));
        handle.notify(Notification::destructive("Error", "second"));

        assert_eq!(queue.len(), 2);
        assert_eq!(queue.latest().map(|n| n.severity), Some(Severity::Destructive));

        let drained = queue.drain();
        assert_eq!(drained[0].description, "first");
        assert!(drained[1].is_destructive());
        assert!(handle.is_empty());
    }

    #[test]
    fn notification_ids_are_unique() {
        let a = Notification::info("t", "d");
        let b = Notification::info("t", "d");
        assert_ne!(a.id, b.id);
    }
}
