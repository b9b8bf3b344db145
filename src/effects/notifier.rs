//! Notification delivery seam.

use crate::domain::{Notification, NotificationKind};
use std::cell::RefCell;
use std::rc::Rc;

/// Fire-and-forget notification sink.
pub trait Notifier {
    /// Delivers a notification. Implementations must not panic.
    fn notify(&self, notification: Notification);
}

/// Writes notifications to the tracing pipeline.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        match notification.kind {
            NotificationKind::Error => tracing::warn!(
                title = %notification.title,
                message = %notification.message,
                "notification"
            ),
            NotificationKind::Info | NotificationKind::Success => tracing::info!(
                kind = ?notification.kind,
                title = %notification.title,
                message = %notification.message,
                "notification"
            ),
        }
    }
}

/// Keeps every delivered notification in memory.
///
/// Clones share the same buffer, so one handle can be given to a store while
/// another is kept for inspection.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    delivered: Rc<RefCell<Vec<Notification>>>,
}

impl RecordingNotifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything delivered so far, oldest first.
    #[must_use]
    pub fn delivered(&self) -> Vec<Notification> {
        self.delivered.borrow().clone()
    }

    /// Removes and returns everything delivered so far.
    pub fn drain(&self) -> Vec<Notification> {
        self.delivered.borrow_mut().drain(..).collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.delivered.borrow_mut().push(notification);
    }
}
