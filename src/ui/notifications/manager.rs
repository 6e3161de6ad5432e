// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` owns a single toast slot. A new notification replaces
//! whatever is showing and restarts the expiry window.

use super::notification::{Notification, NotificationId};
use std::time::Instant;

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific notification by ID.
    Dismiss(NotificationId),
    /// Tick for checking the expiry timer.
    Tick,
}

/// Holds the currently visible notification, if any.
#[derive(Debug, Default)]
pub struct Manager {
    current: Option<Notification>,
}

impl Manager {
    /// Creates a new empty notification manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows `notification`, replacing the current one.
    pub fn push(&mut self, notification: Notification) {
        tracing::debug!(
            severity = ?notification.severity(),
            "notification: {}",
            notification.message()
        );
        self.current = Some(notification);
    }

    /// Dismisses the notification with `id`.
    ///
    /// Returns `true` if it was the visible one. An id from a replaced
    /// notification is ignored.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        if self.current.as_ref().map(Notification::id) == Some(id) {
            self.current = None;
            return true;
        }
        false
    }

    /// Hides the current notification once it has expired.
    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    /// Same as [`Manager::tick`] with an explicit clock reading.
    pub fn tick_at(&mut self, now: Instant) {
        if self
            .current
            .as_ref()
            .is_some_and(|notification| notification.is_expired_at(now))
        {
            self.current = None;
        }
    }

    /// Handles a notification message.
    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
            Message::Tick => self.tick(),
        }
    }

    /// Returns the visible notification.
    #[must_use]
    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    #[must_use]
    pub fn has_notification(&self) -> bool {
        self.current.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::Severity;
    use std::time::Duration;

    #[test]
    fn new_manager_is_empty() {
        let manager = Manager::new();
        assert!(!manager.has_notification());
        assert!(manager.current().is_none());
    }

    #[test]
    fn push_replaces_the_visible_notification() {
        let mut manager = Manager::new();
        manager.push(Notification::success("first"));
        manager.push(Notification::error("second"));

        let current = manager.current().expect("visible");
        assert_eq!(current.message(), "second");
        assert_eq!(current.severity(), Severity::Error);
    }

    #[test]
    fn tick_hides_after_expiry() {
        let start = Instant::now();
        let mut manager = Manager::new();
        manager.push(Notification::new_at(Severity::Info, "hello", start));

        manager.tick_at(start + Duration::from_secs(2));
        assert!(manager.has_notification());

        manager.tick_at(start + Duration::from_secs(3));
        assert!(!manager.has_notification());
    }

    #[test]
    fn replacement_restarts_the_window() {
        let start = Instant::now();
        let mut manager = Manager::new();
        manager.push(Notification::new_at(Severity::Info, "old", start));
        manager.push(Notification::new_at(
            Severity::Info,
            "new",
            start + Duration::from_secs(2),
        ));

        manager.tick_at(start + Duration::from_secs(4));
        assert_eq!(manager.current().map(Notification::message), Some("new"));

        manager.tick_at(start + Duration::from_secs(5));
        assert!(!manager.has_notification());
    }

    #[test]
    fn dismiss_ignores_stale_ids() {
        let mut manager = Manager::new();
        let old = Notification::info("old");
        let old_id = old.id();
        manager.push(old);
        let new = Notification::info("new");
        let new_id = new.id();
        manager.push(new);

        assert!(!manager.dismiss(old_id));
        assert!(manager.has_notification());
        assert!(manager.dismiss(new_id));
        assert!(!manager.has_notification());
    }

    #[test]
    fn handle_message_dismisses() {
        let mut manager = Manager::new();
        let n = Notification::success("done");
        let id = n.id();
        manager.push(n);

        manager.handle_message(&Message::Dismiss(id));
        assert!(!manager.has_notification());
    }
}
