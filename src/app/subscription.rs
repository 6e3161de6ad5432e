// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Routes native keyboard, mouse and window events to the workbench and
//! drives the timers for toast expiry and autosave.

use super::Message;
use crate::ui::notifications::NotificationMessage;
use crate::ui::workbench::{self, shortcuts};
use iced::{event, mouse, time, window, Subscription};
use std::time::Duration;

const TOAST_TICK: Duration = Duration::from_millis(100);

/// Routes global events.
///
/// Shortcuts are matched whether or not a widget captured the key press,
/// so they fire even while a text field has focus. Pointer moves and releases
/// feed the drag tracking of the tree viewport; the press that starts a drag
/// comes from the tree canvas itself.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, window_id| match event {
        event::Event::Window(window::Event::CloseRequested) => {
            Some(Message::WindowCloseRequested(window_id))
        }
        event::Event::Keyboard(keyboard_event) => shortcuts::from_event(&keyboard_event)
            .map(|shortcut| Message::Workbench(workbench::Message::Shortcut(shortcut))),
        event::Event::Mouse(mouse_event) => pointer_message(mouse_event).map(Message::Workbench),
        _ => None,
    })
}

fn pointer_message(event: mouse::Event) -> Option<workbench::Message> {
    match event {
        mouse::Event::CursorMoved { position } => Some(workbench::Message::PointerMoved(position)),
        mouse::Event::ButtonReleased(mouse::Button::Left) => {
            Some(workbench::Message::PointerReleased)
        }
        mouse::Event::CursorLeft => Some(workbench::Message::PointerLeft),
        _ => None,
    }
}

/// Ticks while a toast is visible so it can expire.
pub fn create_tick_subscription(has_notification: bool) -> Subscription<Message> {
    if has_notification {
        time::every(TOAST_TICK)
            .map(|_| Message::Workbench(workbench::Message::Notification(NotificationMessage::Tick)))
    } else {
        Subscription::none()
    }
}

/// Saves the input every `interval`.
pub fn create_autosave_subscription(interval: Duration) -> Subscription<Message> {
    time::every(interval).map(|_| Message::Workbench(workbench::Message::AutosaveTick))
}
