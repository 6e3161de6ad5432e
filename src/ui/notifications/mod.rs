// SPDX-License-Identifier: MPL-2.0
//! Toast notification for short-lived user feedback.
//!
//! A single slot is shown in the bottom-right corner. Each new notification
//! replaces the previous one; every toast hides itself after three seconds
//! or when its close button is pressed.
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::notifications::{Manager, Notification, Toast};
//!
//! let mut manager = Manager::new();
//! manager.push(Notification::success("Decision tree built successfully!"));
//!
//! let overlay = Toast::view_overlay(&manager).map(Message::Notification);
//! ```

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
