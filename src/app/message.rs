// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::workbench;
use iced::window;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Workbench(workbench::Message),
    /// Persist input, then close the window.
    WindowCloseRequested(window::Id),
}

/// Runtime flags passed from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Build server base URL, overriding the settings file.
    pub server_url: Option<String>,
}
