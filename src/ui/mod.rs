// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Follows the Elm-style "state down, messages up" pattern: the
//! [`workbench`] owns all screen state and reports side effects back to the
//! application instead of performing them.
//!
//! # Shared Infrastructure
//!
//! - [`state`] - Viewport state (zoom, pan, drag)
//! - [`log_panel`] - Timestamped build log
//! - [`preview`] - Table preview of the entered data
//! - [`notifications`] - Toast notification for user feedback
//! - [`styles`] - Centralized styling (buttons, containers, tooltips)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`widgets`] - Custom widgets (shortcut blocking for text fields)

pub mod design_tokens;
pub mod log_panel;
pub mod notifications;
pub mod preview;
pub mod state;
pub mod styles;
pub mod theming;
pub mod widgets;
pub mod workbench;
