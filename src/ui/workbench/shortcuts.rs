// SPDX-License-Identifier: MPL-2.0
//! Keyboard shortcuts of the workbench.
//!
//! All shortcuts use the Ctrl key (or Cmd on macOS). A key press matching
//! one of them is consumed and never reaches the text fields.
//!
//! The zoom shortcuts match the physical key so they work the same on every
//! keyboard layout.

use iced::keyboard::{
    self,
    key::{Code, Named, Physical},
    Key, Modifiers,
};

/// Actions reachable from the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    /// Ctrl+Enter
    Build,
    /// Ctrl+Shift+E
    LoadExample,
    /// Ctrl+=
    ZoomIn,
    /// Ctrl+-
    ZoomOut,
    /// Ctrl+0
    ResetZoom,
}

/// Maps a key press to its shortcut.
#[must_use]
pub fn from_key(key: &Key, physical_key: Physical, modifiers: Modifiers) -> Option<Shortcut> {
    if !(modifiers.command() || modifiers.control()) || modifiers.alt() {
        return None;
    }

    match key {
        Key::Named(Named::Enter) => return Some(Shortcut::Build),
        Key::Character(c) if modifiers.shift() && c.eq_ignore_ascii_case("e") => {
            return Some(Shortcut::LoadExample);
        }
        _ => {}
    }

    match physical_key {
        Physical::Code(code) => zoom_from_code(code),
        // Synthetic events carry no key code; fall back to the character.
        Physical::Unidentified(_) => match key {
            Key::Character(c) => match c.as_str() {
                "=" | "+" => Some(Shortcut::ZoomIn),
                "-" => Some(Shortcut::ZoomOut),
                "0" => Some(Shortcut::ResetZoom),
                _ => None,
            },
            _ => None,
        },
    }
}

fn zoom_from_code(code: Code) -> Option<Shortcut> {
    match code {
        Code::Equal => Some(Shortcut::ZoomIn),
        Code::Minus => Some(Shortcut::ZoomOut),
        Code::Digit0 => Some(Shortcut::ResetZoom),
        _ => None,
    }
}

/// Maps a raw keyboard event to its shortcut. Only key presses match.
#[must_use]
pub fn from_event(event: &keyboard::Event) -> Option<Shortcut> {
    match event {
        keyboard::Event::KeyPressed {
            key,
            physical_key,
            modifiers,
            ..
        } => from_key(key, *physical_key, *modifiers),
        _ => None,
    }
}
