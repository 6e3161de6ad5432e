// SPDX-License-Identifier: MPL-2.0
//! Custom widgets.

pub mod shortcut_blocking;

pub use shortcut_blocking::shortcut_blocking;
