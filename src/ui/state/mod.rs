// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! Pan and zoom state for the tree image, kept separate from the widgets
//! that render it.

pub mod drag;
pub mod viewport;
pub mod zoom;

pub use drag::DragState;
pub use viewport::{Transform, ViewportState};
pub use zoom::{ZoomFactor, ZoomState};
