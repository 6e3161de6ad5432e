// SPDX-License-Identifier: MPL-2.0
//! Drag state management
//!
//! Handles grab-and-drag panning of the tree image. The anchor is the
//! pointer position minus the pan at press time, so the image point under
//! the pointer stays under it while dragging.

use iced::{Point, Vector};

/// Manages grab-and-drag state
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragState {
    anchor: Option<Point>,
}

impl DragState {
    /// Starts a drag at `pointer` while the image is panned by `pan`.
    pub fn start(&mut self, pointer: Point, pan: Vector) {
        self.anchor = Some(pointer - pan);
    }

    /// Stops the drag operation
    pub fn stop(&mut self) {
        self.anchor = None;
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.anchor.is_some()
    }

    /// Pan that keeps the anchor under `pointer`, or `None` when idle.
    #[must_use]
    pub fn pan_for(&self, pointer: Point) -> Option<Vector> {
        self.anchor.map(|anchor| pointer - anchor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_drag_state_is_not_dragging() {
        let state = DragState::default();
        assert!(!state.is_dragging());
        assert!(state.pan_for(Point::new(10.0, 10.0)).is_none());
    }

    #[test]
    fn start_records_anchor_relative_to_pan() {
        let mut state = DragState::default();
        state.start(Point::new(100.0, 50.0), Vector::new(20.0, 10.0));

        assert!(state.is_dragging());
        // Pointer still at the press position: pan is unchanged.
        assert_eq!(
            state.pan_for(Point::new(100.0, 50.0)),
            Some(Vector::new(20.0, 10.0))
        );
    }

    #[test]
    fn stop_drag_clears_state() {
        let mut state = DragState::default();
        state.start(Point::new(100.0, 50.0), Vector::new(20.0, 10.0));
        state.stop();

        assert!(!state.is_dragging());
        assert!(state.pan_for(Point::new(0.0, 0.0)).is_none());
    }

    #[test]
    fn pan_follows_pointer() {
        let mut state = DragState::default();
        state.start(Point::new(200.0, 150.0), Vector::new(50.0, 30.0));

        // Moved left/up by 20 pixels; pan follows.
        let pan = state.pan_for(Point::new(180.0, 130.0));
        assert_eq!(pan, Some(Vector::new(30.0, 10.0)));
    }
}
