// SPDX-License-Identifier: MPL-2.0
//! Viewport state management
//!
//! Pan, zoom and drag over the tree image. The rendered transform is
//! derived in full from `(zoom, pan)` each time it is requested.

use super::drag::DragState;
use super::zoom::ZoomState;
use iced::{Point, Rectangle, Size, Vector};
use std::fmt;

/// Geometric transform of the tree image: translate by pan, then scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub translate: Vector,
    pub scale: f32,
}

impl Transform {
    /// Rectangle covered by an image of `image` size drawn inside `bounds`.
    ///
    /// The image is centered in the bounds, scaled around its center, then
    /// shifted by the pan.
    #[must_use]
    pub fn image_rect(&self, bounds: Size, image: Size) -> Rectangle {
        let width = image.width * self.scale;
        let height = image.height * self.scale;
        let center = Point::new(bounds.width / 2.0, bounds.height / 2.0) + self.translate;

        Rectangle {
            x: center.x - width / 2.0,
            y: center.y - height / 2.0,
            width,
            height,
        }
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "translate({}px, {}px) scale({})",
            self.translate.x, self.translate.y, self.scale
        )
    }
}

/// Manages pan, zoom, and drag state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewportState {
    pub zoom: ZoomState,
    pan: Vector,
    drag: DragState,
}

impl ViewportState {
    #[must_use]
    pub fn pan(&self) -> Vector {
        self.pan
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    pub fn zoom_in(&mut self) {
        self.zoom.zoom_in();
    }

    pub fn zoom_out(&mut self) {
        self.zoom.zoom_out();
    }

    /// Returns to zoom 1.0 and no pan. An active drag is cancelled.
    pub fn reset(&mut self) {
        self.zoom.reset();
        self.pan = Vector::ZERO;
        self.drag.stop();
    }

    /// Begins dragging from `pointer`.
    pub fn press(&mut self, pointer: Point) {
        self.drag.start(pointer, self.pan);
    }

    /// Follows the pointer while dragging. Returns true if the pan changed.
    pub fn move_to(&mut self, pointer: Point) -> bool {
        match self.drag.pan_for(pointer) {
            Some(pan) => {
                self.pan = pan;
                true
            }
            None => false,
        }
    }

    /// Ends any drag. Used for pointer release and pointer leaving the window.
    pub fn release(&mut self) {
        self.drag.stop();
    }

    #[must_use]
    pub fn transform(&self) -> Transform {
        Transform {
            translate: self.pan,
            scale: self.zoom.factor().value(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn default_viewport_is_identity() {
        let state = ViewportState::default();
        assert_eq!(state.pan(), Vector::ZERO);
        assert!(!state.is_dragging());
        assert_eq!(state.transform().to_string(), "translate(0px, 0px) scale(1)");
    }

    #[test]
    fn drag_moves_pan_with_pointer() {
        let mut state = ViewportState::default();
        state.press(Point::new(10.0, 10.0));
        assert!(state.move_to(Point::new(35.0, 5.0)));
        assert_eq!(state.pan(), Vector::new(25.0, -5.0));

        state.release();
        assert!(!state.move_to(Point::new(100.0, 100.0)));
        assert_eq!(state.pan(), Vector::new(25.0, -5.0));
    }

    #[test]
    fn second_drag_continues_from_current_pan() {
        let mut state = ViewportState::default();
        state.press(Point::new(0.0, 0.0));
        state.move_to(Point::new(10.0, 10.0));
        state.release();

        state.press(Point::new(50.0, 50.0));
        state.move_to(Point::new(60.0, 50.0));
        assert_eq!(state.pan(), Vector::new(20.0, 10.0));
    }

    #[test]
    fn reset_yields_identity_from_any_state() {
        let mut state = ViewportState::default();
        state.zoom_in();
        state.zoom_in();
        state.press(Point::new(0.0, 0.0));
        state.move_to(Point::new(-40.0, 12.0));

        state.reset();

        assert_abs_diff_eq!(state.zoom.factor().value(), 1.0);
        assert_eq!(state.pan(), Vector::ZERO);
        assert!(!state.is_dragging());
    }

    #[test]
    fn transform_string_has_translate_then_scale() {
        let mut state = ViewportState::default();
        state.press(Point::new(0.0, 0.0));
        state.move_to(Point::new(12.0, -3.0));
        for _ in 0..6 {
            state.zoom_out();
        }

        assert_eq!(
            state.transform().to_string(),
            "translate(12px, -3px) scale(0.5)"
        );
    }

    #[test]
    fn image_rect_centers_scales_and_shifts() {
        let transform = Transform {
            translate: Vector::new(10.0, -20.0),
            scale: 2.0,
        };
        let rect = transform.image_rect(Size::new(400.0, 300.0), Size::new(100.0, 50.0));

        assert_abs_diff_eq!(rect.width, 200.0);
        assert_abs_diff_eq!(rect.height, 100.0);
        assert_abs_diff_eq!(rect.x, 110.0);
        assert_abs_diff_eq!(rect.y, 80.0);
    }
}
