// SPDX-License-Identifier: MPL-2.0
//! Zoom state management
//!
//! Zoom is a scale factor applied to the tree image, stepped by a fixed
//! increment and always kept inside the configured bounds.

pub use crate::config::{DEFAULT_ZOOM_FACTOR, MAX_ZOOM_FACTOR, MIN_ZOOM_FACTOR, ZOOM_STEP};

/// Zoom factor, guaranteed to be within the valid range (0.5–3.0).
///
/// This type ensures that zoom values are always valid, eliminating
/// the need for manual clamping at usage sites.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomFactor(f32);

impl ZoomFactor {
    /// Creates a new zoom factor, clamping the value to the valid range.
    #[must_use]
    pub fn new(factor: f32) -> Self {
        Self(factor.clamp(MIN_ZOOM_FACTOR, MAX_ZOOM_FACTOR))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= MIN_ZOOM_FACTOR
    }

    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= MAX_ZOOM_FACTOR
    }

    #[must_use]
    pub fn zoom_in(self, step: f32) -> Self {
        Self::new(self.0 + step)
    }

    #[must_use]
    pub fn zoom_out(self, step: f32) -> Self {
        Self::new(self.0 - step)
    }
}

impl Default for ZoomFactor {
    fn default() -> Self {
        Self(DEFAULT_ZOOM_FACTOR)
    }
}

/// Current zoom of the tree image.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ZoomState {
    factor: ZoomFactor,
}

impl ZoomState {
    #[must_use]
    pub fn factor(&self) -> ZoomFactor {
        self.factor
    }

    /// Applies zoom in by one step
    pub fn zoom_in(&mut self) {
        self.factor = self.factor.zoom_in(ZOOM_STEP);
    }

    /// Applies zoom out by one step
    pub fn zoom_out(&mut self) {
        self.factor = self.factor.zoom_out(ZOOM_STEP);
    }

    /// Resets zoom to the identity factor
    pub fn reset(&mut self) {
        self.factor = ZoomFactor::default();
    }

    /// Zoom as a whole percentage for display, e.g. `"110%"`.
    #[must_use]
    pub fn percent_label(&self) -> String {
        format!("{}%", format_number(self.factor.value() * 100.0))
    }
}

/// Formats a number for display (removes unnecessary decimal places)
#[must_use]
pub fn format_number(value: f32) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    if rounded.fract().abs() < f32::EPSILON {
        #[allow(clippy::cast_possible_truncation)]
        let int_value = rounded as i32;
        format!("{int_value}")
    } else {
        format!("{rounded:.1}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn zoom_factor_clamps_to_range() {
        assert_eq!(ZoomFactor::new(10.0).value(), MAX_ZOOM_FACTOR);
        assert_eq!(ZoomFactor::new(0.0).value(), MIN_ZOOM_FACTOR);
        assert!(ZoomFactor::new(3.0).is_max());
        assert!(ZoomFactor::new(0.5).is_min());
    }

    #[test]
    fn zoom_in_out_step_by_a_tenth() {
        let mut state = ZoomState::default();
        state.zoom_in();
        assert_abs_diff_eq!(state.factor().value(), 1.1, epsilon = 1e-5);
        state.zoom_out();
        state.zoom_out();
        assert_abs_diff_eq!(state.factor().value(), 0.9, epsilon = 1e-5);
    }

    #[test]
    fn zoom_out_repeated_from_minimum_stays_at_minimum() {
        let mut state = ZoomState::default();
        for _ in 0..20 {
            state.zoom_out();
        }
        assert_eq!(state.factor().value(), MIN_ZOOM_FACTOR);
        state.zoom_out();
        assert_eq!(state.factor().value(), MIN_ZOOM_FACTOR);
    }

    #[test]
    fn zoom_in_repeated_from_maximum_stays_at_maximum() {
        let mut state = ZoomState::default();
        for _ in 0..40 {
            state.zoom_in();
        }
        assert_eq!(state.factor().value(), MAX_ZOOM_FACTOR);
        state.zoom_in();
        assert_eq!(state.factor().value(), MAX_ZOOM_FACTOR);
    }

    #[test]
    fn reset_returns_to_identity() {
        let mut state = ZoomState::default();
        state.zoom_in();
        state.zoom_in();
        state.reset();
        assert_eq!(state.factor().value(), DEFAULT_ZOOM_FACTOR);
    }

    #[test]
    fn percent_label_rounds_float_noise() {
        let mut state = ZoomState::default();
        for _ in 0..3 {
            state.zoom_in();
        }
        assert_eq!(state.percent_label(), "130%");
        assert_eq!(ZoomState::default().percent_label(), "100%");
    }
}
