// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.

// ==========================================================================
// Zoom Defaults
// ==========================================================================

/// Zoom factor of the identity transform.
pub const DEFAULT_ZOOM_FACTOR: f32 = 1.0;

/// Minimum allowed zoom factor.
pub const MIN_ZOOM_FACTOR: f32 = 0.5;

/// Maximum allowed zoom factor.
pub const MAX_ZOOM_FACTOR: f32 = 3.0;

/// Zoom factor change per zoom in/out step.
pub const ZOOM_STEP: f32 = 0.1;

// ==========================================================================
// Server Defaults
// ==========================================================================

/// Base URL of the tree building service.
pub const DEFAULT_SERVER_URL: &str = "http://localhost:5001";

/// Path of the build endpoint, relative to the base URL.
pub const BUILD_ENDPOINT_PATH: &str = "/build_tree";

/// Default upper bound for a single build request (in seconds).
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;

/// Minimum request timeout (in seconds).
pub const MIN_REQUEST_TIMEOUT_SECS: u64 = 5;

/// Maximum request timeout (in seconds).
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 600;

// ==========================================================================
// Persistence Defaults
// ==========================================================================

/// Default interval between input autosaves (in seconds).
pub const DEFAULT_AUTOSAVE_INTERVAL_SECS: u64 = 30;

/// Minimum autosave interval (in seconds).
pub const MIN_AUTOSAVE_INTERVAL_SECS: u64 = 5;

/// Maximum autosave interval (in seconds).
pub const MAX_AUTOSAVE_INTERVAL_SECS: u64 = 3600;

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// How long a toast stays visible (in seconds).
pub const TOAST_DURATION_SECS: u64 = 3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zoom_bounds_contain_identity() {
        assert!(MIN_ZOOM_FACTOR < DEFAULT_ZOOM_FACTOR);
        assert!(DEFAULT_ZOOM_FACTOR < MAX_ZOOM_FACTOR);
        assert!(ZOOM_STEP > 0.0);
    }

    #[test]
    fn timeout_defaults_are_within_bounds() {
        assert!(DEFAULT_REQUEST_TIMEOUT_SECS >= MIN_REQUEST_TIMEOUT_SECS);
        assert!(DEFAULT_REQUEST_TIMEOUT_SECS <= MAX_REQUEST_TIMEOUT_SECS);
        assert!(DEFAULT_AUTOSAVE_INTERVAL_SECS >= MIN_AUTOSAVE_INTERVAL_SECS);
        assert!(DEFAULT_AUTOSAVE_INTERVAL_SECS <= MAX_AUTOSAVE_INTERVAL_SECS);
    }
}
