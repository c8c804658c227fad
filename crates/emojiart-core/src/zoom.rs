//! Zoom scale tracking for pinch/magnification gestures.

use serde::{Deserialize, Serialize};

/// Zoom scale of the canvas view.
///
/// The effective scale is the committed (steady-state) scale multiplied by
/// the factor of a magnification gesture still in progress. No bounds are
/// enforced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomScale {
    /// Scale committed by finished gestures.
    pub steady_state: f64,
    /// Factor of the gesture in progress (1 when idle).
    pub gesture: f64,
}

impl Default for ZoomScale {
    fn default() -> Self {
        Self {
            steady_state: 1.0,
            gesture: 1.0,
        }
    }
}

impl ZoomScale {
    /// Create a zoom scale at 100%.
    pub fn new() -> Self {
        Self::default()
    }

    /// The effective scale.
    pub fn current(&self) -> f64 {
        self.steady_state * self.gesture
    }

    /// Record the latest factor reported by an ongoing gesture.
    pub fn update_gesture(&mut self, scale: f64) {
        self.gesture = scale;
    }

    /// Commit a finished gesture and return the new effective scale.
    pub fn end_gesture(&mut self, scale: f64) -> f64 {
        self.steady_state *= scale;
        self.gesture = 1.0;
        self.current()
    }

    /// Drop an in-progress gesture without committing it.
    pub fn cancel_gesture(&mut self) {
        self.gesture = 1.0;
    }
}
