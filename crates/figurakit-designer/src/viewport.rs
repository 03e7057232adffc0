//! Viewport and coordinate transformation.
//!
//! Handles conversion from pixel coordinates (screen space) to the
//! normalized device coordinates shapes live in, so the shell can feed
//! raw cursor positions straight into hit testing.

use crate::model::Point;

/// Window-to-NDC mapping for the current window size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    width: f64,
    height: f64,
}

impl Viewport {
    /// Creates a viewport for the given window dimensions in pixels.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Gets the window width in pixels.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Gets the window height in pixels.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Sets the window dimensions (typically called on resize).
    pub fn set_window_size(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    /// Maps a pixel position to NDC: `(0, 0)` at the top-left of the
    /// window becomes `(-1, 1)`, the bottom-right corner `(1, -1)`.
    pub fn to_ndc(&self, px: f64, py: f64) -> Point {
        Point::new(
            (px / self.width) * 2.0 - 1.0,
            1.0 - (py / self.height) * 2.0,
        )
    }
}
