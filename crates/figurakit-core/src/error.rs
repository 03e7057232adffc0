//! Error handling for Figurakit
//!
//! Nothing in the kernel is fatal at runtime: conversions are total,
//! out-of-range transform parameters degrade to skipped stages, and a
//! missed hit test is not an error. The only fallible surface is shape
//! construction, which must reject descriptors that would leave an
//! invalid geometry in the scene.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Shape construction error type
///
/// A constructed shape is always valid; these errors are raised at the
/// construction boundary only.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShapeError {
    /// A polygon needs at least three vertices
    #[error("Polygon needs at least 3 vertices, got {count}")]
    TooFewVertices {
        /// The number of vertices supplied.
        count: usize,
    },

    /// A flat coordinate buffer must hold (x, y) pairs
    #[error("Flat coordinate buffer has odd length {len}")]
    OddCoordinateBuffer {
        /// The length of the supplied buffer.
        len: usize,
    },

    /// A circle or regular polygon needs a positive radius
    #[error("Radius must be positive, got {radius}")]
    NonPositiveRadius {
        /// The radius that was supplied.
        radius: f64,
    },
}

/// Result type for shape construction
pub type Result<T> = std::result::Result<T, ShapeError>;
