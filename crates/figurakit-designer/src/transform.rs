//! Transform pipeline: per-figure placement from a shape snapshot.
//!
//! The editor's old matrix-stack application (push/rotate/scale/pop
//! around each draw call) is re-expressed here as one homogeneous
//! matrix product applied to the shape's local outline, so geometry is
//! decoupled from any rendering backend. The composition order is
//! fixed and non-commutative:
//!
//! 1. scale about the origin,
//! 2. rotate about the shape's pivot,
//! 3. shear about the shape's skew anchor,
//! 4. translate, last and unconditionally.
//!
//! Out-of-range parameters never abort a frame: the offending stage is
//! skipped on its own, the rest still apply, and the skip is reported
//! back on the returned placement.

use nalgebra::{Matrix3, Vector2, Vector3};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::model::{FigureShape, Point, Shape, VertexBuf};

/// Rotation values beyond a full turn either way are rejected.
pub const ROTATION_LIMIT_DEG: f64 = 360.0;

/// Bias coefficients beyond this shear the shape degenerate.
pub const BIAS_LIMIT: f64 = 1.0;

/// Per-figure transform parameters.
///
/// Setters upstream accept any float; range enforcement happens here,
/// per stage, when a placement is computed. Rotation is stored exactly
/// as given, never wrapped or clamped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransformState {
    /// Rotation about the shape pivot, in degrees.
    pub rotation: f64,
    pub scale_x: f64,
    pub scale_y: f64,
    pub translate_x: f64,
    pub translate_y: f64,
    /// Shear coefficients of the `[[1, bias_y], [bias_x, 1]]` matrix.
    pub bias_x: f64,
    pub bias_y: f64,
}

impl Default for TransformState {
    fn default() -> Self {
        Self {
            rotation: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
            translate_x: 0.0,
            translate_y: 0.0,
            bias_x: 0.0,
            bias_y: 0.0,
        }
    }
}

/// Diagnostic for a transform stage dropped from a placement.
#[derive(Error, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum StageSkipped {
    /// Rotation outside `[-360, 360]` degrees
    #[error("Rotation {degrees} degrees outside [-360, 360]; rotation stage skipped")]
    Rotation {
        /// The rejected rotation value.
        degrees: f64,
    },

    /// Bias outside `[-1, 1]` on either axis
    #[error("Bias ({bias_x}, {bias_y}) outside [-1, 1]; skew stage skipped")]
    Skew {
        /// The bias X coefficient at the time of the skip.
        bias_x: f64,
        /// The bias Y coefficient at the time of the skip.
        bias_y: f64,
    },
}

/// World-space outline of one figure for a single frame, plus any
/// stages that were skipped producing it.
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    pub vertices: VertexBuf,
    pub skipped: Vec<StageSkipped>,
}

impl Placement {
    /// True when every stage of the pipeline was applied.
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Computes the world-space placement for a shape under a transform
/// snapshot.
///
/// Stateless per invocation: the figure is never mutated and nothing
/// is carried between frames.
pub fn apply(shape: &Shape, state: &TransformState) -> Placement {
    let mut skipped = Vec::new();

    let scale = Matrix3::new(
        state.scale_x, 0.0, 0.0, //
        0.0, state.scale_y, 0.0, //
        0.0, 0.0, 1.0,
    );

    let rotate = if (-ROTATION_LIMIT_DEG..=ROTATION_LIMIT_DEG).contains(&state.rotation) {
        about(shape.pivot(), Matrix3::new_rotation(state.rotation.to_radians()))
    } else {
        warn!(rotation = state.rotation, "rotation out of range, stage skipped");
        skipped.push(StageSkipped::Rotation { degrees: state.rotation });
        Matrix3::identity()
    };

    let skew = if state.bias_x.abs() <= BIAS_LIMIT && state.bias_y.abs() <= BIAS_LIMIT {
        let shear = Matrix3::new(
            1.0, state.bias_y, 0.0, //
            state.bias_x, 1.0, 0.0, //
            0.0, 0.0, 1.0,
        );
        about(shape.skew_anchor(), shear)
    } else {
        warn!(
            bias_x = state.bias_x,
            bias_y = state.bias_y,
            "bias out of range, stage skipped"
        );
        skipped.push(StageSkipped::Skew {
            bias_x: state.bias_x,
            bias_y: state.bias_y,
        });
        Matrix3::identity()
    };

    let translate =
        Matrix3::new_translation(&Vector2::new(state.translate_x, state.translate_y));

    // Rightmost applies first: scale, rotate, skew, translate.
    let m = translate * skew * rotate * scale;

    let vertices = shape
        .local_vertices()
        .iter()
        .map(|v| {
            let w = m * Vector3::new(v.x, v.y, 1.0);
            Point::new(w.x, w.y)
        })
        .collect();

    Placement { vertices, skipped }
}

/// Conjugates a transform to act about an anchor point instead of the
/// origin.
fn about(anchor: Point, m: Matrix3<f64>) -> Matrix3<f64> {
    Matrix3::new_translation(&Vector2::new(anchor.x, anchor.y))
        * m
        * Matrix3::new_translation(&Vector2::new(-anchor.x, -anchor.y))
}
