//! A figure: one shape, one canonical color, one transform state.

use serde::{Deserialize, Serialize};

use figurakit_core::color::Rgb;

use crate::model::Shape;
use crate::transform::{self, Placement, TransformState};

/// A shape placed in the scene with its color and transform.
///
/// Figures are created at scene initialization and mutated in place by
/// user interaction; there is no deletion path. The color is stored in
/// canonical RGB only — other color models are derived views, never
/// state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    id: u64,
    pub name: String,
    shape: Shape,
    color: Rgb,
    transform: TransformState,
}

impl Figure {
    pub(crate) fn new(id: u64, name: impl Into<String>, shape: Shape, color: Rgb) -> Self {
        Self {
            id,
            name: name.into(),
            shape,
            color,
            transform: TransformState::default(),
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    pub fn set_color(&mut self, color: Rgb) {
        self.color = color;
    }

    pub fn transform(&self) -> &TransformState {
        &self.transform
    }

    // The setters below accept any float. Range enforcement is the
    // pipeline's job: an out-of-range value skips its own stage at
    // placement time instead of being rejected here. There is no
    // derived state to invalidate since placements are recomputed from
    // scratch every call.

    pub fn set_rotation(&mut self, degrees: f64) {
        self.transform.rotation = degrees;
    }

    pub fn set_scale(&mut self, scale_x: f64, scale_y: f64) {
        self.transform.scale_x = scale_x;
        self.transform.scale_y = scale_y;
    }

    pub fn set_translate(&mut self, translate_x: f64, translate_y: f64) {
        self.transform.translate_x = translate_x;
        self.transform.translate_y = translate_y;
    }

    pub fn set_bias(&mut self, bias_x: f64, bias_y: f64) {
        self.transform.bias_x = bias_x;
        self.transform.bias_y = bias_y;
    }

    /// Runs the transform pipeline on this figure's current snapshot.
    pub fn placement(&self) -> Placement {
        transform::apply(&self.shape, &self.transform)
    }
}
