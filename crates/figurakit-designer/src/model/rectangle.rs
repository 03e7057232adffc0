use serde::{Deserialize, Serialize};
use smallvec::smallvec;

use super::{FigureShape, Point, VertexBuf};

/// Axis-aligned rectangle anchored at its (x, y) corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rectangle {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// The true geometric center, distinct from [`FigureShape::pivot`]
    /// which keeps the anchor-corner convention.
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

impl FigureShape for Rectangle {
    fn contains(&self, p: Point) -> bool {
        // Inclusive on all four bounds.
        p.x >= self.x
            && p.x <= self.x + self.width
            && p.y >= self.y
            && p.y <= self.y + self.height
    }

    fn pivot(&self) -> Point {
        Point::new(self.x, self.y)
    }

    fn local_vertices(&self) -> VertexBuf {
        smallvec![
            Point::new(self.x, self.y),
            Point::new(self.x + self.width, self.y),
            Point::new(self.x + self.width, self.y + self.height),
            Point::new(self.x, self.y + self.height),
        ]
    }

    fn skew_anchor(&self) -> Point {
        // Midpoint of the left edge.
        Point::new(self.x, self.y + self.height / 2.0)
    }

    fn bounding_box(&self) -> (f64, f64, f64, f64) {
        (self.x, self.y, self.x + self.width, self.y + self.height)
    }
}
