use serde::{Deserialize, Serialize};

use super::{FigureShape, Point, VertexBuf};

/// Segment count for circle outlines, matching the fan density the
/// editor has always drawn with.
pub const CIRCLE_SEGMENTS: usize = 100;

/// Circle defined by center and radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
}

impl Circle {
    pub fn new(center: Point, radius: f64) -> Self {
        Self { center, radius }
    }
}

impl FigureShape for Circle {
    fn contains(&self, p: Point) -> bool {
        let dx = p.x - self.center.x;
        let dy = p.y - self.center.y;
        dx * dx + dy * dy <= self.radius * self.radius
    }

    fn pivot(&self) -> Point {
        self.center
    }

    fn local_vertices(&self) -> VertexBuf {
        let mut verts = VertexBuf::with_capacity(CIRCLE_SEGMENTS);
        for i in 0..CIRCLE_SEGMENTS {
            let theta = 2.0 * std::f64::consts::PI * (i as f64) / (CIRCLE_SEGMENTS as f64);
            verts.push(Point::new(
                self.center.x + self.radius * theta.cos(),
                self.center.y + self.radius * theta.sin(),
            ));
        }
        verts
    }

    fn skew_anchor(&self) -> Point {
        self.center
    }

    fn bounding_box(&self) -> (f64, f64, f64, f64) {
        (
            self.center.x - self.radius,
            self.center.y - self.radius,
            self.center.x + self.radius,
            self.center.y + self.radius,
        )
    }
}
