//! Shape model for the figure editor.
//!
//! Shapes live in normalized device coordinates, the `[-1, 1] × [-1, 1]`
//! space the editor draws in. The kind of a shape is an explicit tagged
//! variant rather than being sniffed from a coordinate-buffer length, so
//! dispatch is exhaustive and a malformed descriptor cannot be
//! constructed in the first place.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use figurakit_core::error::Result;

mod circle;
mod polygon;
mod rectangle;

pub use circle::Circle;
pub use polygon::Polygon;
pub use rectangle::Rectangle;

/// Vertex buffer produced per shape. Rectangles and small polygons stay
/// inline; circle tessellations spill to the heap.
pub type VertexBuf = SmallVec<[Point; 8]>;

/// Represents a 2D point with X and Y coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Creates a new point with the given X and Y coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Calculates the distance to another point.
    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Midpoint of the segment to another point.
    pub fn midpoint(&self, other: &Point) -> Point {
        Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }
}

/// Types of shapes a figure can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShapeType {
    Rectangle,
    Circle,
    Polygon,
}

/// Common geometry operations implemented by every shape kind.
pub trait FigureShape {
    /// Point-in-shape membership test in NDC space.
    ///
    /// Side-effect free on immutable data; safe to call concurrently
    /// with draw and transform passes.
    fn contains(&self, p: Point) -> bool;

    /// The rotation pivot.
    ///
    /// Polygons use the arithmetic mean of their vertices. Rectangles
    /// and circles use their stored anchor point — the (x, y) corner
    /// and the center respectively. For rectangles this is not the
    /// geometric center; the anchor convention is kept for visual
    /// parity with the editor's established rotation behavior.
    fn pivot(&self) -> Point;

    /// The outline vertices the transform pipeline operates on.
    fn local_vertices(&self) -> VertexBuf;

    /// The point skew transforms are anchored at: the midpoint of the
    /// first edge for a polygon, of the left edge for a rectangle, and
    /// the center for a circle (which has no distinguished edge).
    fn skew_anchor(&self) -> Point;

    /// Axis-aligned bounds of the local outline as (min_x, min_y, max_x, max_y).
    fn bounding_box(&self) -> (f64, f64, f64, f64) {
        let verts = self.local_vertices();
        let mut min_x = f64::INFINITY;
        let mut min_y = f64::INFINITY;
        let mut max_x = f64::NEG_INFINITY;
        let mut max_y = f64::NEG_INFINITY;
        for v in &verts {
            min_x = min_x.min(v.x);
            min_y = min_y.min(v.y);
            max_x = max_x.max(v.x);
            max_y = max_y.max(v.y);
        }
        (min_x, min_y, max_x, max_y)
    }
}

/// Enum wrapper for all shapes a figure can carry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Rectangle(Rectangle),
    Circle(Circle),
    Polygon(Polygon),
}

impl Shape {
    pub fn shape_type(&self) -> ShapeType {
        match self {
            Shape::Rectangle(_) => ShapeType::Rectangle,
            Shape::Circle(_) => ShapeType::Circle,
            Shape::Polygon(_) => ShapeType::Polygon,
        }
    }

    /// A triangle is a polygon with three vertices.
    pub fn triangle(a: Point, b: Point, c: Point) -> Self {
        Shape::Polygon(Polygon::triangle(a, b, c))
    }

    /// Regular n-gon of the given radius about a center; pentagons and
    /// hexagons are built this way.
    pub fn regular_polygon(center: Point, radius: f64, sides: usize) -> Result<Self> {
        Ok(Shape::Polygon(Polygon::regular(center, radius, sides)?))
    }
}

impl FigureShape for Shape {
    fn contains(&self, p: Point) -> bool {
        match self {
            Shape::Rectangle(s) => s.contains(p),
            Shape::Circle(s) => s.contains(p),
            Shape::Polygon(s) => s.contains(p),
        }
    }

    fn pivot(&self) -> Point {
        match self {
            Shape::Rectangle(s) => s.pivot(),
            Shape::Circle(s) => s.pivot(),
            Shape::Polygon(s) => s.pivot(),
        }
    }

    fn local_vertices(&self) -> VertexBuf {
        match self {
            Shape::Rectangle(s) => s.local_vertices(),
            Shape::Circle(s) => s.local_vertices(),
            Shape::Polygon(s) => s.local_vertices(),
        }
    }

    fn skew_anchor(&self) -> Point {
        match self {
            Shape::Rectangle(s) => s.skew_anchor(),
            Shape::Circle(s) => s.skew_anchor(),
            Shape::Polygon(s) => s.skew_anchor(),
        }
    }

    fn bounding_box(&self) -> (f64, f64, f64, f64) {
        match self {
            Shape::Rectangle(s) => s.bounding_box(),
            Shape::Circle(s) => s.bounding_box(),
            Shape::Polygon(s) => s.bounding_box(),
        }
    }
}
