use serde::{Deserialize, Serialize};

use figurakit_core::error::{Result, ShapeError};

use super::{FigureShape, Point, VertexBuf};

/// Tolerance for the barycentric-area triangle test. Loose enough to
/// absorb the precision loss of the three sub-area computations.
const TRIANGLE_AREA_TOL: f64 = 1e-4;

/// Convex polygon with an ordered vertex ring of at least three points.
///
/// Triangles, pentagons, and hexagons are all polygons with 3/5/6
/// vertices; nothing is inferred from the vertex count except which
/// hit-test algorithm applies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    vertices: Vec<Point>,
}

impl Polygon {
    /// Creates a polygon from an ordered vertex ring.
    pub fn new(vertices: Vec<Point>) -> Result<Self> {
        if vertices.len() < 3 {
            return Err(ShapeError::TooFewVertices { count: vertices.len() });
        }
        Ok(Self { vertices })
    }

    /// Creates a polygon from a flat `[x0, y0, x1, y1, ..]` buffer.
    pub fn from_flat(coords: &[f64]) -> Result<Self> {
        if coords.len() % 2 != 0 {
            return Err(ShapeError::OddCoordinateBuffer { len: coords.len() });
        }
        let vertices = coords
            .chunks_exact(2)
            .map(|pair| Point::new(pair[0], pair[1]))
            .collect();
        Self::new(vertices)
    }

    /// Regular n-gon: `sides` vertices on a circle of `radius` about `center`.
    pub fn regular(center: Point, radius: f64, sides: usize) -> Result<Self> {
        if sides < 3 {
            return Err(ShapeError::TooFewVertices { count: sides });
        }
        if radius <= 0.0 {
            return Err(ShapeError::NonPositiveRadius { radius });
        }
        let vertices = (0..sides)
            .map(|i| {
                let theta = 2.0 * std::f64::consts::PI * (i as f64) / (sides as f64);
                Point::new(
                    center.x + radius * theta.cos(),
                    center.y + radius * theta.sin(),
                )
            })
            .collect();
        Ok(Self { vertices })
    }

    /// Three-vertex polygon; infallible by construction.
    pub fn triangle(a: Point, b: Point, c: Point) -> Self {
        Self { vertices: vec![a, b, c] }
    }

    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// Barycentric-area membership: the three sub-triangle areas sum to
    /// the total area only for interior points; outside, the sum
    /// overshoots and the tolerance check fails.
    fn contains_triangle(&self, p: Point) -> bool {
        let [a, b, c] = [self.vertices[0], self.vertices[1], self.vertices[2]];

        let total = tri_area(a, b, c);
        let sum = tri_area(p, a, b) + tri_area(p, b, c) + tri_area(p, c, a);

        (sum - total).abs() < TRIANGLE_AREA_TOL
    }

    /// Even-odd ray casting over consecutive edges, wrap-around edge
    /// included.
    fn contains_ray_cast(&self, p: Point) -> bool {
        let mut inside = false;
        let mut j = self.vertices.len() - 1;
        for i in 0..self.vertices.len() {
            let vi = self.vertices[i];
            let vj = self.vertices[j];
            if ((vi.y > p.y) != (vj.y > p.y))
                && (p.x < (vj.x - vi.x) * (p.y - vi.y) / (vj.y - vi.y) + vi.x)
            {
                inside = !inside;
            }
            j = i;
        }
        inside
    }
}

/// Unsigned area of the triangle (a, b, c).
fn tri_area(a: Point, b: Point, c: Point) -> f64 {
    ((b.x - a.x) * (c.y - a.y) - (c.x - a.x) * (b.y - a.y)).abs() / 2.0
}

impl FigureShape for Polygon {
    fn contains(&self, p: Point) -> bool {
        if self.vertices.len() == 3 {
            self.contains_triangle(p)
        } else {
            self.contains_ray_cast(p)
        }
    }

    fn pivot(&self) -> Point {
        let n = self.vertices.len() as f64;
        let (sx, sy) = self
            .vertices
            .iter()
            .fold((0.0, 0.0), |(sx, sy), v| (sx + v.x, sy + v.y));
        Point::new(sx / n, sy / n)
    }

    fn local_vertices(&self) -> VertexBuf {
        self.vertices.iter().copied().collect()
    }

    fn skew_anchor(&self) -> Point {
        self.vertices[0].midpoint(&self.vertices[1])
    }
}
