//! Core polygon type and basic operations.

use crate::predicates::{point_in_polygon, segments_cross};
use crate::primitives::{Point2, Segment2};
use num_traits::Float;

/// A simple polygon represented as an ordered, cyclic vertex sequence.
///
/// The polygon is implicitly closed: the last vertex connects back to the
/// first. `vertex(i)` and `edge(i)` index modulo the vertex count, so edge
/// arithmetic never has to special-case the wrap boundary. Simplicity
/// (no self-crossing edges) is a caller precondition that the clip core
/// does not verify; [`is_simple`] is available where it matters.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon<F> {
    /// The vertices in boundary-walk order.
    pub vertices: Vec<Point2<F>>,
}

impl<F: Float> Polygon<F> {
    /// Creates a new polygon from vertices.
    #[inline]
    pub fn new(vertices: Vec<Point2<F>>) -> Self {
        Self { vertices }
    }

    /// Creates an empty polygon.
    #[inline]
    pub fn empty() -> Self {
        Self {
            vertices: Vec::new(),
        }
    }

    /// Returns true if the polygon has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the number of vertices (equal to the number of edges).
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns vertex `i`, indexing cyclically.
    #[inline]
    pub fn vertex(&self, i: usize) -> Point2<F> {
        self.vertices[i % self.vertices.len()]
    }

    /// Returns edge `i`, the directed segment from vertex `i` to vertex
    /// `i + 1`, indexing cyclically.
    #[inline]
    pub fn edge(&self, i: usize) -> Segment2<F> {
        let n = self.vertices.len();
        Segment2::new(self.vertices[i % n], self.vertices[(i + 1) % n])
    }

    /// Iterates over all edges in boundary-walk order.
    pub fn edges(&self) -> impl Iterator<Item = Segment2<F>> + '_ {
        (0..self.vertices.len()).map(move |i| self.edge(i))
    }

    /// Returns the signed area of the polygon using the shoelace formula.
    ///
    /// Positive for CCW winding, negative for CW winding.
    pub fn signed_area(&self) -> F {
        polygon_signed_area(&self.vertices)
    }

    /// Returns the absolute area of the polygon.
    pub fn area(&self) -> F {
        self.signed_area().abs()
    }

    /// Tests if a point is inside the polygon (even-odd rule).
    pub fn contains(&self, point: Point2<F>) -> bool {
        point_in_polygon(point, &self.vertices)
    }

    /// Returns the bounding box as (min, max) points.
    pub fn bounding_box(&self) -> Option<(Point2<F>, Point2<F>)> {
        if self.vertices.is_empty() {
            return None;
        }

        let mut min = self.vertices[0];
        let mut max = self.vertices[0];

        for v in &self.vertices[1..] {
            if v.x < min.x {
                min.x = v.x;
            }
            if v.y < min.y {
                min.y = v.y;
            }
            if v.x > max.x {
                max.x = v.x;
            }
            if v.y > max.y {
                max.y = v.y;
            }
        }

        Some((min, max))
    }
}

/// Computes the signed area of a polygon using the shoelace formula.
///
/// Positive for CCW winding, negative for CW winding.
pub fn polygon_signed_area<F: Float>(vertices: &[Point2<F>]) -> F {
    if vertices.len() < 3 {
        return F::zero();
    }

    let mut area = F::zero();
    let n = vertices.len();

    for i in 0..n {
        let j = (i + 1) % n;
        area = area + vertices[i].x * vertices[j].y;
        area = area - vertices[j].x * vertices[i].y;
    }

    area / F::from(2.0).unwrap()
}

/// Computes the absolute area of a polygon.
pub fn polygon_area<F: Float>(vertices: &[Point2<F>]) -> F {
    polygon_signed_area(vertices).abs()
}

/// Tests whether a polygon is simple: no two non-adjacent edges cross.
///
/// Adjacent edges sharing a vertex are not counted as crossings.
pub fn is_simple<F: Float>(polygon: &Polygon<F>) -> bool {
    let n = polygon.vertices.len();
    if n < 4 {
        return true;
    }

    let eps = F::from(1e-12).unwrap();
    for i in 0..n {
        let a = polygon.edge(i);
        for j in (i + 2)..n {
            // The closing edge shares vertex 0 with edge 0
            if i == 0 && j == n - 1 {
                continue;
            }
            if segments_cross(a, polygon.edge(j), eps) {
                return false;
            }
        }
    }

    true
}
