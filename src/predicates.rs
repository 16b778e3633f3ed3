//! Geometric predicates with explicit tolerance.
//!
//! The clip pipeline is built on four primitives: an orientation test, a
//! segment-crossing test, a line-pair intersection solver, and an even-odd
//! point-in-polygon test. All take explicit tolerance parameters; no hidden
//! epsilons.

use crate::primitives::{Point2, Segment2};
use num_traits::Float;

/// Result of an orientation test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Points turn counter-clockwise (positive area).
    CounterClockwise,
    /// Points turn clockwise (negative area).
    Clockwise,
    /// Points are collinear (within tolerance).
    Collinear,
}

/// Computes the orientation of three points with tolerance.
///
/// Returns the orientation of the triangle `a`, `b`, `c`:
/// - `CounterClockwise` if `c` is to the left of the line from `a` to `b`
/// - `Clockwise` if `c` is to the right
/// - `Collinear` if `c` is on the line (cross product within `eps`)
#[inline]
pub fn orient2d<F: Float>(a: Point2<F>, b: Point2<F>, c: Point2<F>, eps: F) -> Orientation {
    // Cross product of (b - a) and (c - a): twice the signed triangle area
    let cross = (b - a).cross(c - a);

    if cross > eps {
        Orientation::CounterClockwise
    } else if cross < -eps {
        Orientation::Clockwise
    } else {
        Orientation::Collinear
    }
}

/// Tests whether two segments intersect.
///
/// Returns `true` when the endpoints of each segment lie on strictly
/// opposite sides of the other segment's line, or when a collinear endpoint
/// falls inside the other segment's bounding box, so touching and
/// overlapping configurations count as intersecting.
///
/// Note this is a yes/no test only; use [`crossing_point`] to solve for the
/// point, which is defined only for non-parallel pairs.
pub fn segments_cross<F: Float>(a: Segment2<F>, b: Segment2<F>, eps: F) -> bool {
    let d1 = orient2d(b.start, b.end, a.start, eps);
    let d2 = orient2d(b.start, b.end, a.end, eps);
    let d3 = orient2d(a.start, a.end, b.start, eps);
    let d4 = orient2d(a.start, a.end, b.end, eps);

    if opposite(d1, d2) && opposite(d3, d4) {
        return true;
    }

    (d1 == Orientation::Collinear && in_bounding_box(b, a.start))
        || (d2 == Orientation::Collinear && in_bounding_box(b, a.end))
        || (d3 == Orientation::Collinear && in_bounding_box(a, b.start))
        || (d4 == Orientation::Collinear && in_bounding_box(a, b.end))
}

/// Solves for the intersection of the two lines through `a` and `b`.
///
/// Uses Cramer's rule on the two-line linear system. Returns the point and
/// the parameters along each segment (`0` = start, `1` = end), or `None`
/// when the determinant magnitude is within `eps`. Parallel and collinear
/// pairs have no unique solution and must be skipped by callers.
pub fn crossing_point<F: Float>(
    a: Segment2<F>,
    b: Segment2<F>,
    eps: F,
) -> Option<(Point2<F>, F, F)> {
    let da = a.direction();
    let db = b.direction();

    let det = da.cross(db);
    if det.abs() <= eps {
        return None;
    }

    let d = b.start - a.start;
    let t_a = d.cross(db) / det;
    let t_b = d.cross(da) / det;

    Some((a.point_at(t_a), t_a, t_b))
}

/// Even-odd point-in-polygon test.
///
/// Casts a ray to the right of `p` and counts edge crossings; an odd count
/// means inside. Each edge is treated as half-open in y, so an endpoint at
/// exactly the ray's height belongs to only one of the two edges meeting
/// there, and horizontal edges are never counted; shared vertices do not
/// double count. Winding-agnostic.
pub fn point_in_polygon<F: Float>(p: Point2<F>, vertices: &[Point2<F>]) -> bool {
    let n = vertices.len();
    if n < 3 {
        return false;
    }

    let mut crossings = 0usize;
    for i in 0..n {
        let v1 = vertices[i];
        let v2 = vertices[(i + 1) % n];

        if v1.y == v2.y {
            continue;
        }
        if p.y < v1.y.min(v2.y) || p.y >= v1.y.max(v2.y) {
            continue;
        }

        // x-coordinate where the edge crosses the ray's height
        let x = (p.y - v1.y) * (v2.x - v1.x) / (v2.y - v1.y) + v1.x;
        if x > p.x {
            crossings += 1;
        }
    }

    crossings % 2 == 1
}

#[inline]
fn opposite(a: Orientation, b: Orientation) -> bool {
    matches!(
        (a, b),
        (Orientation::CounterClockwise, Orientation::Clockwise)
            | (Orientation::Clockwise, Orientation::CounterClockwise)
    )
}

#[inline]
fn in_bounding_box<F: Float>(s: Segment2<F>, p: Point2<F>) -> bool {
    p.x >= s.start.x.min(s.end.x)
        && p.x <= s.start.x.max(s.end.x)
        && p.y >= s.start.y.min(s.end.y)
        && p.y <= s.start.y.max(s.end.y)
}
