//! Random simple polygon generation.
//!
//! Produces test fixtures for the clip pipeline: polygons with a requested
//! vertex count, uniformly sampled in a rectangular domain, guaranteed
//! simple. Candidates that would introduce a crossing edge are rejected as
//! the boundary is grown, so generation is rejection sampling over the
//! vertex sequence, not over whole polygons.

use crate::polygon::{is_simple, Polygon};
use crate::predicates::segments_cross;
use crate::primitives::{Point2, Segment2};
use num_traits::Float;

/// Rejections tolerated while growing one polygon before starting over.
const MAX_REJECTIONS: usize = 1000;

/// Generates a random simple polygon in the domain `[0, width) x [0, height)`.
///
/// Deterministic for a given seed.
///
/// # Example
///
/// ```
/// use clip2d::polygon::is_simple;
/// use clip2d::sampling::random_simple_polygon;
///
/// let poly = random_simple_polygon::<f64>(100.0, 100.0, 8, 42);
/// assert_eq!(poly.len(), 8);
/// assert!(is_simple(&poly));
/// ```
pub fn random_simple_polygon<F: Float>(
    width: F,
    height: F,
    vertex_count: usize,
    seed: u64,
) -> Polygon<F> {
    let mut sampler = RandomPolygonSampler::new(width, height, seed);
    sampler.generate(vertex_count)
}

/// A reusable random polygon sampler with its own PRNG state.
pub struct RandomPolygonSampler<F> {
    width: F,
    height: F,
    rng_state: u64,
}

impl<F: Float> RandomPolygonSampler<F> {
    /// Creates a new sampler over the domain `[0, width) x [0, height)`.
    pub fn new(width: F, height: F, seed: u64) -> Self {
        Self {
            width,
            height,
            // xorshift stalls on an all-zero state
            rng_state: seed.max(1),
        }
    }

    /// Generates one simple polygon with `vertex_count` vertices.
    ///
    /// Grows the vertex sequence one point at a time, rejecting candidates
    /// whose new boundary edge would cross an earlier edge; the closing
    /// edge is checked when placing the final vertex. If a partial
    /// boundary rejects too many candidates in a row it is discarded and
    /// generation restarts, advancing the PRNG, so the call always
    /// terminates with a simple polygon.
    pub fn generate(&mut self, vertex_count: usize) -> Polygon<F> {
        let min_separation = self.domain_scale() * F::from(1e-3).unwrap();

        loop {
            let mut pts: Vec<Point2<F>> = Vec::with_capacity(vertex_count);
            let mut rejections = 0usize;

            while pts.len() < vertex_count {
                let candidate = self.random_point();
                let closing = pts.len() + 1 == vertex_count;

                if self.accepts(&pts, candidate, closing, min_separation) {
                    pts.push(candidate);
                } else {
                    rejections += 1;
                    if rejections > MAX_REJECTIONS {
                        break;
                    }
                }
            }

            if pts.len() < vertex_count {
                continue;
            }

            let poly = Polygon::new(pts);
            if is_simple(&poly) && poly.area() > min_separation * min_separation {
                return poly;
            }
        }
    }

    /// Tests a candidate for the next vertex of the partial boundary.
    fn accepts(
        &self,
        pts: &[Point2<F>],
        candidate: Point2<F>,
        closing: bool,
        min_separation: F,
    ) -> bool {
        // Keep vertices apart so no edge is near-degenerate
        for &p in pts {
            if p.distance(candidate) < min_separation {
                return false;
            }
        }
        if pts.len() < 2 {
            return true;
        }

        // The new edge may not cross any earlier edge; its neighbor at the
        // shared vertex is skipped (they always touch)
        let new_edge = Segment2::new(pts[pts.len() - 1], candidate);
        let eps = F::from(1e-12).unwrap();
        for e in 0..pts.len().saturating_sub(2) {
            if segments_cross(Segment2::new(pts[e], pts[e + 1]), new_edge, eps) {
                return false;
            }
        }

        if closing {
            let closing_edge = Segment2::new(candidate, pts[0]);
            for e in 1..pts.len() - 1 {
                if segments_cross(Segment2::new(pts[e], pts[e + 1]), closing_edge, eps) {
                    return false;
                }
            }
        }

        true
    }

    fn domain_scale(&self) -> F {
        self.width.max(self.height)
    }

    fn random_point(&mut self) -> Point2<F> {
        let x = self.random_f() * self.width;
        let y = self.random_f() * self.height;
        Point2::new(x, y)
    }

    /// Simple xorshift64 PRNG - returns value in [0, 1).
    fn random_f(&mut self) -> F {
        self.rng_state ^= self.rng_state << 13;
        self.rng_state ^= self.rng_state >> 7;
        self.rng_state ^= self.rng_state << 17;

        let max = u64::MAX as f64;
        F::from(self.rng_state as f64 / max).unwrap()
    }
}
