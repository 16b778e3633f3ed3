//! Edge-pair intersection scan.
//!
//! Scans every (subject edge, clip edge) pair and records the proper
//! transversal crossings. Each record carries the pair of edge indices it
//! was found on; that pair is the crossing's identity for the rest of the
//! pipeline, and coordinates are never compared to match crossings between
//! the two boundary lists.

use crate::polygon::core::Polygon;
use crate::predicates::{crossing_point, segments_cross};
use crate::primitives::Point2;
use num_traits::Float;

/// A transversal crossing between one subject edge and one clip edge.
///
/// `t_subject` and `t_clip` are the parameters along each edge measured
/// from its start vertex, used to order multiple crossings on one edge.
#[derive(Debug, Clone)]
pub(crate) struct Crossing<F> {
    pub point: Point2<F>,
    pub subject_edge: usize,
    pub clip_edge: usize,
    pub t_subject: F,
    pub t_clip: F,
}

/// Finds all proper crossings between the two polygon boundaries.
///
/// O(|subject| * |clip|) edge-pair tests. Parallel or collinear pairs have
/// no unique intersection point and are skipped; so are touches at edge
/// endpoints (either parameter at 0 or 1 within `eps`), which do not cross
/// the boundary and would break the entering/exiting alternation the
/// stitcher depends on. Skipping a pair is not an error.
pub(crate) fn find_crossings<F: Float>(
    subject: &Polygon<F>,
    clip: &Polygon<F>,
    eps: F,
) -> Vec<Crossing<F>> {
    let mut crossings = Vec::new();

    for i in 0..subject.len() {
        let se = subject.edge(i);
        for j in 0..clip.len() {
            let ce = clip.edge(j);
            if !segments_cross(se, ce, eps) {
                continue;
            }
            if let Some((point, t_subject, t_clip)) = crossing_point(se, ce, eps) {
                if strictly_interior(t_subject, eps) && strictly_interior(t_clip, eps) {
                    crossings.push(Crossing {
                        point,
                        subject_edge: i,
                        clip_edge: j,
                        t_subject,
                        t_clip,
                    });
                }
            }
        }
    }

    crossings
}

#[inline]
fn strictly_interior<F: Float>(t: F, eps: F) -> bool {
    t > eps && t < F::one() - eps
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const EPS: f64 = 1e-9;

    fn square(x0: f64, y0: f64, x1: f64, y1: f64) -> Polygon<f64> {
        Polygon::new(vec![
            Point2::new(x0, y0),
            Point2::new(x1, y0),
            Point2::new(x1, y1),
            Point2::new(x0, y1),
        ])
    }

    #[test]
    fn test_overlapping_squares_two_crossings() {
        let subject = square(0.0, 0.0, 4.0, 4.0);
        let clip = square(2.0, 2.0, 6.0, 6.0);

        let found = find_crossings(&subject, &clip, EPS);
        assert_eq!(found.len(), 2);

        // (4,2) on subject edge 1, clip edge 0
        let c = found
            .iter()
            .find(|c| c.subject_edge == 1 && c.clip_edge == 0)
            .unwrap();
        assert_relative_eq!(c.point.x, 4.0, epsilon = 1e-10);
        assert_relative_eq!(c.point.y, 2.0, epsilon = 1e-10);
        assert_relative_eq!(c.t_subject, 0.5, epsilon = 1e-10);

        // (2,4) on subject edge 2, clip edge 3
        let c = found
            .iter()
            .find(|c| c.subject_edge == 2 && c.clip_edge == 3)
            .unwrap();
        assert_relative_eq!(c.point.x, 2.0, epsilon = 1e-10);
        assert_relative_eq!(c.point.y, 4.0, epsilon = 1e-10);
    }

    #[test]
    fn test_disjoint_no_crossings() {
        let subject = square(0.0, 0.0, 2.0, 2.0);
        let clip = square(10.0, 10.0, 12.0, 12.0);
        assert!(find_crossings(&subject, &clip, EPS).is_empty());
    }

    #[test]
    fn test_contained_no_crossings() {
        let subject = square(1.0, 1.0, 2.0, 2.0);
        let clip = square(0.0, 0.0, 5.0, 5.0);
        assert!(find_crossings(&subject, &clip, EPS).is_empty());
    }

    #[test]
    fn test_shared_edge_skipped() {
        // Squares sharing the x=2 edge: every candidate pair is parallel,
        // collinear, or touches at an endpoint; no crossing records
        let subject = square(0.0, 0.0, 2.0, 2.0);
        let clip = square(2.0, 0.0, 4.0, 2.0);
        assert!(find_crossings(&subject, &clip, EPS).is_empty());
    }

    #[test]
    fn test_vertex_touch_skipped() {
        // Squares touching at the single corner (2,2)
        let subject = square(0.0, 0.0, 2.0, 2.0);
        let clip = square(2.0, 2.0, 4.0, 4.0);
        assert!(find_crossings(&subject, &clip, EPS).is_empty());
    }

    #[test]
    fn test_multiple_crossings_on_one_edge() {
        // Wide flat subject crossed by a tall thin clip: the clip's two
        // vertical edges each cross the subject's two horizontal edges
        let subject = square(0.0, 0.0, 10.0, 2.0);
        let clip = square(4.0, -2.0, 6.0, 4.0);

        let found = find_crossings(&subject, &clip, EPS);
        assert_eq!(found.len(), 4);

        // Subject edge 0 (bottom) carries two crossings with distinct t
        let mut on_bottom: Vec<f64> = found
            .iter()
            .filter(|c| c.subject_edge == 0)
            .map(|c| c.t_subject)
            .collect();
        on_bottom.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_eq!(on_bottom.len(), 2);
        assert!(on_bottom[0] < on_bottom[1]);
    }

    #[test]
    fn test_concave_subject_four_crossings() {
        // U-shaped subject crossed by a horizontal bar through both arms
        let subject = Polygon::new(vec![
            Point2::new(0.0_f64, 0.0),
            Point2::new(6.0, 0.0),
            Point2::new(6.0, 4.0),
            Point2::new(4.0, 4.0),
            Point2::new(4.0, 1.0),
            Point2::new(2.0, 1.0),
            Point2::new(2.0, 4.0),
            Point2::new(0.0, 4.0),
        ]);
        let clip = square(-1.0, 2.0, 7.0, 3.0);

        let found = find_crossings(&subject, &clip, EPS);
        assert_eq!(found.len(), 8);
    }
}
