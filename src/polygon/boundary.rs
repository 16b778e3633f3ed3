//! Boundary lists: per-polygon node sequences and in/out classification.
//!
//! A boundary list is the polygon's own walk with the crossings spliced in:
//! vertex 0, the crossings on edge 0 in order of increasing parameter,
//! vertex 1, and so on. Both lists reference the same crossing vector by
//! index, so the counterpart of a crossing node in the other list is found
//! by a table lookup that exists by construction.

use crate::polygon::core::Polygon;
use crate::polygon::crossings::Crossing;
use crate::primitives::Point2;
use num_traits::Float;

/// Which role a polygon plays in the clip operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Side {
    Subject,
    Clip,
}

/// One node of a boundary list.
#[derive(Debug, Clone)]
pub(crate) enum BoundaryNode<F> {
    /// An original polygon vertex.
    Vertex(Point2<F>),
    /// A crossing with the other polygon's boundary. `id` indexes the
    /// shared crossing vector; `entering` is true when the walk passes
    /// from outside to inside the other polygon here.
    Crossing {
        point: Point2<F>,
        id: usize,
        entering: bool,
    },
}

/// A polygon boundary with crossings interleaved, plus a position table
/// mapping crossing id to node index.
#[derive(Debug)]
pub(crate) struct BoundaryList<F> {
    pub nodes: Vec<BoundaryNode<F>>,
    /// `node_of[id]` is the index of crossing `id` in `nodes`.
    pub node_of: Vec<usize>,
}

impl<F: Float> BoundaryList<F> {
    /// Builds the boundary list for one polygon.
    ///
    /// For each vertex, emits the vertex node followed by the crossings on
    /// the outgoing edge in strictly increasing parameter order.
    pub fn build(polygon: &Polygon<F>, crossings: &[Crossing<F>], side: Side) -> Self {
        let mut nodes = Vec::with_capacity(polygon.len() + crossings.len());
        let mut node_of = vec![0usize; crossings.len()];
        let mut on_edge: Vec<(usize, F)> = Vec::new();

        for i in 0..polygon.len() {
            nodes.push(BoundaryNode::Vertex(polygon.vertex(i)));

            on_edge.clear();
            for (id, c) in crossings.iter().enumerate() {
                let (edge, t) = match side {
                    Side::Subject => (c.subject_edge, c.t_subject),
                    Side::Clip => (c.clip_edge, c.t_clip),
                };
                if edge == i {
                    on_edge.push((id, t));
                }
            }
            on_edge.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));

            for &(id, _) in on_edge.iter() {
                node_of[id] = nodes.len();
                nodes.push(BoundaryNode::Crossing {
                    point: crossings[id].point,
                    id,
                    entering: false,
                });
            }
        }

        Self { nodes, node_of }
    }

    /// Classifies the subject boundary's crossings as entering or exiting.
    ///
    /// The toggle starts from a point-in-polygon test of the first original
    /// vertex against the clip region; each crossing flips it, and the
    /// post-flip value is the crossing's flag (true = entering). Returns
    /// the flags indexed by crossing id for propagation to the clip list.
    pub fn classify(&mut self, clip_region: &Polygon<F>, crossing_count: usize) -> Vec<bool> {
        let mut entering_of = vec![false; crossing_count];

        let mut inside = match self.nodes.first() {
            Some(BoundaryNode::Vertex(p)) => clip_region.contains(*p),
            _ => false,
        };

        for node in self.nodes.iter_mut() {
            if let BoundaryNode::Crossing { id, entering, .. } = node {
                inside = !inside;
                *entering = inside;
                entering_of[*id] = inside;
            }
        }

        entering_of
    }

    /// Copies entering flags onto this list's crossing nodes by shared id.
    pub fn propagate(&mut self, entering_of: &[bool]) {
        for node in self.nodes.iter_mut() {
            if let BoundaryNode::Crossing { id, entering, .. } = node {
                *entering = entering_of[*id];
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::polygon::crossings::find_crossings;
    use crate::primitives::Point2;

    const EPS: f64 = 1e-9;

    fn square(x0: f64, y0: f64, x1: f64, y1: f64) -> Polygon<f64> {
        Polygon::new(vec![
            Point2::new(x0, y0),
            Point2::new(x1, y0),
            Point2::new(x1, y1),
            Point2::new(x0, y1),
        ])
    }

    fn crossing_ids(list: &BoundaryList<f64>) -> Vec<usize> {
        list.nodes
            .iter()
            .filter_map(|n| match n {
                BoundaryNode::Crossing { id, .. } => Some(*id),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_build_interleaves_in_walk_order() {
        let subject = square(0.0, 0.0, 4.0, 4.0);
        let clip = square(2.0, 2.0, 6.0, 6.0);
        let crossings = find_crossings(&subject, &clip, EPS);

        let list = BoundaryList::build(&subject, &crossings, Side::Subject);
        // 4 vertices + 2 crossings
        assert_eq!(list.nodes.len(), 6);
        assert!(matches!(list.nodes[0], BoundaryNode::Vertex(_)));

        // Position table points at the crossing nodes themselves
        for (id, &pos) in list.node_of.iter().enumerate() {
            match &list.nodes[pos] {
                BoundaryNode::Crossing { id: node_id, .. } => assert_eq!(*node_id, id),
                _ => panic!("node_of[{}] does not point at a crossing", id),
            }
        }
    }

    #[test]
    fn test_build_orders_crossings_on_one_edge_by_t() {
        let subject = square(0.0, 0.0, 10.0, 2.0);
        let clip = square(4.0, -2.0, 6.0, 4.0);
        let crossings = find_crossings(&subject, &clip, EPS);

        let list = BoundaryList::build(&subject, &crossings, Side::Subject);

        // The two crossings on subject edge 0 appear between vertex 0 and
        // vertex 1, in increasing t order
        let mut last_t = -1.0;
        for node in &list.nodes[1..3] {
            match node {
                BoundaryNode::Crossing { id, .. } => {
                    let t = crossings[*id].t_subject;
                    assert!(t > last_t);
                    last_t = t;
                }
                _ => panic!("expected crossings directly after vertex 0"),
            }
        }
    }

    #[test]
    fn test_classify_alternates_and_propagates() {
        let subject = square(0.0, 0.0, 4.0, 4.0);
        let clip = square(2.0, 2.0, 6.0, 6.0);
        let crossings = find_crossings(&subject, &clip, EPS);

        let mut subject_list = BoundaryList::build(&subject, &crossings, Side::Subject);
        let mut clip_list = BoundaryList::build(&clip, &crossings, Side::Clip);

        let entering_of = subject_list.classify(&clip, crossings.len());
        clip_list.propagate(&entering_of);

        // Subject starts outside the clip region, so the walk's crossings
        // alternate entering, exiting
        let flags: Vec<bool> = subject_list
            .nodes
            .iter()
            .filter_map(|n| match n {
                BoundaryNode::Crossing { entering, .. } => Some(*entering),
                _ => None,
            })
            .collect();
        assert_eq!(flags, vec![true, false]);

        // Counterpart nodes in the clip list carry the identical flags
        for node in &clip_list.nodes {
            if let BoundaryNode::Crossing { id, entering, .. } = node {
                assert_eq!(*entering, entering_of[*id]);
            }
        }
    }

    #[test]
    fn test_classify_starts_inside() {
        // Subject's first vertex sits inside the clip region
        let subject = square(2.0, 2.0, 6.0, 6.0);
        let clip = square(0.0, 0.0, 4.0, 4.0);
        let crossings = find_crossings(&subject, &clip, EPS);

        let mut subject_list = BoundaryList::build(&subject, &crossings, Side::Subject);
        let entering_of = subject_list.classify(&clip, crossings.len());

        let flags: Vec<bool> = crossing_ids(&subject_list)
            .iter()
            .map(|id| entering_of[*id])
            .collect();
        // Starting inside, the first crossing met is an exit
        assert_eq!(flags, vec![false, true]);
    }
}
