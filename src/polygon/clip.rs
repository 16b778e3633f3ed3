//! Weiler-Atherton clip entry point and loop stitcher.

use crate::error::ClipError;
use crate::polygon::boundary::{BoundaryList, BoundaryNode, Side};
use crate::polygon::core::Polygon;
use crate::polygon::crossings::find_crossings;
use crate::primitives::Point2;
use num_traits::Float;

/// Clips `subject` against `clip_region` with the default tolerance.
///
/// Returns the intersection region as zero or more simple closed loops.
/// Each returned loop has at least 3 vertices and is implicitly closed.
/// Disjoint inputs produce `Ok(vec![])`; full containment produces a single
/// loop equal to the contained polygon.
///
/// Both inputs must be simple polygons with at least 3 distinct vertices;
/// simplicity is a precondition that is not verified here, while vertex
/// count and consecutive duplicates are rejected up front.
///
/// The operation is a pure function: inputs are read-only, all working
/// state is call-local, and concurrent calls need no synchronization.
///
/// # Example
///
/// ```
/// use clip2d::{clip, Point2, Polygon};
///
/// let a = Polygon::new(vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(4.0, 0.0),
///     Point2::new(4.0, 4.0),
///     Point2::new(0.0, 4.0),
/// ]);
/// let b = Polygon::new(vec![
///     Point2::new(2.0, 2.0),
///     Point2::new(6.0, 2.0),
///     Point2::new(6.0, 6.0),
///     Point2::new(2.0, 6.0),
/// ]);
///
/// let loops = clip(&a, &b).unwrap();
/// assert_eq!(loops.len(), 1);
/// ```
pub fn clip<F: Float>(
    subject: &Polygon<F>,
    clip_region: &Polygon<F>,
) -> Result<Vec<Polygon<F>>, ClipError> {
    clip_with_tolerance(subject, clip_region, F::from(1e-9).unwrap())
}

/// Clips `subject` against `clip_region` with an explicit tolerance.
///
/// `eps` bounds the collinearity test of the crossing solver and the
/// duplicate-vertex check; see [`clip`] for the contract.
pub fn clip_with_tolerance<F: Float>(
    subject: &Polygon<F>,
    clip_region: &Polygon<F>,
    eps: F,
) -> Result<Vec<Polygon<F>>, ClipError> {
    validate(subject, eps)?;
    validate(clip_region, eps)?;

    if boxes_disjoint(subject, clip_region) {
        return Ok(Vec::new());
    }

    // The stitcher walks both boundary lists forward, which only traces the
    // overlap when the two polygons share a winding direction
    let subj = oriented_ccw(subject);
    let region = oriented_ccw(clip_region);

    let crossings = find_crossings(&subj, &region, eps);

    if crossings.is_empty() {
        // No boundary crossings: either one polygon contains the other or
        // they do not overlap at all
        if region.contains(subj.vertices[0]) {
            return Ok(vec![subject.clone()]);
        }
        if subj.contains(region.vertices[0]) {
            return Ok(vec![clip_region.clone()]);
        }
        return Ok(Vec::new());
    }

    let mut subject_list = BoundaryList::build(&subj, &crossings, Side::Subject);
    let mut clip_list = BoundaryList::build(&region, &crossings, Side::Clip);

    let entering_of = subject_list.classify(&region, crossings.len());
    clip_list.propagate(&entering_of);

    Ok(stitch(&subject_list, &clip_list, crossings.len()))
}

/// Rejects inputs before any geometric work: fewer than 3 vertices, or a
/// consecutive duplicate vertex (zero-length edge).
fn validate<F: Float>(polygon: &Polygon<F>, eps: F) -> Result<(), ClipError> {
    let n = polygon.len();
    if n < 3 {
        return Err(ClipError::TooFewVertices { count: n });
    }
    for i in 0..n {
        if polygon.edge(i).length_squared() <= eps * eps {
            return Err(ClipError::DuplicateVertex { index: i });
        }
    }
    Ok(())
}

/// Returns a copy of the polygon with counter-clockwise winding.
fn oriented_ccw<F: Float>(polygon: &Polygon<F>) -> Polygon<F> {
    let mut copy = polygon.clone();
    if copy.signed_area() < F::zero() {
        copy.vertices.reverse();
    }
    copy
}

fn boxes_disjoint<F: Float>(a: &Polygon<F>, b: &Polygon<F>) -> bool {
    match (a.bounding_box(), b.bounding_box()) {
        (Some((min_a, max_a)), Some((min_b, max_b))) => {
            max_a.x < min_b.x || max_b.x < min_a.x || max_a.y < min_b.y || max_b.y < min_a.y
        }
        _ => true,
    }
}

/// The stitcher's control state.
///
/// Each state carries exactly the data its transition needs: a node index
/// into the list being walked, or the id of the crossing being switched on.
enum State {
    /// Scan the subject list for an unvisited entering crossing.
    Searching,
    /// Append subject nodes from `pos` until the next (exiting) crossing.
    WalkSubject { pos: usize },
    /// Jump to crossing `id`'s node in the clip list.
    SwitchToClip { id: usize },
    /// Append clip nodes from `pos` until the next (entering) crossing.
    WalkClip { pos: usize },
    /// Jump to crossing `id`'s node in the subject list; if it anchors the
    /// current loop, the loop is complete.
    SwitchToSubject { id: usize },
    /// Emit the accumulated loop and resume searching.
    CloseLoop,
}

/// Reconstructs the output loops from the two classified boundary lists.
///
/// Starting from each unvisited entering crossing in the subject list, the
/// walk alternates: forward along the subject boundary while inside the
/// clip region, then forward along the clip boundary while inside the
/// subject, switching lists at each crossing, until it returns to its
/// starting crossing. Walks wrap cyclically. Every crossing is consumed as
/// an anchor at most once, so the traversal terminates with all loops
/// closed.
fn stitch<F: Float>(
    subject_list: &BoundaryList<F>,
    clip_list: &BoundaryList<F>,
    crossing_count: usize,
) -> Vec<Polygon<F>> {
    let mut loops = Vec::new();
    let mut visited = vec![false; crossing_count];
    let mut current: Vec<Point2<F>> = Vec::new();
    let mut anchor = 0usize;

    let mut state = State::Searching;
    loop {
        state = match state {
            State::Searching => {
                let next = subject_list.nodes.iter().position(|n| {
                    matches!(
                        n,
                        BoundaryNode::Crossing { id, entering: true, .. } if !visited[*id]
                    )
                });
                match next {
                    Some(pos) => {
                        if let BoundaryNode::Crossing { id, .. } = subject_list.nodes[pos] {
                            anchor = id;
                        }
                        State::WalkSubject { pos }
                    }
                    None => break,
                }
            }

            State::WalkSubject { pos } => {
                // First node is the entering crossing itself
                let mut p = pos;
                if let BoundaryNode::Crossing { point, id, .. } = subject_list.nodes[p] {
                    visited[id] = true;
                    current.push(point);
                }
                p = (p + 1) % subject_list.nodes.len();
                loop {
                    match subject_list.nodes[p] {
                        BoundaryNode::Vertex(point) => {
                            current.push(point);
                            p = (p + 1) % subject_list.nodes.len();
                        }
                        BoundaryNode::Crossing { id, .. } => {
                            // Alternation makes this an exiting crossing
                            visited[id] = true;
                            break State::SwitchToClip { id };
                        }
                    }
                }
            }

            State::SwitchToClip { id } => State::WalkClip {
                pos: clip_list.node_of[id],
            },

            State::WalkClip { pos } => {
                // First node is the exiting crossing, entered via its
                // counterpart in the clip list
                let mut p = pos;
                if let BoundaryNode::Crossing { point, .. } = clip_list.nodes[p] {
                    current.push(point);
                }
                p = (p + 1) % clip_list.nodes.len();
                loop {
                    match clip_list.nodes[p] {
                        BoundaryNode::Vertex(point) => {
                            current.push(point);
                            p = (p + 1) % clip_list.nodes.len();
                        }
                        BoundaryNode::Crossing { id, .. } => {
                            break State::SwitchToSubject { id };
                        }
                    }
                }
            }

            State::SwitchToSubject { id } => {
                if id == anchor {
                    State::CloseLoop
                } else {
                    State::WalkSubject {
                        pos: subject_list.node_of[id],
                    }
                }
            }

            State::CloseLoop => {
                if current.len() >= 3 {
                    loops.push(Polygon::new(std::mem::take(&mut current)));
                } else {
                    current.clear();
                }
                State::Searching
            }
        };
    }

    loops
}
