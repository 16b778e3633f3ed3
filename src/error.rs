//! Error types for clip operations.

use thiserror::Error;

/// Errors reported before any geometric work begins.
///
/// Degenerate edge pairs (parallel or collinear) are skipped at the pair
/// level during intersection finding and never surface as errors; a clip of
/// two non-overlapping polygons succeeds with an empty result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipError {
    /// A polygon has fewer than 3 vertices.
    #[error("polygon has {count} vertices, need at least 3")]
    TooFewVertices {
        /// Number of vertices in the offending polygon.
        count: usize,
    },

    /// A polygon repeats a vertex consecutively (zero-length edge).
    #[error("consecutive duplicate vertex at index {index}")]
    DuplicateVertex {
        /// Index of the first vertex of the duplicate pair.
        index: usize,
    },
}
