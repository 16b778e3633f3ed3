//! clip2d - Weiler-Atherton polygon clipping
//!
//! Computes the geometric intersection of two simple planar polygons,
//! producing zero or more closed loops. The clip operation is a pure
//! function over immutable inputs, a building block for CAD, GIS, and
//! rendering-mask pipelines that need the actual overlap shape rather
//! than just a containment answer.

pub mod error;
pub mod io;
pub mod polygon;
pub mod predicates;
pub mod primitives;
pub mod sampling;

pub use error::ClipError;
pub use polygon::{clip, clip_with_tolerance, Polygon};
pub use predicates::{
    crossing_point, orient2d, point_in_polygon, segments_cross, Orientation,
};
pub use primitives::{Point2, Segment2, Vec2};
