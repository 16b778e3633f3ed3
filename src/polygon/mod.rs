//! Polygon type and the Weiler-Atherton clip pipeline.
//!
//! The pipeline runs in four stages: find all proper edge crossings between
//! the two polygons, build a boundary list per polygon interleaving original
//! vertices with the crossings along its walk, classify every crossing as
//! entering or exiting the other polygon, then stitch closed loops by
//! alternating between the two lists at shared crossings.
//!
//! # Example
//!
//! ```
//! use clip2d::{clip, Point2, Polygon};
//!
//! let subject: Polygon<f64> = Polygon::new(vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(4.0, 0.0),
//!     Point2::new(4.0, 4.0),
//!     Point2::new(0.0, 4.0),
//! ]);
//! let region = Polygon::new(vec![
//!     Point2::new(2.0, 2.0),
//!     Point2::new(6.0, 2.0),
//!     Point2::new(6.0, 6.0),
//!     Point2::new(2.0, 6.0),
//! ]);
//!
//! let loops = clip(&subject, &region).unwrap();
//! assert_eq!(loops.len(), 1);
//! assert!((loops[0].area() - 4.0).abs() < 1e-9);
//! ```

mod boundary;
mod clip;
mod core;
mod crossings;

pub use self::clip::{clip, clip_with_tolerance};
pub use self::core::{is_simple, polygon_area, polygon_signed_area, Polygon};
