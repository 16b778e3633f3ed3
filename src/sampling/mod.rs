//! Random polygon generation for test fixtures.

mod polygon;

pub use polygon::{random_simple_polygon, RandomPolygonSampler};
