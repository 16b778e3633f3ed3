//! Input/output utilities.

mod svg;

pub use svg::{polygon_to_svg_path, polyline_to_svg_path, render_clip_scene};
