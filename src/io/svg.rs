//! SVG export.
//!
//! Renders clip results as SVG for inspection: path-data export for
//! individual polygons, and a complete scene renderer that draws the two
//! input polygons stroked with the intersection loops filled on top.
//!
//! # Example
//!
//! ```
//! use clip2d::io::polygon_to_svg_path;
//! use clip2d::polygon::Polygon;
//! use clip2d::Point2;
//!
//! let poly = Polygon::new(vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(10.0, 0.0),
//!     Point2::new(10.0, 10.0),
//! ]);
//!
//! let d = polygon_to_svg_path(&poly);
//! assert!(d.starts_with("M"));
//! assert!(d.ends_with("Z"));
//! ```

use crate::polygon::Polygon;
use crate::primitives::Point2;
use num_traits::Float;
use std::fmt;

/// Converts a polyline to an SVG path string.
///
/// # Arguments
///
/// * `points` - The polyline vertices
/// * `closed` - Whether to close the path with 'Z'
///
/// # Returns
///
/// An SVG path string using M and L commands.
pub fn polyline_to_svg_path<F: Float + fmt::Display>(points: &[Point2<F>], closed: bool) -> String {
    if points.is_empty() {
        return String::new();
    }

    let mut result = String::new();

    // Move to first point
    result.push_str(&format!("M {} {}", points[0].x, points[0].y));

    // Line to remaining points
    for p in &points[1..] {
        result.push_str(&format!(" L {} {}", p.x, p.y));
    }

    if closed {
        result.push_str(" Z");
    }

    result
}

/// Converts a polygon to a closed SVG path string.
pub fn polygon_to_svg_path<F: Float + fmt::Display>(polygon: &Polygon<F>) -> String {
    polyline_to_svg_path(&polygon.vertices, true)
}

/// Renders a full SVG document showing a clip operation.
///
/// The two input polygons are drawn stroked and unfilled; each
/// intersection loop is drawn filled on top. The viewBox is fitted to the
/// combined bounding box of the inputs with a small margin.
///
/// # Arguments
///
/// * `subject` - The subject polygon
/// * `clip_region` - The clip polygon
/// * `loops` - The intersection loops, as returned by [`crate::clip`]
pub fn render_clip_scene<F: Float + fmt::Display>(
    subject: &Polygon<F>,
    clip_region: &Polygon<F>,
    loops: &[Polygon<F>],
) -> String {
    let hundred = F::from(100.0).unwrap();
    let (min, max) = match scene_bounds(subject, clip_region) {
        Some(bounds) => bounds,
        None => (Point2::new(F::zero(), F::zero()), Point2::new(hundred, hundred)),
    };

    let span_x = max.x - min.x;
    let span_y = max.y - min.y;
    let margin = span_x.max(span_y) * F::from(0.05).unwrap();
    let origin_x = min.x - margin;
    let origin_y = min.y - margin;
    let two = F::one() + F::one();
    let width = span_x + two * margin;
    let height = span_y + two * margin;

    let mut body = String::new();
    body.push_str(&path_element(
        &polygon_to_svg_path(subject),
        "none",
        "#00d4ff",
    ));
    body.push_str(&path_element(
        &polygon_to_svg_path(clip_region),
        "none",
        "#ffd93d",
    ));
    for region in loops {
        body.push_str(&path_element(
            &polygon_to_svg_path(region),
            "#6bcb7780",
            "#6bcb77",
        ));
    }

    format!(
        r##"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" viewBox="{} {} {} {}">
<rect x="{}" y="{}" width="{}" height="{}" fill="#1a1a2e"/>
{}</svg>
"##,
        origin_x, origin_y, width, height, origin_x, origin_y, width, height, body
    )
}

fn path_element(d: &str, fill: &str, stroke: &str) -> String {
    format!(
        "<path d=\"{}\" fill=\"{}\" stroke=\"{}\" stroke-width=\"0.5%\"/>\n",
        d, fill, stroke
    )
}

fn scene_bounds<F: Float>(
    a: &Polygon<F>,
    b: &Polygon<F>,
) -> Option<(Point2<F>, Point2<F>)> {
    match (a.bounding_box(), b.bounding_box()) {
        (Some((a_min, a_max)), Some((b_min, b_max))) => Some((
            Point2::new(a_min.x.min(b_min.x), a_min.y.min(b_min.y)),
            Point2::new(a_max.x.max(b_max.x), a_max.y.max(b_max.y)),
        )),
        (Some(bounds), None) | (None, Some(bounds)) => Some(bounds),
        (None, None) => None,
    }
}
