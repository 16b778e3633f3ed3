//! Generates SVG visualizations of clip results.
//!
//! Run with: cargo run --example visualize

use clip2d::io::render_clip_scene;
use clip2d::polygon::Polygon;
use clip2d::sampling::random_simple_polygon;
use clip2d::{clip, Point2};

use std::fs;

fn main() {
    fs::create_dir_all("screenshots").unwrap();
    generate_squares();
    generate_concave();
    generate_random();
    println!("Generated all screenshots in screenshots/");
}

fn save_scene(path: &str, subject: &Polygon<f64>, clip_region: &Polygon<f64>) {
    let loops = clip(subject, clip_region).unwrap();
    let svg = render_clip_scene(subject, clip_region, &loops);
    fs::write(path, svg).unwrap();
    println!("Generated {} ({} loops)", path, loops.len());
}

fn generate_squares() {
    let subject = Polygon::new(vec![
        Point2::new(10.0, 10.0),
        Point2::new(60.0, 10.0),
        Point2::new(60.0, 60.0),
        Point2::new(10.0, 60.0),
    ]);
    let clip_region = Polygon::new(vec![
        Point2::new(40.0, 40.0),
        Point2::new(90.0, 40.0),
        Point2::new(90.0, 90.0),
        Point2::new(40.0, 90.0),
    ]);

    save_scene("screenshots/clip_squares.svg", &subject, &clip_region);
}

fn generate_concave() {
    // U-shaped subject crossed by a horizontal bar, yielding two loops
    let subject = Polygon::new(vec![
        Point2::new(10.0, 10.0),
        Point2::new(90.0, 10.0),
        Point2::new(90.0, 90.0),
        Point2::new(65.0, 90.0),
        Point2::new(65.0, 35.0),
        Point2::new(35.0, 35.0),
        Point2::new(35.0, 90.0),
        Point2::new(10.0, 90.0),
    ]);
    let clip_region = Polygon::new(vec![
        Point2::new(0.0, 50.0),
        Point2::new(100.0, 50.0),
        Point2::new(100.0, 70.0),
        Point2::new(0.0, 70.0),
    ]);

    save_scene("screenshots/clip_concave.svg", &subject, &clip_region);
}

fn generate_random() {
    let subject = random_simple_polygon(100.0, 100.0, 9, 7);
    let clip_region = random_simple_polygon(100.0, 100.0, 7, 21);

    save_scene("screenshots/clip_random.svg", &subject, &clip_region);
}
