//! SVG preview of traced contours.

use stonecut_camtools::{points_to_svg, DEFAULT_PREVIEW_SIZE};
use stonecut_core::Point;

#[test]
fn test_traced_square_preview_is_closed() {
    let square: Vec<Point> = [(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0), (0.0, 0.0)]
        .into_iter()
        .map(Point::from)
        .collect();
    let (w, h) = DEFAULT_PREVIEW_SIZE;
    let svg = points_to_svg(&square, w, h);

    assert!(svg.starts_with(r#"<svg width="800" height="600""#));
    assert!(svg.contains(r#"<path d="M 0 0 L 2 0 L 2 2 L 0 2 L 0 0 Z" stroke="black""#));
    assert!(svg.ends_with("</svg>"));
}

#[test]
fn test_distant_ends_stay_open() {
    let line: Vec<Point> = [(0.0, 0.0), (50.0, 0.0), (100.0, 0.0)]
        .into_iter()
        .map(Point::from)
        .collect();
    let svg = points_to_svg(&line, 120, 10);
    assert!(svg.contains(r#"d="M 0 0 L 50 0 L 100 0""#));
}
