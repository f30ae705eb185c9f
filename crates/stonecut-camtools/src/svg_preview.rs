//! SVG preview of a traced contour.

use stonecut_core::Point;

/// Default preview size, matching the drawing canvas.
pub const DEFAULT_SIZE: (u32, u32) = (800, 600);

/// Paths whose ends are closer than this (px) are closed with `Z`.
const CLOSE_DISTANCE: f64 = 5.0;

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Render `points` as a single stroked path on a `width` x `height` canvas.
///
/// Empty input gives an empty `<svg>` element.
pub fn points_to_svg(points: &[Point], width: u32, height: u32) -> String {
    let Some(first) = points.first() else {
        return format!(
            r#"<svg width="{}" height="{}" xmlns="{}"></svg>"#,
            width, height, SVG_NS
        );
    };

    let mut d = format!("M {} {}", first.x, first.y);
    for p in &points[1..] {
        d.push_str(&format!(" L {} {}", p.x, p.y));
    }

    if points.len() > 2 {
        let last = points[points.len() - 1];
        if first.distance_to(&last) < CLOSE_DISTANCE {
            d.push_str(" Z");
        }
    }

    format!(
        "<svg width=\"{}\" height=\"{}\" xmlns=\"{}\">\n  <path d=\"{}\" stroke=\"black\" stroke-width=\"2\" fill=\"none\"/>\n</svg>",
        width, height, SVG_NS, d
    )
}
