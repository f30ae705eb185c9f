//! Boundary extraction from a fill mask.
//!
//! Boundary pixels are filled pixels with at least one unfilled 4-neighbour
//! (pixels outside the raster count as unfilled). They are ordered into a
//! contour by walking to the nearest unvisited 8-neighbour, preferring
//! orthogonal steps over diagonal ones. When the walk dead-ends it jumps to
//! the globally nearest remaining boundary pixel, which keeps holes and
//! disjoint blobs in the output at the cost of a connecting edge.
//!
//! This is a nearest-neighbour heuristic, not a topological trace: the
//! contour may self-intersect on thin or fragmented masks.

use std::collections::HashMap;

use stonecut_core::Point;
use tracing::debug;

use crate::mask::PixelMask;

const ORTHOGONAL: [(i64, i64); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

const NEIGHBOURS: [(i64, i64); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Filled pixels touching the outside of the region, in row-major order.
pub fn boundary_pixels(mask: &PixelMask) -> Vec<(u32, u32)> {
    mask.iter()
        .filter(|&(x, y)| {
            ORTHOGONAL
                .iter()
                .any(|(dx, dy)| !mask.contains(x as i64 + dx, y as i64 + dy))
        })
        .collect()
}

/// Order pixels into a contour, starting from the first one.
///
/// If the walk ends next to where it started (within one diagonal step)
/// and has more than two points, the start point is appended to close it.
pub fn order_contour(pixels: &[(u32, u32)]) -> Vec<Point> {
    if pixels.is_empty() {
        return Vec::new();
    }

    let index: HashMap<(i64, i64), usize> = pixels
        .iter()
        .enumerate()
        .map(|(i, &(x, y))| ((x as i64, y as i64), i))
        .collect();
    let mut remaining = vec![true; pixels.len()];
    let mut left = pixels.len();

    let mut sorted = Vec::with_capacity(pixels.len() + 1);
    let mut current = 0usize;
    remaining[current] = false;
    left -= 1;
    sorted.push(current);

    let mut jumps = 0usize;
    while left > 0 {
        let (cx, cy) = (pixels[current].0 as i64, pixels[current].1 as i64);

        let mut nearest: Option<usize> = None;
        let mut min_dist = i64::MAX;
        for (dx, dy) in NEIGHBOURS {
            if let Some(&i) = index.get(&(cx + dx, cy + dy)) {
                let dist = dx * dx + dy * dy;
                if remaining[i] && dist < min_dist {
                    min_dist = dist;
                    nearest = Some(i);
                }
            }
        }

        if nearest.is_none() {
            for (i, &(x, y)) in pixels.iter().enumerate() {
                if !remaining[i] {
                    continue;
                }
                let (dx, dy) = (x as i64 - cx, y as i64 - cy);
                let dist = dx * dx + dy * dy;
                if dist < min_dist {
                    min_dist = dist;
                    nearest = Some(i);
                }
            }
            jumps += 1;
        }

        let Some(next) = nearest else {
            break;
        };
        remaining[next] = false;
        left -= 1;
        sorted.push(next);
        current = next;
    }

    if sorted.len() > 2 {
        let (fx, fy) = pixels[sorted[0]];
        let (lx, ly) = pixels[sorted[sorted.len() - 1]];
        let (dx, dy) = (lx as i64 - fx as i64, ly as i64 - fy as i64);
        if dx * dx + dy * dy <= 2 {
            sorted.push(sorted[0]);
        }
    }

    debug!(points = sorted.len(), jumps, "Ordered boundary contour");
    sorted
        .into_iter()
        .map(|i| Point::from_pixel(pixels[i].0, pixels[i].1))
        .collect()
}

/// Ordered outline of a fill mask. Empty mask gives an empty contour.
pub fn extract_boundary(mask: &PixelMask) -> Vec<Point> {
    let pixels = boundary_pixels(mask);
    debug!(
        filled = mask.len(),
        boundary = pixels.len(),
        "Classified boundary pixels"
    );
    order_contour(&pixels)
}
