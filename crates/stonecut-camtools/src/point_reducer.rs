//! Point stream reduction.
//!
//! Two passes run in a fixed order. The first collapses near-exact repeats
//! (loop closing points, repeated samples) using a per-axis tolerance. The
//! second thins points that sit closer than `min_distance` to the previously
//! kept point. Both keep the first point and preserve order.

use stonecut_core::Point;
use tracing::debug;

/// Per-axis tolerance for the redundant point pass (pixels).
pub const DEFAULT_REDUNDANT_TOLERANCE: f64 = 0.1;

/// Minimum spacing for the thinning pass (pixels).
pub const DEFAULT_MIN_DISTANCE: f64 = 0.5;

/// Contour point reducer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointReducer {
    pub redundant_tolerance: f64,
    pub min_distance: f64,
}

impl Default for PointReducer {
    fn default() -> Self {
        Self {
            redundant_tolerance: DEFAULT_REDUNDANT_TOLERANCE,
            min_distance: DEFAULT_MIN_DISTANCE,
        }
    }
}

impl PointReducer {
    pub fn new(redundant_tolerance: f64, min_distance: f64) -> Self {
        Self {
            redundant_tolerance,
            min_distance,
        }
    }

    /// Drop points within the per-axis tolerance of the last kept point.
    pub fn remove_redundant(&self, points: &[Point]) -> Vec<Point> {
        if points.len() <= 1 {
            return points.to_vec();
        }

        let mut result: Vec<Point> = Vec::with_capacity(points.len());
        result.push(points[0]);
        for point in &points[1..] {
            let last = result[result.len() - 1];
            if !point.approx_eq(&last, self.redundant_tolerance) {
                result.push(*point);
            }
        }
        result
    }

    /// Drop points closer than `min_distance` to the last kept point.
    pub fn remove_close(&self, points: &[Point]) -> Vec<Point> {
        let Some(first) = points.first() else {
            return Vec::new();
        };

        let mut result = vec![*first];
        for point in &points[1..] {
            let last = result[result.len() - 1];
            if point.distance_to(&last) >= self.min_distance {
                result.push(*point);
            }
        }
        result
    }

    /// Run both passes.
    pub fn reduce(&self, points: &[Point]) -> Vec<Point> {
        let deduped = self.remove_redundant(points);
        let reduced = self.remove_close(&deduped);
        debug!(
            input = points.len(),
            after_redundant = deduped.len(),
            output = reduced.len(),
            "Reduced point stream"
        );
        reduced
    }
}
