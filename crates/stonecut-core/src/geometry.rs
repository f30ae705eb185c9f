//! Pixel-space geometry primitives.

use serde::{Deserialize, Serialize};

/// A 2-D point in canvas pixel space (Y grows downward).
///
/// Points are plain values. Equality used by the toolpath stages is
/// threshold based, see [`Point::approx_eq`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point at the given integer pixel coordinate.
    pub fn from_pixel(x: u32, y: u32) -> Self {
        Self {
            x: x as f64,
            y: y as f64,
        }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// True when both axis deltas are strictly below `tolerance`.
    pub fn approx_eq(&self, other: &Point, tolerance: f64) -> bool {
        (self.x - other.x).abs() < tolerance && (self.y - other.y).abs() < tolerance
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}
