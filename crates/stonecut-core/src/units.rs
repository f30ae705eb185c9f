//! Unit conversion utilities
//!
//! The canvas works in pixels while the machine works in millimeters. A
//! canvas has a fixed pixel size and an independently configured real-world
//! size in meters, so the conversion factor differs per axis.

/// Millimeters per meter.
pub const MM_PER_METER: f64 = 1000.0;

/// Per-axis pixel to meter factors for a canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasScale {
    /// Meters per pixel along X
    pub meters_per_px_x: f64,
    /// Meters per pixel along Y
    pub meters_per_px_y: f64,
}

impl CanvasScale {
    /// Derive factors from the canvas size in pixels and in meters.
    pub fn new(width_px: f64, height_px: f64, width_m: f64, height_m: f64) -> Self {
        Self {
            meters_per_px_x: width_m / width_px,
            meters_per_px_y: height_m / height_px,
        }
    }

    pub fn x_to_meters(&self, px: f64) -> f64 {
        px * self.meters_per_px_x
    }

    pub fn y_to_meters(&self, px: f64) -> f64 {
        px * self.meters_per_px_y
    }
}

/// Convert meters to millimeters
pub fn meters_to_mm(meters: f64) -> f64 {
    meters * MM_PER_METER
}

/// Format a coordinate with fixed decimals, never printing `-0.000`.
pub fn format_fixed(value: f64, decimals: usize) -> String {
    let s = format!("{:.*}", decimals, value);
    match s.strip_prefix('-') {
        Some(rest) if rest.bytes().all(|b| b == b'0' || b == b'.') => rest.to_string(),
        _ => s,
    }
}
