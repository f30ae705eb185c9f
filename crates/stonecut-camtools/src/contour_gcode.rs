//! Contour G-code emitter.
//!
//! Converts a traced pixel contour into a single cut program: reduce the
//! point stream, scale pixels to millimeters, optionally flip Y for machines
//! with a Y-up origin, then emit one rapid to the start followed by feed moves.

use serde::{Deserialize, Serialize};
use stonecut_core::units::format_fixed;
use stonecut_core::Point;
use tracing::{debug, info};

use crate::error::{ParameterError, ParameterResult};
use crate::point_reducer::{PointReducer, DEFAULT_MIN_DISTANCE, DEFAULT_REDUNDANT_TOLERANCE};

/// Moves shorter than this on both axes (mm) are not emitted.
const MIN_MOVE_MM: f64 = 0.001;

/// Parameters for contour G-code generation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContourGcodeParameters {
    /// Feed rate for cutting moves (mm/min)
    pub feed_rate: f64,
    /// Millimeters per pixel along X
    pub scale: f64,
    /// Mirror Y so the lowest canvas row becomes Y0
    pub flip_y: bool,
    /// Canvas size in pixels `(width, height)`. When present, the Y scale is
    /// corrected by `height / width`.
    pub canvas: Option<(f64, f64)>,
    /// Minimum spacing between kept points (pixels)
    pub min_distance: f64,
    /// Per-axis tolerance for collapsing repeated points (pixels)
    pub redundant_tolerance: f64,
}

impl Default for ContourGcodeParameters {
    fn default() -> Self {
        Self {
            feed_rate: 1500.0,
            scale: 0.1,
            flip_y: true,
            canvas: None,
            min_distance: DEFAULT_MIN_DISTANCE,
            redundant_tolerance: DEFAULT_REDUNDANT_TOLERANCE,
        }
    }
}

impl ContourGcodeParameters {
    pub fn validate(&self) -> ParameterResult<()> {
        ParameterError::require_positive("feed_rate", self.feed_rate)?;
        ParameterError::require_positive("scale", self.scale)?;
        ParameterError::require_positive("min_distance", self.min_distance)?;
        ParameterError::require_positive("redundant_tolerance", self.redundant_tolerance)?;
        if let Some((width, height)) = self.canvas {
            if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
                return Err(ParameterError::InvalidDimensions(format!(
                    "canvas must be positive, got {}x{}",
                    width, height
                )));
            }
        }
        Ok(())
    }

    /// Millimeters per pixel along Y.
    ///
    /// A canvas with a zero side is treated as absent.
    pub fn y_scale(&self) -> f64 {
        match self.canvas {
            Some((width, height)) if width != 0.0 && height != 0.0 => {
                self.scale * (height / width)
            }
            _ => self.scale,
        }
    }

    fn reducer(&self) -> PointReducer {
        PointReducer::new(self.redundant_tolerance, self.min_distance)
    }
}

/// Scale pixel points to millimeters.
///
/// With `flip_y`, each Y becomes `max_y * y_scale - y * y_scale`, where
/// `max_y` is the largest unscaled Y of the input.
pub fn scale_points(points: &[Point], x_scale: f64, y_scale: f64, flip_y: bool) -> Vec<Point> {
    let max_y = points
        .iter()
        .map(|p| p.y)
        .fold(f64::NEG_INFINITY, f64::max);

    points
        .iter()
        .map(|p| {
            let y = if flip_y {
                max_y * y_scale - p.y * y_scale
            } else {
                p.y * y_scale
            };
            Point::new(p.x * x_scale, y)
        })
        .collect()
}

/// Generator for contour G-code
#[derive(Debug, Clone)]
pub struct ContourGcodeGenerator {
    params: ContourGcodeParameters,
}

impl ContourGcodeGenerator {
    /// Create a generator, rejecting invalid parameters.
    pub fn new(params: ContourGcodeParameters) -> ParameterResult<Self> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn params(&self) -> &ContourGcodeParameters {
        &self.params
    }

    /// Generate the program for `points` (canvas pixels).
    ///
    /// Returns an empty string when there are no points. Lines are joined
    /// with `\n` and there is no trailing newline.
    pub fn generate(&self, points: &[Point]) -> String {
        if points.is_empty() {
            return String::new();
        }

        let p = &self.params;
        let reduced = p.reducer().reduce(points);
        let scaled = scale_points(&reduced, p.scale, p.y_scale(), p.flip_y);
        let Some(first) = scaled.first() else {
            return String::new();
        };

        let mut lines = vec![
            "G21".to_string(),
            "G90".to_string(),
            format!("G1 F{}", p.feed_rate),
            format!("G0 X{} Y{}", format_fixed(first.x, 3), format_fixed(first.y, 3)),
            "M3".to_string(),
        ];

        let mut last = *first;
        let mut skipped = 0usize;
        for point in &scaled[1..] {
            if (point.x - last.x).abs() > MIN_MOVE_MM || (point.y - last.y).abs() > MIN_MOVE_MM {
                lines.push(format!(
                    "G1 X{} Y{}",
                    format_fixed(point.x, 3),
                    format_fixed(point.y, 3)
                ));
                last = *point;
            } else {
                skipped += 1;
            }
        }

        lines.push("M5".to_string());
        lines.push("G0 X0 Y0".to_string());

        debug!(skipped, "Dropped zero-length moves");
        info!(
            points = points.len(),
            reduced = reduced.len(),
            lines = lines.len(),
            "Generated contour G-code"
        );
        lines.join("\n")
    }
}

/// Generate a contour program without parameter validation.
///
/// Never fails: empty input yields an empty string.
pub fn generate_gcode(
    points: &[Point],
    feed_rate: f64,
    scale: f64,
    flip_y: bool,
    canvas: Option<(f64, f64)>,
) -> String {
    let generator = ContourGcodeGenerator {
        params: ContourGcodeParameters {
            feed_rate,
            scale,
            flip_y,
            canvas,
            ..ContourGcodeParameters::default()
        },
    };
    generator.generate(points)
}
