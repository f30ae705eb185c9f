//! Stone rectangle cutter.
//!
//! Emits a fixed rectangular cut around a stone placed on the canvas. The
//! placement is in canvas pixels; each axis is converted to meters with its
//! own factor (the canvas has a fixed pixel size but a configurable physical
//! size) and then to millimeters for the program.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use stonecut_core::units::{format_fixed, meters_to_mm, CanvasScale};
use tracing::info;

use crate::error::{ParameterError, ParameterResult};

/// A stone placed on the canvas, in pixels.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StonePlacement {
    /// Identifier echoed in the program header
    pub id: String,
    /// Center X (px)
    pub x: f64,
    /// Center Y (px)
    pub y: f64,
    /// Width (px)
    pub width: f64,
    /// Height (px)
    pub height: f64,
    /// Rotation about the center (degrees)
    #[serde(default)]
    pub rotation: f64,
}

/// Parameters for the stone cut program
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoneCutParameters {
    /// Canvas width (px)
    pub canvas_width_px: f64,
    /// Canvas height (px)
    pub canvas_height_px: f64,
    /// Physical canvas width (m)
    pub canvas_width_m: f64,
    /// Physical canvas height (m)
    pub canvas_height_m: f64,
    /// Cutting depth (mm)
    pub plunge_depth: f64,
    /// Feed rate for the plunge (mm/min)
    pub plunge_feed: f64,
    /// Feed rate along the rectangle edges (mm/min)
    pub cut_feed: f64,
    /// Retract height (mm)
    pub safe_z: f64,
    /// Rotations at or below this magnitude (degrees) are not applied
    pub rotation_threshold_deg: f64,
}

impl Default for StoneCutParameters {
    fn default() -> Self {
        Self {
            canvas_width_px: 800.0,
            canvas_height_px: 600.0,
            canvas_width_m: 8.0,
            canvas_height_m: 6.0,
            plunge_depth: -5.0,
            plunge_feed: 100.0,
            cut_feed: 500.0,
            safe_z: 5.0,
            rotation_threshold_deg: 0.1,
        }
    }
}

impl StoneCutParameters {
    pub fn validate(&self) -> ParameterResult<()> {
        for (name, value) in [
            ("canvas_width_px", self.canvas_width_px),
            ("canvas_height_px", self.canvas_height_px),
            ("canvas_width_m", self.canvas_width_m),
            ("canvas_height_m", self.canvas_height_m),
            ("plunge_feed", self.plunge_feed),
            ("cut_feed", self.cut_feed),
        ] {
            ParameterError::require_positive(name, value)?;
        }
        if self.rotation_threshold_deg < 0.0 {
            return Err(ParameterError::OutOfRange {
                name: "rotation_threshold_deg".to_string(),
                value: self.rotation_threshold_deg,
                min: 0.0,
                max: 180.0,
            });
        }
        Ok(())
    }

    pub fn canvas_scale(&self) -> CanvasScale {
        CanvasScale::new(
            self.canvas_width_px,
            self.canvas_height_px,
            self.canvas_width_m,
            self.canvas_height_m,
        )
    }
}

/// Map an angle into [-180, 180] degrees.
pub fn normalize_rotation(degrees: f64) -> f64 {
    let r = degrees % 360.0;
    if r > 180.0 {
        r - 360.0
    } else if r < -180.0 {
        r + 360.0
    } else {
        r
    }
}

/// `stone_<n>_<w>m_x_<h>m_<YYYY-MM-DD>.gcode`, with `number` starting at 1.
pub fn file_name(number: usize, width_m: f64, height_m: f64, date: NaiveDate) -> String {
    format!(
        "stone_{}_{}m_x_{}m_{}.gcode",
        number,
        format_fixed(width_m, 3),
        format_fixed(height_m, 3),
        date.format("%Y-%m-%d")
    )
}

// Half-up rounding for the header's whole-degree rotation.
fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// Generator for stone rectangle programs
#[derive(Debug, Clone)]
pub struct StoneCutGenerator {
    params: StoneCutParameters,
}

impl StoneCutGenerator {
    /// Create a generator, rejecting invalid parameters.
    pub fn new(params: StoneCutParameters) -> ParameterResult<Self> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn params(&self) -> &StoneCutParameters {
        &self.params
    }

    /// Physical stone size in meters `(width, height)`.
    pub fn size_m(&self, stone: &StonePlacement) -> (f64, f64) {
        let scale = self.params.canvas_scale();
        (scale.x_to_meters(stone.width), scale.y_to_meters(stone.height))
    }

    /// File name for the program of stone `number` (1-based).
    pub fn file_name(&self, number: usize, stone: &StonePlacement, date: NaiveDate) -> String {
        let (width_m, height_m) = self.size_m(stone);
        file_name(number, width_m, height_m, date)
    }

    /// Generate the cut program for stone `number` (1-based).
    pub fn generate(&self, number: usize, stone: &StonePlacement) -> ParameterResult<String> {
        if !(stone.width > 0.0 && stone.height > 0.0) {
            return Err(ParameterError::InvalidDimensions(format!(
                "stone size must be positive, got {}x{} px",
                stone.width, stone.height
            )));
        }

        let p = &self.params;
        let scale = p.canvas_scale();
        let x_m = scale.x_to_meters(stone.x);
        let y_m = scale.y_to_meters(stone.y);
        let (width_m, height_m) = self.size_m(stone);

        let x = meters_to_mm(x_m);
        let y = meters_to_mm(y_m);
        let half_w = meters_to_mm(width_m) / 2.0;
        let half_h = meters_to_mm(height_m) / 2.0;
        let rotated = stone.rotation.abs() > p.rotation_threshold_deg;
        let mm = |v: f64| format_fixed(v, 2);

        let mut gcode = String::new();

        // Header
        gcode.push_str("; G-code generated for stone cutting\n");
        gcode.push_str(&format!("; Stone {} (ID: {})\n", number, stone.id));
        gcode.push_str(&format!(
            "; Position: X={}m, Y={}m\n",
            format_fixed(x_m, 3),
            format_fixed(y_m, 3)
        ));
        gcode.push_str(&format!(
            "; Size: W={}m, H={}m\n",
            format_fixed(width_m, 3),
            format_fixed(height_m, 3)
        ));
        gcode.push_str(&format!(
            "; Rotation: {} degrees\n",
            round_half_up(stone.rotation)
        ));
        gcode.push_str(";\n");
        gcode.push_str("G21 ; Set units to millimeters\n");
        gcode.push_str("G90 ; Set to absolute positioning\n");
        gcode.push_str("G28 ; Home all axes\n");
        gcode.push_str(";\n");

        gcode.push_str(&format!(
            "G0 X{} Y{} ; Move to stone position\n",
            mm(x),
            mm(y)
        ));
        if rotated {
            gcode.push_str(&format!(
                "G68 X{} Y{} R{} ; Rotate coordinate system\n",
                mm(x),
                mm(y),
                mm(stone.rotation)
            ));
        }

        // Rectangle, counter-clockwise from the bottom-left corner
        gcode.push_str(&format!(
            "G0 X{} Y{} ; Move to start position (bottom-left)\n",
            mm(x - half_w),
            mm(y - half_h)
        ));
        gcode.push_str(&format!(
            "G1 Z{} F{} ; Lower tool (adjust Z and feed rate as needed)\n",
            p.plunge_depth, p.plunge_feed
        ));
        let edges = [
            (x + half_w, y - half_h, "Cut to right"),
            (x + half_w, y + half_h, "Cut to top"),
            (x - half_w, y + half_h, "Cut to left"),
            (x - half_w, y - half_h, "Cut to bottom (close rectangle)"),
        ];
        for (ex, ey, label) in edges {
            gcode.push_str(&format!(
                "G1 X{} Y{} F{} ; {}\n",
                mm(ex),
                mm(ey),
                p.cut_feed,
                label
            ));
        }
        gcode.push_str(&format!("G0 Z{} ; Raise tool\n", p.safe_z));
        if rotated {
            gcode.push_str("G69 ; Cancel rotation\n");
        }

        gcode.push_str(";\n");
        gcode.push_str("G28 ; Home all axes\n");
        gcode.push_str("M30 ; Program end and rewind\n");

        info!(
            stone = number,
            id = %stone.id,
            width_m,
            height_m,
            rotated,
            "Generated stone cut program"
        );
        Ok(gcode)
    }
}
