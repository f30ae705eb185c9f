//! # Stonecut CAM Tools
//!
//! Turns traced point contours into machine programs.
//!
//! ## Tools Included
//!
//! - **Point Reducer**: drops near-duplicate and too-close points before emission
//! - **Contour G-Code**: scales pixel contours to millimeters and emits a cut program
//! - **Stone Cutter**: fixed rectangular cut program for a placed stone, with rotation
//! - **SVG Preview**: renders a contour as a single SVG path for on-screen checks

pub mod contour_gcode;
pub mod error;
pub mod point_reducer;
pub mod stone_cutter;
pub mod svg_preview;

pub use contour_gcode::{
    generate_gcode, scale_points, ContourGcodeGenerator, ContourGcodeParameters,
};
pub use error::{ParameterError, ParameterResult};
pub use point_reducer::{PointReducer, DEFAULT_MIN_DISTANCE, DEFAULT_REDUNDANT_TOLERANCE};
pub use stone_cutter::{
    file_name as stone_file_name, normalize_rotation, StoneCutGenerator, StoneCutParameters,
    StonePlacement,
};
pub use svg_preview::{points_to_svg, DEFAULT_SIZE as DEFAULT_PREVIEW_SIZE};
