//! Parameter sets derived from the loaded configuration.

use image::Rgb;
use stonecut_camtools::{ContourGcodeParameters, StoneCutParameters};
use stonecut_core::RasterError;
use stonecut_raster::parse_hex_color;
use stonecut_settings::Config;

/// Contour emission parameters. The canvas size is passed for aspect
/// correction only when the configuration asks for it.
pub fn contour_parameters(config: &Config) -> ContourGcodeParameters {
    let g = &config.gcode;
    let canvas = g.aspect_correction.then(|| {
        (
            config.canvas.width_px as f64,
            config.canvas.height_px as f64,
        )
    });
    ContourGcodeParameters {
        feed_rate: g.feed_rate,
        scale: g.scale,
        flip_y: g.flip_y,
        canvas,
        min_distance: g.min_distance,
        redundant_tolerance: g.redundant_tolerance,
    }
}

pub fn stone_parameters(config: &Config) -> StoneCutParameters {
    let c = &config.canvas;
    let s = &config.stone;
    StoneCutParameters {
        canvas_width_px: c.width_px as f64,
        canvas_height_px: c.height_px as f64,
        canvas_width_m: c.width_m,
        canvas_height_m: c.height_m,
        plunge_depth: s.plunge_depth,
        plunge_feed: s.plunge_feed,
        cut_feed: s.cut_feed,
        safe_z: s.safe_z,
        rotation_threshold_deg: s.rotation_threshold_deg,
    }
}

/// Default fill color and tolerance.
pub fn fill_settings(config: &Config) -> Result<(Rgb<u8>, u8), RasterError> {
    Ok((parse_hex_color(&config.fill.color)?, config.fill.tolerance))
}
