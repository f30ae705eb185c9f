//! Bucket fill over a canvas snapshot.
//!
//! A pixel joins the region when each RGB channel is within the tolerance of
//! the seed's original color, or when it is pure white. White is the untouched
//! canvas background, so fills spread through blank space and stop at drawn
//! strokes of any other color.

use image::{Rgb, Rgba, RgbaImage};
use stonecut_core::RasterError;
use tracing::debug;

use crate::mask::PixelMask;

/// Per-channel color tolerance used by the canvas bucket tool.
pub const DEFAULT_TOLERANCE: u8 = 10;

const WHITE: [u8; 3] = [255, 255, 255];

/// Flood fill configuration.
#[derive(Debug, Clone, Copy)]
pub struct FloodFill {
    tolerance: u8,
}

impl Default for FloodFill {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl FloodFill {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tolerance(mut self, tolerance: u8) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn tolerance(&self) -> u8 {
        self.tolerance
    }

    /// Fill the region connected to `seed`.
    ///
    /// Returns `Ok(None)` when the seed already has exactly `fill_color`:
    /// there is nothing to add. The raster is only read.
    pub fn fill(
        &self,
        raster: &RgbaImage,
        seed: (u32, u32),
        fill_color: Rgb<u8>,
    ) -> Result<Option<PixelMask>, RasterError> {
        let (width, height) = raster.dimensions();
        let (sx, sy) = seed;
        if sx >= width || sy >= height {
            return Err(RasterError::SeedOutOfBounds {
                x: sx,
                y: sy,
                width,
                height,
            });
        }

        let Rgba([r, g, b, _]) = *raster.get_pixel(sx, sy);
        let target = [r, g, b];
        if target == fill_color.0 {
            debug!(x = sx, y = sy, "Seed already has fill color, nothing to fill");
            return Ok(None);
        }

        let mut visited = PixelMask::new(width, height);
        let mut stack: Vec<(u32, u32)> = vec![seed];

        while let Some((x, y)) = stack.pop() {
            if visited.contains(x as i64, y as i64) {
                continue;
            }
            if !self.matches(raster.get_pixel(x, y), target) {
                continue;
            }
            visited.insert(x, y);

            if x > 0 {
                stack.push((x - 1, y));
            }
            if x + 1 < width {
                stack.push((x + 1, y));
            }
            if y > 0 {
                stack.push((x, y - 1));
            }
            if y + 1 < height {
                stack.push((x, y + 1));
            }
        }

        debug!(
            x = sx,
            y = sy,
            pixels = visited.len(),
            "Flood fill complete"
        );
        Ok(Some(visited))
    }

    fn matches(&self, pixel: &Rgba<u8>, target: [u8; 3]) -> bool {
        let rgb = [pixel[0], pixel[1], pixel[2]];
        if rgb == WHITE {
            return true;
        }
        rgb.iter()
            .zip(target.iter())
            .all(|(c, t)| c.abs_diff(*t) <= self.tolerance)
    }
}

/// Flood fill with the default tolerance.
pub fn flood_fill(
    raster: &RgbaImage,
    seed: (u32, u32),
    fill_color: Rgb<u8>,
) -> Result<Option<PixelMask>, RasterError> {
    FloodFill::default().fill(raster, seed, fill_color)
}
