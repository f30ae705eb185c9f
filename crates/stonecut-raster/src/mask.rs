//! Filled pixel sets.

use image::{Rgb, Rgba, RgbaImage};

/// The set of filled pixels of one region, bounded by the source raster.
///
/// Backed by a row-major occupancy grid so membership tests are O(1) and
/// iteration order is deterministic (top to bottom, left to right).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelMask {
    width: u32,
    height: u32,
    cells: Vec<bool>,
    len: usize,
}

impl PixelMask {
    /// Empty mask covering a `width` x `height` raster.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            cells: vec![false; width as usize * height as usize],
            len: 0,
        }
    }

    /// Mask from explicit pixel coordinates. Out-of-bounds pixels are dropped.
    pub fn from_pixels<I>(width: u32, height: u32, pixels: I) -> Self
    where
        I: IntoIterator<Item = (u32, u32)>,
    {
        let mut mask = Self::new(width, height);
        for (x, y) in pixels {
            mask.insert(x, y);
        }
        mask
    }

    /// Mask of every pixel that is drawn: alpha above zero and not pure white.
    pub fn from_image(image: &RgbaImage) -> Self {
        let mut mask = Self::new(image.width(), image.height());
        for (x, y, px) in image.enumerate_pixels() {
            let Rgba([r, g, b, a]) = *px;
            if a > 0 && !(r == 255 && g == 255 && b == 255) {
                mask.insert(x, y);
            }
        }
        mask
    }

    /// Render the mask: filled pixels in `color` at full alpha, the rest transparent.
    pub fn to_image(&self, color: Rgb<u8>) -> RgbaImage {
        let Rgb([r, g, b]) = color;
        let mut image = RgbaImage::new(self.width, self.height);
        for (x, y) in self.iter() {
            image.put_pixel(x, y, Rgba([r, g, b, 255]));
        }
        image
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn index(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    /// Membership test; coordinates outside the raster count as unfilled.
    pub fn contains(&self, x: i64, y: i64) -> bool {
        self.index(x, y).is_some_and(|i| self.cells[i])
    }

    /// Mark a pixel filled. Returns false when it was already filled or out of bounds.
    pub fn insert(&mut self, x: u32, y: u32) -> bool {
        match self.index(x as i64, y as i64) {
            Some(i) if !self.cells[i] => {
                self.cells[i] = true;
                self.len += 1;
                true
            }
            _ => false,
        }
    }

    /// Filled pixels in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        let width = self.width as usize;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, filled)| **filled)
            .map(move |(i, _)| ((i % width) as u32, (i / width) as u32))
    }
}
