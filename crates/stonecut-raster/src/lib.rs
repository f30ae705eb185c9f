//! # Stonecut Raster
//!
//! Raster side of the toolpath pipeline:
//!
//! - **Flood Fill**: stack based 4-connected region fill over a canvas snapshot
//! - **Pixel Mask**: the filled pixel set of one region, with image conversion
//! - **Codec**: PNG / base64 data URL encoding of masks and canvas snapshots
//! - **Boundary**: edge pixel detection and nearest-neighbour contour ordering

pub mod boundary;
pub mod codec;
pub mod color;
pub mod flood_fill;
pub mod mask;

pub use boundary::{boundary_pixels, extract_boundary, order_contour};
pub use codec::{
    decode_image, decode_image_bytes, decode_mask, encode_mask_png, encode_png, raster_from_raw,
};
pub use color::parse_hex_color;
pub use flood_fill::{flood_fill, FloodFill, DEFAULT_TOLERANCE};
pub use mask::PixelMask;
