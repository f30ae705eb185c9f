//! Mask and canvas snapshot encoding.
//!
//! Fill masks are persisted as PNG images wrapped in a base64 data URL,
//! the same form a browser canvas hands out. Decoding accepts either the
//! full data URL or the bare base64 payload.

use std::io::Cursor;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use image::{ImageFormat, RgbaImage};
use stonecut_core::RasterError;

use crate::mask::PixelMask;

const PNG_DATA_URL_PREFIX: &str = "data:image/png;base64,";

/// Wrap raw RGBA bytes (row-major, 4 bytes per pixel) as an image.
pub fn raster_from_raw(width: u32, height: u32, data: Vec<u8>) -> Result<RgbaImage, RasterError> {
    let actual = data.len();
    RgbaImage::from_raw(width, height, data).ok_or(RasterError::DimensionMismatch {
        width,
        height,
        actual,
    })
}

/// Encode an image as PNG bytes.
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>, RasterError> {
    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .map_err(|e| RasterError::Encode {
            reason: e.to_string(),
        })?;
    Ok(bytes)
}

/// Encode an image as a `data:image/png;base64,...` URL.
pub fn encode_mask_png(image: &RgbaImage) -> Result<String, RasterError> {
    let bytes = encode_png(image)?;
    Ok(format!("{}{}", PNG_DATA_URL_PREFIX, STANDARD.encode(bytes)))
}

/// Strip a data URL header, leaving the base64 payload.
fn base64_payload(encoded: &str) -> Result<&str, RasterError> {
    let encoded = encoded.trim();
    let Some(rest) = encoded.strip_prefix("data:") else {
        return Ok(encoded);
    };
    let (header, payload) = rest.split_once(',').ok_or_else(|| RasterError::Decode {
        reason: "data URL has no payload".to_string(),
    })?;
    if !header.ends_with(";base64") {
        return Err(RasterError::Decode {
            reason: format!("unsupported data URL encoding '{}'", header),
        });
    }
    Ok(payload)
}

/// Decode a base64 image (data URL or bare payload) into RGBA pixels.
pub fn decode_image(encoded: &str) -> Result<RgbaImage, RasterError> {
    let payload = base64_payload(encoded)?;
    let bytes = STANDARD.decode(payload).map_err(|e| RasterError::Decode {
        reason: e.to_string(),
    })?;
    decode_image_bytes(&bytes)
}

/// Decode encoded image bytes (PNG or any format `image` recognises).
pub fn decode_image_bytes(bytes: &[u8]) -> Result<RgbaImage, RasterError> {
    let image = image::load_from_memory(bytes).map_err(|e| RasterError::Decode {
        reason: e.to_string(),
    })?;
    Ok(image.to_rgba8())
}

/// Decode a stored fill mask straight into its pixel set.
pub fn decode_mask(encoded: &str) -> Result<PixelMask, RasterError> {
    decode_image(encoded).map(|image| PixelMask::from_image(&image))
}
