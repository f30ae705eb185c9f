//! Error handling for Stonecut
//!
//! Provides error types for the layers of the raster-to-toolpath pipeline:
//! - Raster errors (flood fill input, mask encoding/decoding)
//! - G-Code errors (program generation)
//!
//! All error types use `thiserror` for ergonomic error handling. Designed
//! no-ops (a fill on an already filled pixel, an empty point set) are not
//! errors and are signalled with `None` or empty output instead.

use thiserror::Error;

/// Raster error type
///
/// Represents failures while reading a canvas snapshot or a fill mask.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RasterError {
    /// Flood fill seed does not lie inside the raster
    #[error("Seed ({x}, {y}) outside raster of {width}x{height}")]
    SeedOutOfBounds {
        /// Seed X coordinate.
        x: u32,
        /// Seed Y coordinate.
        y: u32,
        /// Raster width in pixels.
        width: u32,
        /// Raster height in pixels.
        height: u32,
    },

    /// Encoded image could not be decoded into pixels
    #[error("Failed to decode image: {reason}")]
    Decode {
        /// The reason decoding failed.
        reason: String,
    },

    /// Pixels could not be encoded into an image
    #[error("Failed to encode image: {reason}")]
    Encode {
        /// The reason encoding failed.
        reason: String,
    },

    /// Color string is not a recognised hex color
    #[error("Invalid color '{value}'")]
    InvalidColor {
        /// The rejected color string.
        value: String,
    },

    /// Raw pixel buffer does not match the declared dimensions
    #[error("Buffer of {actual} bytes does not match {width}x{height} RGBA")]
    DimensionMismatch {
        /// Declared width.
        width: u32,
        /// Declared height.
        height: u32,
        /// Actual buffer length.
        actual: usize,
    },
}

/// G-Code error type
///
/// Represents errors while producing a G-code program.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GcodeError {
    /// Invalid generation parameter
    #[error("Invalid parameter '{param}': {reason}")]
    InvalidParameter {
        /// The parameter name.
        param: String,
        /// The reason the parameter is invalid.
        reason: String,
    },

    /// Nothing drawable was supplied
    #[error("No drawable points")]
    NothingToGenerate,
}

/// Main error type for Stonecut
///
/// A unified error type that can represent any error from the core layers.
#[derive(Error, Debug)]
pub enum Error {
    /// Raster error
    #[error(transparent)]
    Raster(#[from] RasterError),

    /// G-Code error
    #[error(transparent)]
    Gcode(#[from] GcodeError),

    /// Drawing document could not be parsed
    #[error("Invalid drawing document: {0}")]
    Document(#[from] serde_json::Error),

    /// Drawing document could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Check if this is a decode failure
    pub fn is_decode_error(&self) -> bool {
        matches!(self, Error::Raster(RasterError::Decode { .. }))
    }

    /// Check if this is a raster error
    pub fn is_raster_error(&self) -> bool {
        matches!(self, Error::Raster(_))
    }

    /// Check if this is a G-Code error
    pub fn is_gcode_error(&self) -> bool {
        matches!(self, Error::Gcode(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
