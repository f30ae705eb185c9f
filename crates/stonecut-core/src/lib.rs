//! # Stonecut Core
//!
//! Core types shared by every Stonecut crate: the pixel-space [`Point`],
//! the drawing document model produced by the canvas, unit helpers and the
//! error taxonomy.

pub mod drawing;
pub mod error;
pub mod geometry;
pub mod units;

pub use drawing::{Drawing, DrawingOperation, FillOperation, StrokeOperation};
pub use error::{Error, GcodeError, RasterError, Result};
pub use geometry::Point;
