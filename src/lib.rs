//! # Stonecut
//!
//! Turns bucket-filled canvas regions into contour G-code, and placed stones
//! into rectangular cut programs.
//!
//! ## Architecture
//!
//! Stonecut is organized as a workspace with multiple crates:
//!
//! 1. **stonecut-core** - Points, the drawing document model, units, errors
//! 2. **stonecut-raster** - Flood fill, pixel masks, PNG codec, boundary extraction
//! 3. **stonecut-camtools** - Point reduction, contour G-code, stone cutter, SVG preview
//! 4. **stonecut-settings** - JSON/TOML configuration
//! 5. **stonecut** - Pipeline orchestration and the command line tool
//!
//! ## Pipeline
//!
//! fill operations → decode mask → boundary → concatenate → reduce → scale → G-code

pub mod cli;
pub mod params;
pub mod pipeline;

pub use params::{contour_parameters, fill_settings, stone_parameters};
pub use pipeline::{fill_at, BoundaryCache, FillPipeline, RegionTrace};

pub use stonecut_camtools::{
    ContourGcodeGenerator, ContourGcodeParameters, PointReducer, StoneCutGenerator,
    StoneCutParameters, StonePlacement,
};
pub use stonecut_core::{
    Drawing, DrawingOperation, Error, FillOperation, GcodeError, Point, RasterError, Result,
};
pub use stonecut_raster::{extract_boundary, FloodFill, PixelMask};
pub use stonecut_settings::Config;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Output on stderr, leaving stdout free for G-code
/// - RUST_LOG environment variable support
/// - INFO level unless overridden
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(tracing::Level::INFO.to_string()));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .compact();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
