//! Command line interface.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use clap::{Args, Parser, Subcommand};
use stonecut_camtools::{
    normalize_rotation, points_to_svg, ContourGcodeGenerator, StoneCutGenerator, StonePlacement,
};
use stonecut_core::units::format_fixed;
use stonecut_core::{Drawing, DrawingOperation, GcodeError};
use stonecut_raster::{
    decode_image, decode_image_bytes, encode_png, extract_boundary, parse_hex_color, PixelMask,
};
use stonecut_settings::Config;
use tracing::info;

use crate::params::{contour_parameters, fill_settings, stone_parameters};
use crate::pipeline::{fill_at, FillPipeline};

#[derive(Debug, Parser)]
#[command(
    name = "stonecut",
    version,
    about = "Canvas fills to contour G-code and stone cut programs"
)]
pub struct Cli {
    /// Configuration file (.toml or .json). Defaults to the user config if present.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Bucket fill a canvas image and write the region mask
    Fill(FillArgs),
    /// Trace a mask image into contour G-code
    Trace(TraceArgs),
    /// Generate one contour program from every fill in a drawing
    Project(ProjectArgs),
    /// Generate a rectangle cut program for a placed stone
    Stone(StoneArgs),
}

#[derive(Debug, Args)]
pub struct FillArgs {
    /// Canvas snapshot (PNG, JPEG, BMP)
    #[arg(short, long)]
    pub input: PathBuf,

    /// Seed pixel as X,Y
    #[arg(short, long, value_parser = parse_seed)]
    pub seed: (u32, u32),

    /// Fill color (#rrggbb)
    #[arg(short, long)]
    pub color: Option<String>,

    /// Per-channel color tolerance
    #[arg(short, long)]
    pub tolerance: Option<u8>,

    /// Mask PNG output path
    #[arg(short, long)]
    pub output: PathBuf,

    /// Drawing document to append the fill operation to (created if missing)
    #[arg(long)]
    pub drawing: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct TraceArgs {
    /// Mask image: drawn pixels are opaque and not white
    #[arg(short, long)]
    pub input: PathBuf,

    /// Also write an SVG preview of the boundary
    #[arg(long)]
    pub svg: Option<PathBuf>,

    /// G-code output path (stdout if omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct ProjectArgs {
    /// Drawing document (JSON)
    #[arg(short, long)]
    pub input: PathBuf,

    /// Directory for the generated program
    #[arg(long, default_value = ".")]
    pub output_dir: PathBuf,

    /// File name prefix
    #[arg(long, default_value = "drawing")]
    pub name: String,
}

#[derive(Debug, Args)]
pub struct StoneArgs {
    /// Center X (px)
    #[arg(long, allow_hyphen_values = true)]
    pub x: f64,

    /// Center Y (px)
    #[arg(long, allow_hyphen_values = true)]
    pub y: f64,

    /// Width (px)
    #[arg(long)]
    pub width: f64,

    /// Height (px)
    #[arg(long)]
    pub height: f64,

    /// Rotation (degrees)
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    pub rotation: f64,

    /// Stone number, starting at 1
    #[arg(long, default_value = "1")]
    pub index: usize,

    /// Stone identifier for the program header
    #[arg(long)]
    pub id: Option<String>,

    /// Write `stone_<n>_..._<date>.gcode` here instead of stdout
    #[arg(long)]
    pub output_dir: Option<PathBuf>,
}

/// Parse `X,Y` into a pixel coordinate.
pub fn parse_seed(value: &str) -> std::result::Result<(u32, u32), String> {
    let (x, y) = value
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got '{}'", value))?;
    let x = x.trim().parse().map_err(|e| format!("bad X '{}': {}", x, e))?;
    let y = y.trim().parse().map_err(|e| format!("bad Y '{}': {}", y, e))?;
    Ok((x, y))
}

/// `<base>_<w>m_x_<h>m_<YYYY-MM-DD>.gcode`
pub fn project_file_name(base: &str, width_m: f64, height_m: f64, date: NaiveDate) -> String {
    format!(
        "{}_{}m_x_{}m_{}.gcode",
        base,
        format_fixed(width_m, 3),
        format_fixed(height_m, 3),
        date.format("%Y-%m-%d")
    )
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}

fn write_output(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
}

fn read_raster(path: &Path) -> Result<image::RgbaImage> {
    let bytes = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    decode_image_bytes(&bytes).with_context(|| format!("Failed to decode {}", path.display()))
}

/// Execute a parsed command line.
pub fn run(cli: Cli) -> Result<()> {
    let config = Config::load_or_default(cli.config.as_deref()).context("Failed to load config")?;

    match cli.command {
        Command::Fill(args) => run_fill(&config, args),
        Command::Trace(args) => run_trace(&config, args),
        Command::Project(args) => run_project(&config, args).map(|_| ()),
        Command::Stone(args) => run_stone(&config, args),
    }
}

fn run_fill(config: &Config, args: FillArgs) -> Result<()> {
    let (default_color, default_tolerance) = fill_settings(config)?;
    let color = match &args.color {
        Some(c) => parse_hex_color(c)?,
        None => default_color,
    };
    let tolerance = args.tolerance.unwrap_or(default_tolerance);

    let raster = read_raster(&args.input)?;
    let Some(fill) = fill_at(&raster, args.seed, color, tolerance)? else {
        eprintln!("Seed pixel already has the fill color, nothing to fill");
        return Ok(());
    };

    let mask = decode_image(&fill.image_data)?;
    write_output(&args.output, &encode_png(&mask)?)?;
    info!(output = %args.output.display(), "Wrote fill mask");

    if let Some(path) = &args.drawing {
        let mut drawing = if path.exists() {
            Drawing::load(path).with_context(|| format!("Failed to read {}", path.display()))?
        } else {
            Drawing::default()
        };
        drawing.push(DrawingOperation::Fill(fill));
        write_output(path, drawing.to_json()?.as_bytes())?;
        info!(drawing = %path.display(), operations = drawing.operations.len(), "Appended fill operation");
    }

    Ok(())
}

fn run_trace(config: &Config, args: TraceArgs) -> Result<()> {
    let image = read_raster(&args.input)?;
    let mask = PixelMask::from_image(&image);
    let boundary = extract_boundary(&mask);
    if boundary.is_empty() {
        return Err(GcodeError::NothingToGenerate.into());
    }

    if let Some(svg_path) = &args.svg {
        let svg = points_to_svg(&boundary, mask.width(), mask.height());
        write_output(svg_path, svg.as_bytes())?;
    }

    let mut params = contour_parameters(config);
    if params.canvas.is_some() {
        params.canvas = Some((mask.width() as f64, mask.height() as f64));
    }
    let gcode = ContourGcodeGenerator::new(params)?.generate(&boundary);

    match &args.output {
        Some(path) => write_output(path, gcode.as_bytes())?,
        None => println!("{}", gcode),
    }
    Ok(())
}

/// Returns the written path, or `None` when the drawing had nothing to cut.
pub fn run_project(config: &Config, args: ProjectArgs) -> Result<Option<PathBuf>> {
    let drawing = Drawing::load(&args.input)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;

    let mut pipeline = FillPipeline::new();
    let gcode = pipeline.generate_gcode(&drawing.operations, &contour_parameters(config))?;
    if gcode.is_empty() {
        eprintln!("no fill operations found");
        return Ok(None);
    }

    let name = project_file_name(
        &args.name,
        config.canvas.width_m,
        config.canvas.height_m,
        today(),
    );
    let path = args.output_dir.join(name);
    write_output(&path, gcode.as_bytes())?;
    info!(output = %path.display(), "Wrote drawing program");
    Ok(Some(path))
}

fn run_stone(config: &Config, args: StoneArgs) -> Result<()> {
    let generator = StoneCutGenerator::new(stone_parameters(config))?;
    let stone = StonePlacement {
        id: args.id.unwrap_or_else(|| format!("stone-{}", args.index)),
        x: args.x,
        y: args.y,
        width: args.width,
        height: args.height,
        rotation: normalize_rotation(args.rotation),
    };
    let gcode = generator.generate(args.index, &stone)?;

    match &args.output_dir {
        Some(dir) => {
            let path = dir.join(generator.file_name(args.index, &stone, today()));
            write_output(&path, gcode.as_bytes())?;
            info!(output = %path.display(), "Wrote stone program");
        }
        None => print!("{}", gcode),
    }
    Ok(())
}
