//! Configuration management for Stonecut
//!
//! Supports JSON and TOML files, chosen by extension. Configuration is
//! organized into sections:
//! - G-code emission (feed rate, scale, flip, point reduction)
//! - Canvas geometry (pixel size and physical size)
//! - Bucket fill defaults
//! - Stone cutting tool settings
//!
//! Every field has a default, so partial files are accepted.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{ConfigError, SettingsError, SettingsResult};

/// Contour G-code settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GcodeSettings {
    /// Cutting feed rate (mm/min)
    pub feed_rate: f64,
    /// Millimeters per canvas pixel along X
    pub scale: f64,
    /// Mirror Y for machines with a Y-up origin
    pub flip_y: bool,
    /// Minimum spacing between emitted points (px)
    pub min_distance: f64,
    /// Per-axis tolerance for collapsing repeated points (px)
    pub redundant_tolerance: f64,
    /// Correct the Y scale by the canvas aspect ratio
    pub aspect_correction: bool,
}

impl Default for GcodeSettings {
    fn default() -> Self {
        Self {
            feed_rate: 1500.0,
            scale: 0.1,
            flip_y: true,
            min_distance: 0.5,
            redundant_tolerance: 0.1,
            aspect_correction: true,
        }
    }
}

/// Drawing canvas geometry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasSettings {
    pub width_px: u32,
    pub height_px: u32,
    /// Physical width (m)
    pub width_m: f64,
    /// Physical height (m)
    pub height_m: f64,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self {
            width_px: 800,
            height_px: 600,
            width_m: 8.0,
            height_m: 6.0,
        }
    }
}

/// Bucket fill defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FillSettings {
    /// Per-channel color tolerance
    pub tolerance: u8,
    /// Fill color as `#rrggbb`
    pub color: String,
}

impl Default for FillSettings {
    fn default() -> Self {
        Self {
            tolerance: 10,
            color: "#000000".to_string(),
        }
    }
}

/// Stone rectangle cutting settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoneSettings {
    /// Cutting depth (mm)
    pub plunge_depth: f64,
    /// Plunge feed rate (mm/min)
    pub plunge_feed: f64,
    /// Edge feed rate (mm/min)
    pub cut_feed: f64,
    /// Retract height (mm)
    pub safe_z: f64,
    /// Smallest rotation (degrees) emitted as G68
    pub rotation_threshold_deg: f64,
}

impl Default for StoneSettings {
    fn default() -> Self {
        Self {
            plunge_depth: -5.0,
            plunge_feed: 100.0,
            cut_feed: 500.0,
            safe_z: 5.0,
            rotation_threshold_deg: 0.1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Toml,
}

impl Format {
    fn from_path(path: &Path) -> SettingsResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            other => Err(ConfigError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )
            .into()),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub gcode: GcodeSettings,
    pub canvas: CanvasSettings,
    pub fill: FillSettings,
    pub stone: StoneSettings,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load and validate a `.json` or `.toml` file.
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = Format::from_path(path)?;
        let content = std::fs::read_to_string(path).map_err(|e| {
            SettingsError::LoadError(format!("{}: {}", path.display(), e))
        })?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Validate and write to a `.json` or `.toml` file.
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;
        let format = Format::from_path(path)?;

        let content = match format {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content).map_err(|e| {
            SettingsError::SaveError(format!("{}: {}", path.display(), e))
        })?;

        Ok(())
    }

    /// `<config_dir>/stonecut/config.toml`
    pub fn default_path() -> SettingsResult<PathBuf> {
        let mut path = dirs::config_dir().ok_or_else(|| {
            ConfigError::UnsupportedPlatform("no user configuration directory".to_string())
        })?;
        path.push("stonecut");
        path.push("config.toml");
        Ok(path)
    }

    /// Load `path` if given, else the default file when it exists, else defaults.
    pub fn load_or_default(path: Option<&Path>) -> SettingsResult<Self> {
        if let Some(path) = path {
            return Self::load_from_file(path);
        }
        match Self::default_path() {
            Ok(default) if default.is_file() => Self::load_from_file(&default),
            _ => Ok(Self::default()),
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        let positive = [
            ("gcode.feed_rate", self.gcode.feed_rate),
            ("gcode.scale", self.gcode.scale),
            ("gcode.min_distance", self.gcode.min_distance),
            ("gcode.redundant_tolerance", self.gcode.redundant_tolerance),
            ("canvas.width_m", self.canvas.width_m),
            ("canvas.height_m", self.canvas.height_m),
            ("stone.plunge_feed", self.stone.plunge_feed),
            ("stone.cut_feed", self.stone.cut_feed),
        ];
        for (key, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(SettingsError::invalid(key, format!("must be > 0, got {}", value)));
            }
        }

        if self.canvas.width_px == 0 || self.canvas.height_px == 0 {
            return Err(SettingsError::invalid(
                "canvas",
                "pixel dimensions must be > 0",
            ));
        }

        if !(0.0..=180.0).contains(&self.stone.rotation_threshold_deg) {
            return Err(ConfigError::ValueOutOfRange {
                key: "stone.rotation_threshold_deg".to_string(),
                value: self.stone.rotation_threshold_deg.to_string(),
            }
            .into());
        }

        if !is_hex_color(&self.fill.color) {
            return Err(SettingsError::invalid(
                "fill.color",
                format!("expected #rrggbb or #rgb, got '{}'", self.fill.color),
            ));
        }

        Ok(())
    }
}

fn is_hex_color(value: &str) -> bool {
    let digits = value.strip_prefix('#').unwrap_or(value);
    matches!(digits.len(), 3 | 6) && digits.chars().all(|c| c.is_ascii_hexdigit())
}
