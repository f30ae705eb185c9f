//! Stonecut Settings Crate
//!
//! Handles configuration files: the G-code, canvas, fill and stone cutting
//! defaults used by the pipeline and the command line tool.

pub mod config;
pub mod error;

pub use config::{CanvasSettings, Config, FillSettings, GcodeSettings, StoneSettings};
pub use error::{ConfigError, SettingsError, SettingsResult};
