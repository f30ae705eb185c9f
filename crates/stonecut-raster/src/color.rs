//! Hex color parsing for fill colors.

use image::Rgb;
use stonecut_core::RasterError;

/// Parse `#rrggbb`, `rrggbb` or the short `#rgb` form.
pub fn parse_hex_color(value: &str) -> Result<Rgb<u8>, RasterError> {
    let invalid = || RasterError::InvalidColor {
        value: value.to_string(),
    };

    let hex = value.trim();
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    if !hex.is_ascii() {
        return Err(invalid());
    }

    let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());

    match hex.len() {
        6 => Ok(Rgb([
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        ])),
        3 => {
            let short = |i: usize| channel(&hex[i..i + 1]).map(|c| c * 17);
            Ok(Rgb([short(0)?, short(1)?, short(2)?]))
        }
        _ => Err(invalid()),
    }
}
