//! Hex, RGB and display-string conversions for single colors.
//!
//! All hex output is canonical lowercase `#rrggbb`. Input accepts either case
//! and an optional leading `#`.

use rand::Rng;
use serde::Serialize;

/// Smallest value [`random_color`] can return; keeps the top hex digit non-zero.
pub const RANDOM_MIN: u32 = 0x10_0000;
/// Largest value [`random_color`] can return.
pub const RANDOM_MAX: u32 = 0xFF_FFFF;

/// An (red, green, blue) channel triple.
pub type Rgb = (u8, u8, u8);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    #[error("invalid hex color: {0:?}")]
    InvalidHexFormat(String),
}

/// Display strings for a single color.
///
/// `hsl` holds normalized RGB fractions, not hue/saturation/lightness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorInfo {
    /// `rgb(R, G, B)` with decimal channels.
    pub rgb: String,
    /// `hsl(r, g, b)` with each channel as `value / 255` to three decimals.
    pub hsl: String,
    /// The input string, echoed back as given.
    pub hex: String,
}

impl ColorInfo {
    fn black() -> Self {
        Self {
            rgb: "rgb(0, 0, 0)".into(),
            hsl: "hsl(0, 0, 0)".into(),
            hex: "#000000".into(),
        }
    }
}

/// Parse `#rrggbb` (or `rrggbb`) into RGB channels.
///
/// # Errors
///
/// Returns [`ColorError::InvalidHexFormat`] unless the input is exactly six
/// hex digits after an optional `#`.
pub fn hex_to_rgb(hex: &str) -> Result<Rgb, ColorError> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ColorError::InvalidHexFormat(hex.to_owned()));
    }
    let value = u32::from_str_radix(digits, 16).map_err(|_| ColorError::InvalidHexFormat(hex.to_owned()))?;
    Ok(split_channels(value))
}

/// Format RGB channels as canonical lowercase `#rrggbb`.
#[must_use]
pub fn rgb_to_hex((r, g, b): Rgb) -> String {
    format!("#{r:02x}{g:02x}{b:02x}")
}

/// Build the rgb/hsl/hex display strings for a `#RGB` or `#RRGGBB` color.
///
/// `None` and the empty string yield black.
///
/// # Errors
///
/// Returns [`ColorError::InvalidHexFormat`] when the input is not three or six
/// hex digits after an optional `#`.
pub fn color_info(hex: Option<&str>) -> Result<ColorInfo, ColorError> {
    let Some(raw) = hex.filter(|s| !s.is_empty()) else {
        return Ok(ColorInfo::black());
    };

    let digits = raw.strip_prefix('#').unwrap_or(raw);
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ColorError::InvalidHexFormat(raw.to_owned()));
    }
    let expanded = match digits.len() {
        3 => digits.chars().flat_map(|c| [c, c]).collect::<String>(),
        6 => digits.to_owned(),
        _ => return Err(ColorError::InvalidHexFormat(raw.to_owned())),
    };
    let (r, g, b) = hex_to_rgb(&expanded)?;

    Ok(ColorInfo {
        rgb: format!("rgb({r}, {g}, {b})"),
        hsl: format!("hsl({}, {}, {})", fraction(r), fraction(g), fraction(b)),
        hex: raw.to_owned(),
    })
}

/// Draw a uniformly random color in `[#100000, #ffffff]`.
#[must_use]
pub fn random_color() -> String {
    let value = rand::rng().random_range(RANDOM_MIN..=RANDOM_MAX);
    format!("#{value:06x}")
}

fn split_channels(value: u32) -> Rgb {
    let [_, r, g, b] = value.to_be_bytes();
    (r, g, b)
}

fn fraction(channel: u8) -> String {
    format!("{:.3}", f64::from(channel) / 255.0)
}

#[cfg(test)]
#[path = "color_test.rs"]
mod tests;
