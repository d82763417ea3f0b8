//! Canonical hex colors and the preset palette

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::validate::is_valid_color;
use crate::{Error, Result};

/// Color the studio starts with.
pub const DEFAULT_COLOR: &str = "#76d1ff";

/// Swatches offered next to the hex input, in display order.
pub const PRESET_COLORS: [&str; 16] = [
    "#76d1ff", "#b6c9d7", "#ffb59c", "#c9c3a3",
    "#ff3b30", "#ff9500", "#ffcc00", "#34c759",
    "#8e8e93", "#1d1d1f", "#f2f2f7", "#ffffff",
    "#667eea", "#764ba2", "#f093fb", "#43e97b",
];

/// A validated RGB hex color.
///
/// The hex text is kept lowercase (`#76d1ff`, or `#abc` for shorthand input)
/// and shown uppercase through [`Color::display_hex`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Color {
    hex: String,
}

impl Color {
    /// Validate and canonicalize a `#rgb` / `#rrggbb` string.
    pub fn parse(input: &str) -> Result<Self> {
        if !is_valid_color(input) {
            return Err(Error::InvalidColor(input.to_string()));
        }
        Ok(Self { hex: input.to_ascii_lowercase() })
    }

    /// Build a color from channels. Always valid, so no validation runs.
    pub fn from_rgb([r, g, b]: [u8; 3]) -> Self {
        Self { hex: format!("#{:02x}{:02x}{:02x}", r, g, b) }
    }

    /// Canonical lowercase hex, as stored.
    pub fn as_hex(&self) -> &str {
        &self.hex
    }

    /// Uppercase hex for labels and the hex input field.
    pub fn display_hex(&self) -> String {
        self.hex.to_ascii_uppercase()
    }

    /// Channels, with shorthand digits doubled (`#abc` -> `aa bb cc`).
    pub fn rgb(&self) -> [u8; 3] {
        let digits = &self.hex.as_bytes()[1..];
        let nibble = |b: u8| (b as char).to_digit(16).unwrap_or(0) as u8;
        match digits.len() {
            3 => [0, 1, 2].map(|i| nibble(digits[i]) * 17),
            _ => [0, 2, 4].map(|i| nibble(digits[i]) << 4 | nibble(digits[i + 1])),
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self { hex: DEFAULT_COLOR.to_string() }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex)
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.hex)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Color::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// One palette entry as the presentation layer draws it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Swatch {
    pub color: Color,
    pub selected: bool,
}

/// The preset palette with the entry matching `current` marked selected.
pub fn palette(current: &Color) -> Vec<Swatch> {
    PRESET_COLORS
        .iter()
        .filter_map(|hex| Color::parse(hex).ok())
        .map(|color| {
            let selected = &color == current;
            Swatch { color, selected }
        })
        .collect()
}
