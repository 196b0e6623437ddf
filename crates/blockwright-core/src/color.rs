use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ColorError;

/// 8-bit RGB color parsed from a `#rrggbb` tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` (case-insensitive). The leading `#` is required.
    pub fn from_hex(s: &str) -> Result<Self, ColorError> {
        let digits = s
            .strip_prefix('#')
            .ok_or_else(|| ColorError::MissingHash(s.to_string()))?;
        if digits.len() != 6 {
            return Err(ColorError::BadLength(s.to_string()));
        }
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorError::BadDigit(s.to_string()));
        }
        let packed =
            u32::from_str_radix(digits, 16).map_err(|_| ColorError::BadDigit(s.to_string()))?;
        Ok(Self::from_packed(packed))
    }

    /// Build from a 0xRRGGBB integer.
    pub const fn from_packed(packed: u32) -> Self {
        Self {
            r: ((packed >> 16) & 0xFF) as u8,
            g: ((packed >> 8) & 0xFF) as u8,
            b: (packed & 0xFF) as u8,
        }
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Shift every channel up by `percent` of full scale, saturating at 255.
    pub fn lighten(self, percent: f32) -> Self {
        self.shift(percent_to_amount(percent))
    }

    /// Shift every channel down by `percent` of full scale, saturating at 0.
    pub fn darken(self, percent: f32) -> Self {
        self.shift(-percent_to_amount(percent))
    }

    fn shift(self, amount: i32) -> Self {
        let ch = |c: u8| (c as i32 + amount).clamp(0, 255) as u8;
        Self {
            r: ch(self.r),
            g: ch(self.g),
            b: ch(self.b),
        }
    }
}

/// Percent of full scale in channel units: round(2.55 * pct).
fn percent_to_amount(percent: f32) -> i32 {
    (2.55 * percent as f64).round() as i32
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// A validated `#rrggbb` color tag as stored on cells and in project files.
///
/// Always holds the lower-case canonical form, so two tags naming the same
/// color compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ColorTag(String);

impl ColorTag {
    pub fn parse(s: &str) -> Result<Self, ColorError> {
        Rgb::from_hex(s).map(Self::from)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn rgb(&self) -> Rgb {
        // The tag was validated on construction.
        Rgb::from_hex(&self.0).unwrap_or_default()
    }
}

impl From<Rgb> for ColorTag {
    fn from(rgb: Rgb) -> Self {
        Self(rgb.to_hex())
    }
}

impl TryFrom<String> for ColorTag {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ColorTag> for String {
    fn from(tag: ColorTag) -> Self {
        tag.0
    }
}

impl fmt::Display for ColorTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
