//! Hex color validation.
//!
//! User-supplied colors must be `#RRGGBB`. Anything else falls back to a
//! default instead of failing.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use image::Rgba;
use regex::Regex;

use crate::QrBrandError;

static RE_HEX_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#[0-9a-fA-F]{6}$").unwrap());

/// Return `color` if it is a `#RRGGBB` string, otherwise `default`.
///
/// Never fails. `None`, a missing `#`, a short string or any non-hex digit
/// all yield `default` unchanged.
pub fn validate_hex_color<'a>(color: Option<&'a str>, default: &'a str) -> &'a str {
    match color {
        Some(c) if RE_HEX_COLOR.is_match(c) => c,
        _ => default,
    }
}

/// An opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColor {
    r: u8,
    g: u8,
    b: u8,
}

impl HexColor {
    pub const BLACK: HexColor = HexColor::new(0x00, 0x00, 0x00);
    pub const WHITE: HexColor = HexColor::new(0xFF, 0xFF, 0xFF);
    /// Brand navy, `#1A3258`.
    pub const NAVY: HexColor = HexColor::new(0x1A, 0x32, 0x58);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `input`, falling back to `default` when it is absent or invalid.
    pub fn or_default(input: Option<&str>, default: HexColor) -> HexColor {
        match input {
            Some(s) => s.parse().unwrap_or(default),
            None => default,
        }
    }

    pub fn rgb(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Fully opaque RGBA pixel for this color.
    pub fn to_rgba(self) -> Rgba<u8> {
        Rgba([self.r, self.g, self.b, 255])
    }
}

impl FromStr for HexColor {
    type Err = QrBrandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !RE_HEX_COLOR.is_match(s) {
            return Err(QrBrandError::InvalidColor(s.to_string()));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&s[range], 16).map_err(|_| QrBrandError::InvalidColor(s.to_string()))
        };
        Ok(Self::new(channel(1..3)?, channel(3..5)?, channel(5..7)?))
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}
