//! Brand color presets.

use std::fmt;
use std::str::FromStr;

use crate::color::HexColor;

/// A foreground/background pairing with its matching logo file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Theme {
    #[default]
    BlueOnWhite,
    BlackOnWhite,
    WhiteOnBlue,
    WhiteOnBlack,
}

impl Theme {
    pub const ALL: [Theme; 4] = [
        Theme::BlueOnWhite,
        Theme::BlackOnWhite,
        Theme::WhiteOnBlue,
        Theme::WhiteOnBlack,
    ];

    /// Short identifier used on the command line.
    pub fn slug(self) -> &'static str {
        match self {
            Theme::BlueOnWhite => "blue-on-white",
            Theme::BlackOnWhite => "black-on-white",
            Theme::WhiteOnBlue => "white-on-blue",
            Theme::WhiteOnBlack => "white-on-black",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Theme::BlueOnWhite => "Blue (fg) + White (bg)",
            Theme::BlackOnWhite => "Black (fg) + White (bg)",
            Theme::WhiteOnBlue => "White (fg) + Blue (bg)",
            Theme::WhiteOnBlack => "White (fg) + Black (bg)",
        }
    }

    pub fn foreground(self) -> HexColor {
        match self {
            Theme::BlueOnWhite => HexColor::NAVY,
            Theme::BlackOnWhite => HexColor::BLACK,
            Theme::WhiteOnBlue | Theme::WhiteOnBlack => HexColor::WHITE,
        }
    }

    pub fn background(self) -> HexColor {
        match self {
            Theme::BlueOnWhite | Theme::BlackOnWhite => HexColor::WHITE,
            Theme::WhiteOnBlue => HexColor::NAVY,
            Theme::WhiteOnBlack => HexColor::BLACK,
        }
    }

    /// Logo file name, resolved against the configured logo directory.
    pub fn logo_file(self) -> &'static str {
        match self {
            Theme::BlueOnWhite => "usaa_blue.png",
            Theme::BlackOnWhite => "usaa_black.png",
            Theme::WhiteOnBlue | Theme::WhiteOnBlack => "usaa_white.png",
        }
    }
}

impl FromStr for Theme {
    type Err = String;

    /// Accepts either the slug or the label.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.slug().eq_ignore_ascii_case(s) || t.label() == s)
            .ok_or_else(|| format!("unknown theme '{s}'"))
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
