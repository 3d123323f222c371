//! Color model and degradation across terminal color systems.
//!
//! Contains the core color types:
//! - Color: terminal default, a palette entry, or an explicit RGB triple
//! - ColorSystem: the color depth a terminal supports
//!
//! Degradation maps any color onto the palette of a more limited system. It
//! cascades through each intermediate system (true color -> 256 -> 16 -> 8),
//! so degrading twice always agrees with degrading once.

pub mod palette;

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// A terminal color.
///
/// Palette colors compare equal to the RGB triple they stand for, so
/// `Color::Indexed(9) == Color::Rgb(255, 0, 0)`.
#[derive(Debug, Clone, Copy, Default)]
pub enum Color {
    /// The terminal's own color, never emitted as an explicit code
    #[default]
    Default,
    /// 256-color palette index
    Indexed(u8),
    /// RGB color
    Rgb(u8, u8, u8),
}

impl Color {
    pub const BLACK: Color = Color::Indexed(0);
    pub const MAROON: Color = Color::Indexed(1);
    pub const GREEN: Color = Color::Indexed(2);
    pub const OLIVE: Color = Color::Indexed(3);
    pub const NAVY: Color = Color::Indexed(4);
    pub const PURPLE: Color = Color::Indexed(5);
    pub const TEAL: Color = Color::Indexed(6);
    pub const SILVER: Color = Color::Indexed(7);
    pub const GREY: Color = Color::Indexed(8);
    pub const RED: Color = Color::Indexed(9);
    pub const LIME: Color = Color::Indexed(10);
    pub const YELLOW: Color = Color::Indexed(11);
    pub const BLUE: Color = Color::Indexed(12);
    pub const FUCHSIA: Color = Color::Indexed(13);
    pub const AQUA: Color = Color::Indexed(14);
    pub const WHITE: Color = Color::Indexed(15);

    /// RGB value of the color, `None` for the terminal default.
    pub fn to_rgb(self) -> Option<(u8, u8, u8)> {
        match self {
            Color::Default => None,
            Color::Indexed(index) => Some(palette::rgb(index)),
            Color::Rgb(r, g, b) => Some((r, g, b)),
        }
    }

    pub fn is_default(self) -> bool {
        matches!(self, Color::Default)
    }

    /// Palette number if the color was defined by index.
    pub fn index(self) -> Option<u8> {
        match self {
            Color::Indexed(index) => Some(index),
            _ => None,
        }
    }

    /// Name of a standard palette entry (`red`, `navy`, ...).
    pub fn name(self) -> Option<&'static str> {
        match self {
            Color::Indexed(index) if index < 16 => Some(palette::NAMES[index as usize]),
            _ => None,
        }
    }

    /// Parse `#rgb` or `#rrggbb`.
    pub fn from_hex(hex: &str) -> Option<Color> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if !digits.is_ascii() {
            return None;
        }
        let channel = |s: &str| u8::from_str_radix(s, 16).ok();
        match digits.len() {
            3 => {
                let r = channel(&digits[0..1])?;
                let g = channel(&digits[1..2])?;
                let b = channel(&digits[2..3])?;
                Some(Color::Rgb(r * 17, g * 17, b * 17))
            }
            6 => Some(Color::Rgb(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            _ => None,
        }
    }

    /// Map the color onto the nearest color representable in `system`.
    ///
    /// Total and deterministic: colors already representable are kept,
    /// everything else resolves to the nearest palette entry by squared
    /// Euclidean distance in RGB, ties going to the lowest index.
    pub fn degrade(self, system: ColorSystem) -> Color {
        if self.is_default() {
            return Color::Default;
        }
        match system {
            ColorSystem::NoColors => Color::Default,
            ColorSystem::TrueColor => self,
            ColorSystem::EightBit => match self {
                Color::Rgb(r, g, b) => Color::Indexed(palette::nearest((r, g, b), 256)),
                other => other,
            },
            ColorSystem::Standard | ColorSystem::Legacy => {
                let size = system.palette_size().unwrap_or(256);
                let wider = self.degrade(system.wider());
                match wider {
                    Color::Indexed(index) if (index as usize) < size => wider,
                    other => match other.to_rgb() {
                        Some(rgb) => Color::Indexed(palette::nearest(rgb, size)),
                        None => Color::Default,
                    },
                }
            }
        }
    }

    /// Markup token for the color (`red`, `color(208)`, `#ff8800`, `default`).
    pub fn to_markup(self) -> String {
        match self {
            Color::Default => "default".to_string(),
            Color::Indexed(index) if index < 16 => palette::NAMES[index as usize].to_string(),
            Color::Indexed(index) => format!("color({})", index),
            Color::Rgb(r, g, b) => format!("#{:02x}{:02x}{:02x}", r, g, b),
        }
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        self.to_rgb() == other.to_rgb()
    }
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_rgb().hash(state);
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_markup())
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Color::Rgb(r, g, b)
    }
}

/// Color depth supported by a terminal, ordered from least to most expressive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorSystem {
    /// No color output at all
    NoColors,
    /// 8 colors (30-37 / 40-47)
    Legacy,
    /// 16 colors including the bright range (90-97 / 100-107)
    Standard,
    /// 256-color palette
    EightBit,
    /// 24-bit RGB
    #[default]
    TrueColor,
}

impl ColorSystem {
    pub const ALL: [ColorSystem; 5] = [
        ColorSystem::TrueColor,
        ColorSystem::EightBit,
        ColorSystem::Standard,
        ColorSystem::Legacy,
        ColorSystem::NoColors,
    ];

    /// Number of palette entries, `None` for true color.
    pub fn palette_size(self) -> Option<usize> {
        match self {
            ColorSystem::NoColors => Some(0),
            ColorSystem::Legacy => Some(8),
            ColorSystem::Standard => Some(16),
            ColorSystem::EightBit => Some(256),
            ColorSystem::TrueColor => None,
        }
    }

    /// The next more expressive system.
    fn wider(self) -> ColorSystem {
        match self {
            ColorSystem::NoColors => ColorSystem::Legacy,
            ColorSystem::Legacy => ColorSystem::Standard,
            ColorSystem::Standard => ColorSystem::EightBit,
            ColorSystem::EightBit | ColorSystem::TrueColor => ColorSystem::TrueColor,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ColorSystem::NoColors => "nocolors",
            ColorSystem::Legacy => "legacy",
            ColorSystem::Standard => "standard",
            ColorSystem::EightBit => "eightbit",
            ColorSystem::TrueColor => "truecolor",
        }
    }
}

impl fmt::Display for ColorSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for ColorSystem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ColorSystem::ALL
            .iter()
            .copied()
            .find(|system| system.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                format!(
                    "unknown color system '{}' (expected truecolor, eightbit, standard, legacy or nocolors)",
                    s
                )
            })
    }
}
