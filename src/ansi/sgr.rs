//! SGR (Select Graphic Rendition) code building.
//!
//! Code order is fixed: decorations first (one code per active bit), then
//! the foreground color, then the background color.

use crate::color::{Color, ColorSystem};
use crate::style::Style;

/// SGR parameters for a color in the given system, empty for the terminal default.
///
/// - TrueColor: `38;2;r;g;b`, or `38;5;n` when the color was defined by index
/// - EightBit: `38;5;n`
/// - Standard: `30+n` / `90+(n-8)` (backgrounds `40+n` / `100+(n-8)`)
/// - Legacy: `30+n` (backgrounds `40+n`)
pub fn color_codes(color: Color, foreground: bool, system: ColorSystem) -> Vec<u8> {
    let (normal, bright, extended) = if foreground {
        (30, 90, 38)
    } else {
        (40, 100, 48)
    };

    match color.degrade(system) {
        Color::Default => Vec::new(),
        Color::Indexed(index) => match system {
            ColorSystem::NoColors => Vec::new(),
            ColorSystem::Legacy | ColorSystem::Standard if index < 8 => vec![normal + index],
            ColorSystem::Legacy | ColorSystem::Standard => vec![bright + (index - 8)],
            ColorSystem::EightBit | ColorSystem::TrueColor => vec![extended, 5, index],
        },
        Color::Rgb(r, g, b) => vec![extended, 2, r, g, b],
    }
}

/// All SGR parameters for a style.
pub fn style_codes(style: &Style, system: ColorSystem) -> Vec<u8> {
    let mut codes: Vec<u8> = style.decoration().sgr_codes().collect();
    codes.extend(color_codes(style.foreground(), true, system));
    codes.extend(color_codes(style.background(), false, system));
    codes
}

/// The complete escape sequence for a style, `None` when there is nothing to set.
pub fn sgr_sequence(style: &Style, system: ColorSystem) -> Option<String> {
    let codes = style_codes(style, system);
    if codes.is_empty() {
        return None;
    }
    let params: Vec<String> = codes.iter().map(u8::to_string).collect();
    Some(format!("\x1b[{}m", params.join(";")))
}
