//! Style specification grammar.
//!
//! A specification is a whitespace-separated list of tokens:
//! - decoration names (`bold`, `italic`, ...)
//! - a foreground color
//! - `on` followed by a background color
//! - `link` (link to the tagged text) or `link=URL`
//!
//! Colors are palette names, `#rgb`/`#rrggbb`, `rgb(r,g,b)`, `color(n)`, a bare
//! palette number, or `default`.

use super::error::StyleError;
use super::{Decoration, Link, Style};
use crate::color::{palette, Color};

/// Result of parsing a style specification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct StyleSpec {
    pub style: Style,
    /// A bare `link` token: the tagged text is the link target.
    pub link_to_content: bool,
}

pub(crate) fn parse_spec(spec: &str) -> Result<StyleSpec, StyleError> {
    let mut foreground: Option<Color> = None;
    let mut background: Option<Color> = None;
    let mut decoration = Decoration::empty();
    let mut link: Option<String> = None;
    let mut link_to_content = false;
    let mut expect_background = false;

    for token in spec.split_whitespace() {
        let lower = token.to_ascii_lowercase();

        if expect_background {
            background = Some(parse_color(token)?);
            expect_background = false;
            continue;
        }

        if lower == "on" {
            if background.is_some() {
                return Err(StyleError::DuplicateColor {
                    which: "background",
                    token: token.to_string(),
                });
            }
            expect_background = true;
            continue;
        }

        if lower == "link" || lower.starts_with("link=") {
            let url = token.get(5..).unwrap_or("");
            if link.is_some() || link_to_content {
                return Err(StyleError::DuplicateLink(url.to_string()));
            }
            if url.is_empty() {
                link_to_content = true;
            } else {
                link = Some(url.to_string());
            }
            continue;
        }

        if let Some(d) = Decoration::by_name(&lower) {
            decoration |= d;
            continue;
        }

        let color = parse_color(token)?;
        if foreground.is_some() {
            return Err(StyleError::DuplicateColor {
                which: "foreground",
                token: token.to_string(),
            });
        }
        foreground = Some(color);
    }

    if expect_background {
        return Err(StyleError::MissingBackground);
    }

    let mut style = Style::plain()
        .with_foreground(foreground.unwrap_or_default())
        .with_background(background.unwrap_or_default())
        .with_decoration(decoration);
    if let Some(url) = link {
        style = style.with_link(Link::new(url));
    }

    Ok(StyleSpec {
        style,
        link_to_content,
    })
}

/// Parse a single color token.
pub fn parse_color(token: &str) -> Result<Color, StyleError> {
    let lower = token.to_ascii_lowercase();

    if lower == "default" {
        return Ok(Color::Default);
    }

    if lower.starts_with('#') {
        return Color::from_hex(&lower).ok_or_else(|| StyleError::InvalidColor(token.to_string()));
    }

    if let Some(inner) = lower
        .strip_prefix("rgb(")
        .and_then(|rest| rest.strip_suffix(')'))
    {
        let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
        if parts.len() != 3 {
            return Err(StyleError::InvalidColor(token.to_string()));
        }
        let mut channels = [0u8; 3];
        for (slot, part) in channels.iter_mut().zip(&parts) {
            *slot = parse_in_range(part, "RGB component", token)?;
        }
        return Ok(Color::Rgb(channels[0], channels[1], channels[2]));
    }

    if let Some(inner) = lower
        .strip_prefix("color(")
        .and_then(|rest| rest.strip_suffix(')'))
    {
        return parse_in_range(inner.trim(), "Palette index", token).map(Color::Indexed);
    }

    if !lower.is_empty() && lower.chars().all(|c| c.is_ascii_digit() || c == '-') {
        return parse_in_range(&lower, "Palette index", token).map(Color::Indexed);
    }

    palette::lookup(&lower)
        .map(Color::Indexed)
        .ok_or_else(|| StyleError::UnknownToken(token.to_string()))
}

fn parse_in_range(digits: &str, component: &'static str, token: &str) -> Result<u8, StyleError> {
    let magnitude = digits.strip_prefix('-').unwrap_or(digits);
    if magnitude.is_empty() || !magnitude.chars().all(|c| c.is_ascii_digit()) {
        return Err(StyleError::InvalidColor(token.to_string()));
    }
    // Any well-formed integer outside 0-255, however long, is a range error.
    digits.parse::<u8>().map_err(|_| StyleError::ColorOutOfRange {
        component,
        min: 0,
        max: 255,
        value: digits.to_string(),
    })
}
