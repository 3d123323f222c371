//! Text styling: colors, decorations and hyperlinks.
//!
//! `Style` is an immutable value. Layering one style over another is done with
//! [`Style::combine`]: the overlay's explicit colors win, decorations
//! accumulate, and the first link set sticks. Default colors never override a
//! concrete color, so the plain style is not an identity for `combine` when it
//! sits on the base side of a reset.

mod decoration;
mod error;
mod link;
pub(crate) mod parser;

pub use decoration::Decoration;
pub use error::StyleError;
pub use link::Link;
pub use parser::parse_color;

use std::fmt;

use crate::color::Color;

/// Foreground, background, decorations and an optional hyperlink.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Style {
    foreground: Color,
    background: Color,
    decoration: Decoration,
    link: Option<Link>,
}

impl Style {
    /// Default colors, no decorations, no link.
    pub fn plain() -> Self {
        Self::default()
    }

    /// A style with only a foreground color.
    pub fn fg(color: Color) -> Self {
        Self::plain().with_foreground(color)
    }

    /// Parse a style specification such as `bold red on blue`.
    ///
    /// A bare `link` token has no target outside markup and is ignored here.
    pub fn parse(spec: &str) -> Result<Self, StyleError> {
        parser::parse_spec(spec).map(|s| s.style)
    }

    pub fn with_foreground(mut self, color: Color) -> Self {
        self.foreground = color;
        self
    }

    pub fn with_background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    pub fn with_decoration(mut self, decoration: Decoration) -> Self {
        self.decoration = decoration;
        self
    }

    pub fn with_link(mut self, link: Link) -> Self {
        self.link = Some(link);
        self
    }

    pub fn foreground(&self) -> Color {
        self.foreground
    }

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn decoration(&self) -> Decoration {
        self.decoration
    }

    pub fn link(&self) -> Option<&Link> {
        self.link.as_ref()
    }

    pub fn is_plain(&self) -> bool {
        self.foreground.is_default()
            && self.background.is_default()
            && self.decoration.is_empty()
            && self.link.is_none()
    }

    /// Layer `overlay` on top of `self`.
    pub fn combine(&self, overlay: &Style) -> Style {
        Style {
            foreground: if overlay.foreground.is_default() {
                self.foreground
            } else {
                overlay.foreground
            },
            background: if overlay.background.is_default() {
                self.background
            } else {
                overlay.background
            },
            decoration: self.decoration | overlay.decoration,
            link: self.link.clone().or_else(|| overlay.link.clone()),
        }
    }

    /// Style specification that parses back to this style (link ids aside).
    pub fn to_markup(&self) -> String {
        let mut tokens: Vec<String> = self.decoration.names().map(str::to_string).collect();

        if !self.foreground.is_default() {
            tokens.push(self.foreground.to_markup());
        }
        if !self.background.is_default() {
            if self.foreground.is_default() {
                tokens.push("default".to_string());
            }
            tokens.push("on".to_string());
            tokens.push(self.background.to_markup());
        }
        if let Some(link) = &self.link {
            tokens.push(format!("link={}", link.url()));
        }

        if tokens.is_empty() {
            "default".to_string()
        } else {
            tokens.join(" ")
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_markup())
    }
}

impl std::str::FromStr for Style {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Style::parse(s)
    }
}
