//! Negotiated terminal capabilities and the per-pass render context.

use super::Justify;
use crate::color::ColorSystem;

/// What the output device supports. Resolved by the caller; this crate does
/// not probe the environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    pub color_system: ColorSystem,
    /// Escape sequences are understood at all
    pub ansi: bool,
    /// OSC-8 hyperlinks are understood
    pub links: bool,
    /// Unicode glyphs (box drawing, ellipsis) can be used
    pub unicode: bool,
    /// Colors must go through the native console API instead of escape sequences
    pub legacy_console: bool,
    pub width: usize,
    pub height: usize,
}

impl Default for Capabilities {
    fn default() -> Self {
        Self {
            color_system: ColorSystem::TrueColor,
            ansi: true,
            links: true,
            unicode: true,
            legacy_console: false,
            width: 80,
            height: 24,
        }
    }
}

impl Capabilities {
    /// Plain text output: no escapes, no colors, ASCII glyphs.
    pub fn plain(width: usize) -> Self {
        Self {
            color_system: ColorSystem::NoColors,
            ansi: false,
            links: false,
            unicode: false,
            legacy_console: false,
            width,
            height: 24,
        }
    }

    /// Hyperlinks need both escape support and link support.
    pub fn supports_links(&self) -> bool {
        self.ansi && self.links
    }

    pub fn ellipsis(&self) -> &'static str {
        if self.unicode {
            "…"
        } else {
            "..."
        }
    }
}

/// Read-only state threaded through one render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderContext {
    capabilities: Capabilities,
    justify: Option<Justify>,
}

impl RenderContext {
    pub fn new(capabilities: Capabilities) -> Self {
        Self {
            capabilities,
            justify: None,
        }
    }

    /// Context whose justification overrides the widgets' own.
    pub fn with_justify(self, justify: Option<Justify>) -> Self {
        Self { justify, ..self }
    }

    pub fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    pub fn justify(&self) -> Option<Justify> {
        self.justify
    }

    pub fn unicode(&self) -> bool {
        self.capabilities.unicode
    }

    pub fn width(&self) -> usize {
        self.capabilities.width
    }
}

impl Default for RenderContext {
    fn default() -> Self {
        Self::new(Capabilities::default())
    }
}
