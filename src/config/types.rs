//! Configuration type definitions and defaults

use serde::{Deserialize, Serialize};

use crate::color::ColorSystem;
use crate::render::Capabilities;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub capabilities: CapabilitiesConfig,
}

/// Output device capabilities
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapabilitiesConfig {
    #[serde(default)]
    pub color_system: ColorSystem,
    #[serde(default = "default_true")]
    pub ansi: bool,
    #[serde(default = "default_true")]
    pub links: bool,
    #[serde(default = "default_true")]
    pub unicode: bool,
    /// Route colors through the native console API
    #[serde(default)]
    pub legacy_console: bool,
    /// Terminal width; detected when unset
    #[serde(default)]
    pub width: Option<usize>,
    #[serde(default)]
    pub height: Option<usize>,
}

pub fn default_true() -> bool {
    true
}

impl Default for CapabilitiesConfig {
    fn default() -> Self {
        Self {
            color_system: ColorSystem::default(),
            ansi: default_true(),
            links: default_true(),
            unicode: default_true(),
            legacy_console: false,
            width: None,
            height: None,
        }
    }
}

impl CapabilitiesConfig {
    /// Check values serde cannot.
    pub fn validate(&self) -> Result<(), String> {
        if self.width == Some(0) {
            return Err("capabilities.width must be at least 1".to_string());
        }
        if self.height == Some(0) {
            return Err("capabilities.height must be at least 1".to_string());
        }
        Ok(())
    }

    /// Capabilities for a render pass. Unset dimensions fall back to 80x24.
    pub fn to_capabilities(&self) -> Capabilities {
        let defaults = Capabilities::default();
        Capabilities {
            color_system: self.color_system,
            ansi: self.ansi,
            links: self.links,
            unicode: self.unicode,
            legacy_console: self.legacy_console,
            width: self.width.unwrap_or(defaults.width),
            height: self.height.unwrap_or(defaults.height),
        }
    }
}
