//! Configuration management for tessera

mod io;
mod types;

pub use types::*;

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::render::Capabilities;

impl Config {
    /// Get the config file path (~/.config/tessera/config.toml)
    pub fn config_path() -> Result<PathBuf> {
        io::config_path()
    }

    /// Load configuration from the default path, or return defaults if not found
    pub fn load() -> Result<Self> {
        io::load()
    }

    /// Load configuration from a specific file, or return defaults if not found
    pub fn load_from(path: &Path) -> Result<Self> {
        io::load_from(path)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        io::from_toml_str(contents)
    }

    pub fn capabilities(&self) -> Capabilities {
        self.capabilities.to_capabilities()
    }
}
