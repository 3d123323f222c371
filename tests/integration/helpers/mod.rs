//! Test helper utilities

#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A tessera command isolated from the user's config file
pub fn tessera(temp_dir: &TempDir) -> Command {
    tessera_with_config(&temp_dir.path().join("missing.toml"))
}

/// A tessera command reading `config`
pub fn tessera_with_config(config: &Path) -> Command {
    let mut cmd = Command::cargo_bin("tessera").expect("binary should build");
    cmd.arg("--config").arg(config).env_remove("TESSERA_LOG");
    cmd
}

/// Write a config file into `temp_dir` and return its path
pub fn write_config(temp_dir: &TempDir, contents: &str) -> PathBuf {
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, contents).expect("Failed to write config");
    path
}
