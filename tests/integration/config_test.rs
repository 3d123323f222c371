//! Config loading from disk

use tempfile::TempDir;
use tessera::{ColorSystem, Config};

use crate::helpers::write_config;

#[test]
fn missing_file_gives_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::load_from(&temp_dir.path().join("nope.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn loads_capabilities_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(
        &temp_dir,
        r#"
[capabilities]
color_system = "eightbit"
links = false
legacy_console = true
width = 120
height = 40
"#,
    );
    let caps = Config::load_from(&path).unwrap().capabilities();
    assert_eq!(caps.color_system, ColorSystem::EightBit);
    assert!(!caps.links);
    assert!(caps.legacy_console);
    assert!(caps.ansi);
    assert_eq!((caps.width, caps.height), (120, 40));
}

#[test]
fn bad_file_names_the_path() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(&temp_dir, "[capabilities]\nansi = \"sometimes\"\n");
    let err = Config::load_from(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("config.toml"), "{:#}", err);
}
