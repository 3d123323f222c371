//! CLI behavior of the tessera binary

use predicates::prelude::*;
use tempfile::TempDir;

use crate::helpers::{tessera, tessera_with_config, write_config};

#[test]
fn markup_without_ansi_prints_text() {
    let temp_dir = TempDir::new().unwrap();
    tessera(&temp_dir)
        .args(["--no-ansi", "markup", "[bold]hi[/] there"])
        .assert()
        .success()
        .stdout("hi there\n");
}

#[test]
fn markup_in_standard_colors() {
    let temp_dir = TempDir::new().unwrap();
    tessera(&temp_dir)
        .args(["--color-system", "standard", "markup", "[red]x[/]"])
        .assert()
        .success()
        .stdout("\x1b[91mx\x1b[0m\n");
}

#[test]
fn strip_and_escape() {
    let temp_dir = TempDir::new().unwrap();
    tessera(&temp_dir)
        .args(["strip", "[red]a[/] [[b]]"])
        .assert()
        .success()
        .stdout("a [b]\n");
    tessera(&temp_dir)
        .args(["escape", "[x]"])
        .assert()
        .success()
        .stdout("[[x]]\n");
}

#[test]
fn highlight_with_style() {
    let temp_dir = TempDir::new().unwrap();
    tessera(&temp_dir)
        .args([
            "--color-system",
            "standard",
            "highlight",
            "hello world",
            "world",
            "--style",
            "bold",
        ])
        .assert()
        .success()
        .stdout("hello \x1b[1mworld\x1b[0m\n");
}

#[test]
fn table_in_ascii() {
    let temp_dir = TempDir::new().unwrap();
    tessera(&temp_dir)
        .args([
            "--no-ansi", "--ascii", "--width", "40", "table", "--column", "Name", "--column",
            "Qty", "--row", "apple, 3",
        ])
        .assert()
        .success()
        .stdout("+-------+-----+\n| Name  | Qty |\n+-------+-----+\n| apple | 3   |\n+-------+-----+\n");
}

#[test]
fn table_rejects_long_rows() {
    let temp_dir = TempDir::new().unwrap();
    tessera(&temp_dir)
        .args(["table", "--column", "a", "--row", "1,2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Row has 2 cells"));
}

#[test]
fn color_shows_every_system() {
    let temp_dir = TempDir::new().unwrap();
    tessera(&temp_dir)
        .args(["--no-ansi", "color", "#ff0000"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("truecolor")
                .and(predicate::str::contains("#ff0000"))
                .and(predicate::str::contains("maroon"))
                .and(predicate::str::contains("nocolors")),
        );
}

#[test]
fn markup_errors_fail_with_position() {
    let temp_dir = TempDir::new().unwrap();
    tessera(&temp_dir)
        .args(["markup", "Hello [[ World ]"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("position 15"));
}

#[test]
fn unknown_color_system_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    tessera(&temp_dir)
        .args(["--color-system", "sepia", "markup", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown color system"));
}

#[test]
fn config_file_sets_capabilities() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(&temp_dir, "[capabilities]\nansi = false\n");
    tessera_with_config(&path)
        .args(["markup", "[bold]plain[/]"])
        .assert()
        .success()
        .stdout("plain\n");
}

#[test]
fn debug_logging_goes_to_stderr() {
    let temp_dir = TempDir::new().unwrap();
    tessera(&temp_dir)
        .env("TESSERA_LOG", "debug")
        .args(["--no-ansi", "markup", "x"])
        .assert()
        .success()
        .stdout("x\n")
        .stderr(predicate::str::contains("Resolved capabilities"));
}
