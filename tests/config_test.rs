//! Tests for loading game configuration from disk.

use std::io::Write;
use std::time::Duration;
use strictly_tictactoe::{GameConfig, Mark, Position};
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes()).expect("Failed to write config");
    file
}

#[test]
fn test_load_full_config() {
    let file = write_config(
        r#"
starting_mark = "O"
announce_duration_ms = 1500
initial_focus = 4
"#,
    );
    let config = GameConfig::from_file(file.path()).expect("Load failed");
    assert_eq!(*config.starting_mark(), Mark::O);
    assert_eq!(config.announce_duration(), Duration::from_millis(1500));
    assert_eq!(config.initial_focus_position(), Position::Center);
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config = GameConfig::load_or_default(dir.path().join("absent.toml")).expect("Load failed");
    assert_eq!(config, GameConfig::default());
}

#[test]
fn test_from_file_missing_is_error() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let err = GameConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read"));
}

#[test]
fn test_malformed_toml_is_error() {
    let file = write_config("starting_mark = ");
    let err = GameConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse"));
}

#[test]
fn test_unknown_mark_is_error() {
    let file = write_config("starting_mark = \"Z\"");
    assert!(GameConfig::from_file(file.path()).is_err());
}

#[test]
fn test_out_of_range_focus_is_error() {
    let file = write_config("initial_focus = 12");
    let err = GameConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("initial_focus"));
}

#[test]
fn test_toml_round_trip() {
    let config = GameConfig::default().with_starting_mark(Mark::O);
    let text = config.to_toml().expect("Serialize failed");
    let file = write_config(&text);
    assert_eq!(GameConfig::from_file(file.path()).expect("Load failed"), config);
}
