//! Loading settings from disk.

use morpion::Settings;
use std::io::Write;
use std::path::PathBuf;

#[test]
fn test_missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let settings = Settings::load_or_default(dir.path().join("absent.toml")).unwrap();
    assert_eq!(settings, Settings::default());
}

#[test]
fn test_file_overrides_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "log_file = \"game.log\"\nshow_cell_numbers = false").unwrap();

    let settings = Settings::load_or_default(file.path()).unwrap();
    assert_eq!(settings.log_file(), &PathBuf::from("game.log"));
    assert!(!settings.show_cell_numbers());
    assert!(*settings.mouse());
}

#[test]
fn test_unreadable_config_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Settings::from_file(dir.path()).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}
