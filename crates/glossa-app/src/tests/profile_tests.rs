use std::fs;

use glossa_config::Config;
use tempfile::tempdir;

use crate::profile::load_config;

#[test]
fn test_without_file_matches_config_new() {
    let config = load_config(None).unwrap();
    let expected = Config::new();

    assert_eq!(config.storage.data_dir, expected.storage.data_dir);
    assert_eq!(config.storage.atomic_writes, expected.storage.atomic_writes);
    assert_eq!(config.logging.filter, expected.logging.filter);
    assert_eq!(config.logging.json, expected.logging.json);
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = tempdir().unwrap();
    let err = load_config(Some(&dir.path().join("absent.json"))).unwrap_err();
    assert!(format!("{err:#}").contains("Failed to read config"));
}

#[test]
fn test_invalid_file_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("glossa.json");
    fs::write(&path, "{ not json").unwrap();

    let err = load_config(Some(&path)).unwrap_err();
    assert!(format!("{err:#}").contains("Invalid config"));
}
