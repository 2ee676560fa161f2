//! Configuration tests

use clap::Parser;
use kml_extract::{Cli, ConfigError, ConfigManager, EnvProvider};
use std::path::PathBuf;

struct NoEnv;

impl EnvProvider for NoEnv {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }
}

#[test]
fn test_cli_only_configuration() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let config_path = temp_dir.path().join("empty.toml");
    std::fs::write(&config_path, "").unwrap();

    let cli = Cli::try_parse_from([
        "kml-extract",
        "--config",
        config_path.to_str().unwrap(),
        "-i",
        "in.kml",
        "-o",
        "out.txt",
    ])
    .unwrap();

    let config = ConfigManager::load_config_with(&cli, &NoEnv).unwrap();
    assert_eq!(config.input_path, PathBuf::from("in.kml"));
    assert_eq!(config.output_path, PathBuf::from("out.txt"));
    assert_eq!(config.tag_path, "name");
    assert_eq!(config.namespace_alias, "kml");
}

#[test]
fn test_missing_output_is_reported() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let config_path = temp_dir.path().join("empty.json");
    std::fs::write(&config_path, "{}").unwrap();

    let cli = Cli::try_parse_from([
        "kml-extract",
        "--config",
        config_path.to_str().unwrap(),
        "-i",
        "in.kml",
    ])
    .unwrap();

    match ConfigManager::load_config_with(&cli, &NoEnv) {
        Err(ConfigError::MissingField { field }) => assert_eq!(field, "output"),
        other => panic!("Expected MissingField, got {:?}", other),
    }
}
