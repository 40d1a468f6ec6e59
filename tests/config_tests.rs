//! Integration tests for configuration parsing
//!
//! This module contains integration tests that verify:
//! - Config loading from fixture files
//! - Path resolution relative to the configuration file
//! - Rejection of invalid inputs

mod common;

use common::fixture_path;
use fixerset::config::Config;
use fixerset::error::ConfigError;

#[test]
fn test_config_load_valid_minimal() {
    let config = assert_ok!(Config::load(fixture_path("config/valid_minimal.toml")));

    assert_eq!(config.fixerset.version, "1");
    assert_eq!(config.fixerset.preset, "laravel");
    assert_eq!(
        config.source.presets,
        fixture_path("config").join("styleci/presets.json")
    );
    assert_eq!(config.target.constant, "RULE_DEFINITIONS");
    assert_eq!(
        config.target.path,
        fixture_path("config").join("src/Config.php")
    );
}

#[test]
fn test_config_load_file_source_resolves_paths() {
    let config = assert_ok!(Config::load(fixture_path("config/valid_file_source.toml")));
    let base = fixture_path("config");

    assert_eq!(config.source.presets, base.join("../styleci/presets.json"));
    assert_eq!(config.source.fixers, base.join("../styleci/fixers.json"));
    assert!(config.source.presets.is_file());
    assert!(config.source.fixers.is_file());
    assert!(config.target.path.is_file());
}

#[test]
fn test_config_load_invalid_version() {
    let err = Config::load(fixture_path("config/invalid_version.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Validation(_)));
    assert!(err.to_string().contains("Unsupported configuration version"));
}

#[test]
fn test_config_load_invalid_syntax() {
    let err = Config::load(fixture_path("config/invalid_syntax.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_config_load_invalid_constant() {
    let err = Config::load(fixture_path("config/invalid_constant.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Validation(_)));
    assert!(err.to_string().contains("target.constant"));
}

#[test]
fn test_config_load_missing_file() {
    let err = Config::load(fixture_path("config/does_not_exist.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}
