//! Tests for the configuration module.
//!
//! This module contains tests for configuration loading, validation, and writing.

use std::path::Path;

use crate::config::{write_config, ConfigLoader, KukuiConfig, LogConfig, Validate};
use crate::error::config::ConfigError;
use crate::tests::TestFixture;

/// Test that default configuration can be created and is valid.
#[test]
fn test_default_config_is_valid() {
    let config = KukuiConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.trie_map.max_depth, 1024);
    assert_eq!(config.worklists.stack_initial_capacity, 10);
    assert_eq!(config.log.level, "info");
}

/// Test that configuration validation catches invalid values.
#[test]
fn test_config_validation() {
    let mut config = KukuiConfig::default();

    config.trie_map.max_depth = 0;
    assert!(config.validate().is_err());

    config.trie_map.max_depth = 16;
    config.worklists.fifo_capacity = 0;
    assert!(config.validate().is_err());

    config.worklists.fifo_capacity = 8;
    config.log = LogConfig {
        level: "verbose".to_string(),
        ..LogConfig::default()
    };
    assert_eq!(
        config.validate(),
        Err(ConfigError::ValidationError(
            "Invalid log level: verbose".to_string()
        ))
    );
}

/// Test loading configuration from a TOML file.
#[test]
fn test_load_config_from_toml_file() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture
        .create_file(
            r#"
            [trie_map]
            max_depth = 32

            [worklists]
            fifo_capacity = 4

            [log]
            level = "debug"
            "#,
            ".toml",
        )
        .unwrap();

    let config = ConfigLoader::new(Some(&path), "KUKUI_TEST_TOML").load().unwrap();
    assert_eq!(config.trie_map.max_depth, 32);
    assert_eq!(config.worklists.fifo_capacity, 4);
    assert_eq!(config.log.level, "debug");

    // Other values should be defaults
    assert_eq!(config.trie_map.initial_node_capacity, 16);
    assert_eq!(config.worklists.stack_initial_capacity, 10);
    assert!(!config.log.json);
}

/// Test loading configuration from a JSON file.
#[test]
fn test_load_config_from_json_file() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture
        .create_file(r#"{ "log": { "json": true } }"#, ".json")
        .unwrap();

    let config = ConfigLoader::new(Some(&path), "KUKUI_TEST_JSON").load().unwrap();
    assert!(config.log.json);
    assert_eq!(config.trie_map, KukuiConfig::default().trie_map);
}

/// Test that environment variables override file values.
#[test]
fn test_env_overrides_file() {
    let mut fixture = TestFixture::new().unwrap();
    let path = fixture
        .create_file("[trie_map]\nmax_depth = 32\n", ".toml")
        .unwrap();
    fixture.set_env("KUKUI_TEST_ENV__TRIE_MAP__MAX_DEPTH", "64");

    let config = ConfigLoader::new(Some(&path), "KUKUI_TEST_ENV").load().unwrap();
    assert_eq!(config.trie_map.max_depth, 64);
}

/// Test that loaded configuration is validated.
#[test]
fn test_invalid_file_rejected() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture
        .create_file("[worklists]\nstack_initial_capacity = 0\n", ".toml")
        .unwrap();

    let err = ConfigLoader::new(Some(&path), "KUKUI_TEST_INVALID")
        .load()
        .unwrap_err();
    assert!(matches!(err, ConfigError::ValueOutOfRange { .. }));
}

#[test]
fn test_missing_file_and_bad_extension() {
    let fixture = TestFixture::new().unwrap();

    let missing = fixture.temp_dir.path().join("absent.toml");
    let err = ConfigLoader::new(Some(&missing), "KUKUI_TEST_MISSING")
        .load()
        .unwrap_err();
    assert_eq!(err, ConfigError::FileNotFound(missing));

    let path = fixture.create_file("max_depth: 3", ".conf").unwrap();
    let err = ConfigLoader::new(Some(&path), "KUKUI_TEST_EXT")
        .load()
        .unwrap_err();
    assert!(matches!(err, ConfigError::ParseError(_)));
}

#[test]
fn test_loader_without_file_uses_defaults() {
    let config = ConfigLoader::new(None::<&Path>, "KUKUI_TEST_NONE").load().unwrap();
    assert_eq!(config, KukuiConfig::default());
}

/// Test that written configuration loads back unchanged.
#[test]
fn test_written_config_loads_back() {
    let fixture = TestFixture::new().unwrap();
    let mut config = KukuiConfig::default();
    config.trie_map.max_depth = 99;
    config.worklists.fifo_capacity = 7;

    for name in ["written.toml", "written.json"] {
        let path = fixture.temp_dir.path().join(name);
        write_config(&config, &path).unwrap();

        let loaded = ConfigLoader::new(Some(&path), "KUKUI_TEST_WRITTEN").load().unwrap();
        assert_eq!(loaded, config);
    }
}
