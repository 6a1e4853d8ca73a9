/*!
 * Tests for app configuration functionality
 */

use anyhow::Result;
use subtidy::app_config::{Config, LogLevel};
use crate::common;

/// Test default configuration values
#[test]
fn test_default_config_shouldHaveExpectedValues() {
    let config = Config::default();

    assert_eq!(config.language_tag, "zh");
    assert!(config.write_reports);
    assert!(config.dictionary_path.is_none());
    assert_eq!(config.log_level, LogLevel::Info);
}

/// Test saving and reloading a configuration file
#[test]
fn test_config_saveAndLoad_shouldRoundTrip() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("conf.json");

    let mut config = Config::default();
    config.language_tag = "zh-Hant".to_string();
    config.write_reports = false;
    config.log_level = LogLevel::Debug;
    config.save(&path)?;

    let reloaded = Config::from_file(&path)?;
    assert_eq!(reloaded.language_tag, "zh-Hant");
    assert!(!reloaded.write_reports);
    assert_eq!(reloaded.log_level, LogLevel::Debug);
    Ok(())
}

/// Test that missing fields fall back to defaults when parsing
#[test]
fn test_config_fromPartialJson_shouldApplyDefaults() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(
        &temp_dir.path().to_path_buf(),
        "conf.json",
        r#"{"language_tag": "ja"}"#,
    )?;

    let config = Config::from_file(&path)?;
    assert_eq!(config.language_tag, "ja");
    assert!(config.write_reports);
    assert_eq!(config.log_level, LogLevel::Info);
    Ok(())
}

/// Test that loading a missing config file fails
#[test]
fn test_config_fromMissingFile_shouldFail() {
    assert!(Config::from_file("does-not-exist.json").is_err());
}

/// Test explicit dictionary path resolution
#[test]
fn test_resolveDictionaryPath_withExplicitPath_shouldReturnIt() {
    let mut config = Config::default();
    config.dictionary_path = Some("terms.json".into());

    assert_eq!(config.resolve_dictionary_path(), Some("terms.json".into()));
}

/// Test log level display and filter conversion
#[test]
fn test_logLevel_conversions_shouldMatch() {
    assert_eq!(LogLevel::Warn.to_string(), "warn");
    assert_eq!(LogLevel::Trace.to_level_filter(), log::LevelFilter::Trace);
}
