//! Unit tests for the SettingsEngine public API and the EngineSettings
//! defaults it persists.

use calgroups::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use calgroups::types::errors::SettingsError;
use calgroups::types::settings::{EngineSettings, ScanTiming};
use tempfile::TempDir;

fn setup() -> (SettingsEngine, TempDir) {
    let tmp = TempDir::new().expect("Failed to create temp dir");
    let path = tmp
        .path()
        .join("settings.json")
        .to_string_lossy()
        .to_string();
    let mut engine = SettingsEngine::new(Some(path));
    engine.load().unwrap();
    (engine, tmp)
}

/// The production settle delays and thresholds, spelled out so an accidental
/// change to a default is caught.
#[test]
fn test_default_values() {
    let defaults = EngineSettings::default();

    assert_eq!(defaults.timing.section_settle_ms, 500);
    assert_eq!(defaults.timing.step_settle_ms, 150);
    assert_eq!(defaults.timing.edge_settle_ms, 200);
    assert_eq!(defaults.timing.sync_step_settle_ms, 100);
    assert_eq!(defaults.cache_retention_hours, 24);
    assert_eq!(defaults.scroll_epsilon_px, 10.0);
    assert_eq!(defaults.min_scroll_step_px, 50.0);
}

#[test]
fn test_cache_retention_in_millis() {
    let defaults = EngineSettings::default();
    assert_eq!(defaults.cache_retention_ms(), 24 * 60 * 60 * 1000);

    let one_hour = EngineSettings {
        cache_retention_hours: 1,
        ..EngineSettings::default()
    };
    assert_eq!(one_hour.cache_retention_ms(), 3_600_000);
}

#[test]
fn test_save_then_load_roundtrip() {
    let (mut engine, tmp) = setup();

    engine
        .set_value("min_scroll_step_px", serde_json::json!(75.0))
        .unwrap();

    let path = tmp
        .path()
        .join("settings.json")
        .to_string_lossy()
        .to_string();
    let mut reloaded = SettingsEngine::new(Some(path));
    let settings = reloaded.load().unwrap();
    assert_eq!(settings.min_scroll_step_px, 75.0);
    // Untouched fields keep their defaults
    assert_eq!(settings.timing, ScanTiming::default());
}

/// The whole nested timing object can be replaced in one call.
#[test]
fn test_set_value_replaces_nested_object() {
    let (mut engine, _tmp) = setup();

    engine
        .set_value(
            "timing",
            serde_json::json!({
                "section_settle_ms": 0,
                "step_settle_ms": 0,
                "edge_settle_ms": 0,
                "sync_step_settle_ms": 0,
            }),
        )
        .unwrap();

    assert_eq!(engine.get_settings().timing, ScanTiming::zero());
}

#[test]
fn test_set_value_rejects_empty_key() {
    let (mut engine, _tmp) = setup();
    assert!(matches!(
        engine.set_value("", serde_json::json!(1)),
        Err(SettingsError::InvalidKey(_))
    ));
}

/// A partial config file on disk is filled out with defaults on load.
#[test]
fn test_load_partial_file_fills_defaults() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("settings.json");
    std::fs::write(&path, r#"{"cache_retention_hours": 6}"#).unwrap();

    let mut engine = SettingsEngine::new(Some(path.to_string_lossy().to_string()));
    let settings = engine.load().unwrap();

    assert_eq!(settings.cache_retention_hours, 6);
    assert_eq!(settings.timing, ScanTiming::default());
    assert_eq!(settings.scroll_epsilon_px, 10.0);
}

#[test]
fn test_load_malformed_file_is_an_error() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("settings.json");
    std::fs::write(&path, "{not json").unwrap();

    let mut engine = SettingsEngine::new(Some(path.to_string_lossy().to_string()));
    assert!(matches!(
        engine.load(),
        Err(SettingsError::SerializationError(_))
    ));
}

/// Saving creates missing parent directories rather than failing.
#[test]
fn test_save_creates_parent_directories() {
    let tmp = TempDir::new().unwrap();
    let path = tmp
        .path()
        .join("nested")
        .join("dirs")
        .join("settings.json");

    let engine = SettingsEngine::new(Some(path.to_string_lossy().to_string()));
    engine.save().unwrap();

    assert!(path.exists());
}
