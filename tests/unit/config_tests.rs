/*!
 * Tests for configuration loading and defaults
 */

use subtempo::config::{Config, TimingConfig};

use crate::common;

#[test]
fn test_default_shouldProvideUsableThresholds() {
    let config = Config::default();

    assert_eq!(config.timing.max_characters_per_line, 40);
    assert_eq!(config.timing.min_gap_between_subtitles, 100);
    assert!(config.timing.min_characters_per_second > 0.0);
    assert!(config.default_framerate > 0.0);
}

#[test]
fn test_fromStr_withPartialDocument_shouldFillDefaults() {
    let config = Config::from_str(r#"{"timing": {"max-characters-per-line": 50}}"#).unwrap();

    assert_eq!(config.timing.max_characters_per_line, 50);
    // Untouched keys keep their defaults
    assert_eq!(config.timing.min_gap_between_subtitles, 100);
    assert_eq!(config.default_framerate, 25.0);
}

#[test]
fn test_fromStr_withEmptyObject_shouldEqualDefault() {
    let config = Config::from_str("{}").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_fromStr_withKebabCaseKeys_shouldMapFields() {
    let config = Config::from_str(
        r#"{
            "timing": {
                "min-characters-per-second": 8.5,
                "max-characters-per-line": 42,
                "min-gap-between-subtitles": 150
            },
            "default-framerate": 23.976
        }"#,
    )
    .unwrap();

    assert_eq!(config.timing.min_characters_per_second, 8.5);
    assert_eq!(config.timing.max_characters_per_line, 42);
    assert_eq!(config.timing.min_gap_between_subtitles, 150);
    assert_eq!(config.default_framerate, 23.976);
}

#[test]
fn test_fromStr_withInvalidValues_shouldFailValidation() {
    assert!(Config::from_str(r#"{"default-framerate": 0.0}"#).is_err());
    assert!(Config::from_str(r#"{"timing": {"min-gap-between-subtitles": -5}}"#).is_err());
    assert!(Config::from_str("not json at all").is_err());
}

#[test]
fn test_saveAndReload_shouldRoundTrip() {
    let temp_dir = common::create_temp_dir().unwrap();
    let path = temp_dir.path().join("config.json");

    let config = Config {
        timing: TimingConfig {
            min_characters_per_second: 6.0,
            max_characters_per_line: 38,
            min_gap_between_subtitles: 120,
        },
        default_framerate: 29.97,
    };

    config.save(&path).unwrap();
    let reloaded = Config::from_file(&path).unwrap();

    assert_eq!(reloaded, config);
}

#[test]
fn test_fromFile_withMissingFile_shouldFail() {
    assert!(Config::from_file("/no/such/config.json").is_err());
}
