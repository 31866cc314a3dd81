// Settings loading tests
//
// Environment overrides are process-wide, so everything touching
// CLOUDMATCH__ variables lives in a single test.

use cloudmatch::{AbsentPolicy, DecodeMode, Settings};
use std::io::Write;

fn settings_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_load_from_file_and_environment() {
    let file = settings_file(
        r#"
        [mapping]
        absent = "zero_value"

        [logging]
        level = "debug"
        "#,
    );

    let settings = Settings::load_from(file.path()).unwrap();
    assert_eq!(settings.mapping.mode, DecodeMode::Lenient);
    assert_eq!(settings.mapping.absent, AbsentPolicy::ZeroValue);
    assert_eq!(settings.logging.level, "debug");
    assert_eq!(settings.logging.format, "json");

    std::env::set_var("CLOUDMATCH__MAPPING__MODE", "strict");
    let overridden = Settings::load_from(file.path());
    let from_defaults = Settings::load();
    std::env::remove_var("CLOUDMATCH__MAPPING__MODE");

    let overridden = overridden.unwrap();
    assert_eq!(overridden.mapping.mode, DecodeMode::Strict);
    assert_eq!(overridden.mapping.absent, AbsentPolicy::ZeroValue);
    assert_eq!(overridden.logging.level, "debug");

    // config/default.toml plus the override
    let from_defaults = from_defaults.unwrap();
    assert_eq!(from_defaults.mapping.mode, DecodeMode::Strict);
    assert_eq!(from_defaults.mapping.absent, AbsentPolicy::Null);
    assert_eq!(from_defaults.logging.level, "info");
}

#[test]
fn test_load_from_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    assert!(Settings::load_from(dir.path().join("absent.toml")).is_err());
}
