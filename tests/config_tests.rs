//! Config file loading and sample generation

use callerid::infrastructure::config::{load_config_from, write_config_sample, Config};
use std::time::Duration;

#[test]
fn missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = load_config_from(&dir.path().join("config.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn file_values_are_loaded_and_clamped() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
timeout_ms = 15000
lookup_known_contacts = true

[cache]
max_entries = 10
"#,
    )
    .unwrap();

    let config = load_config_from(&path).unwrap();
    assert_eq!(config.timeout(), Duration::from_millis(10_000));
    assert!(config.lookup_known_contacts);
    assert_eq!(config.cache.max_entries, Some(10));
    assert_eq!(config.cache_ttl(), Duration::from_secs(24 * 60 * 60));
}

#[test]
fn unparsable_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "timeout_ms = [not toml").unwrap();

    let config = load_config_from(&path).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn sample_round_trips_and_is_never_overwritten() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("callerid").join("config.toml");

    assert!(write_config_sample(&path).unwrap());
    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains("timeout_ms = 5000"));
    assert!(written.contains("[logging]"));
    assert_eq!(load_config_from(&path).unwrap(), Config::default());

    std::fs::write(&path, "timeout_ms = 2000").unwrap();
    assert!(!write_config_sample(&path).unwrap());
    assert_eq!(load_config_from(&path).unwrap().timeout_ms, 2000);
}
