use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

/// Returns a map with all required env vars populated with valid defaults.
fn full_env<'a>() -> HashMap<&'a str, &'a str> {
    let mut m = HashMap::new();
    m.insert("NOBETCI_CITY", "Tekirdağ");
    m
}

#[test]
fn build_app_config_fails_without_city() {
    let map: HashMap<&str, &str> = HashMap::new();
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "NOBETCI_CITY"),
        "expected MissingEnvVar(NOBETCI_CITY), got: {result:?}"
    );
}

#[test]
fn build_app_config_fails_with_blank_city() {
    let mut map = HashMap::new();
    map.insert("NOBETCI_CITY", "   ");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::EmptyCity)),
        "expected EmptyCity, got: {result:?}"
    );
}

#[test]
fn build_app_config_succeeds_with_defaults() {
    let map = full_env();
    let result = build_app_config(lookup_from_map(&map));
    assert!(result.is_ok(), "expected Ok, got: {result:?}");
    let cfg = result.unwrap();
    assert_eq!(cfg.settings.city, "Tekirdağ");
    assert_eq!(cfg.settings.district, "");
    assert_eq!(cfg.settings.sensor_count, 5);
    assert_eq!(cfg.settings.update_interval, UpdateInterval::Hourly);
    assert_eq!(cfg.source.log_level, "info");
    assert_eq!(cfg.source.source_base_url, "https://eczaneleri.net");
    assert_eq!(cfg.source.request_timeout_secs, 15);
    assert_eq!(cfg.source.user_agent, DEFAULT_USER_AGENT);
}

#[test]
fn build_app_config_reads_district_and_sensor_count() {
    let mut map = full_env();
    map.insert("NOBETCI_DISTRICT", " Çorlu ");
    map.insert("NOBETCI_SENSOR_COUNT", "12");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.settings.district, "Çorlu");
    assert_eq!(cfg.settings.sensor_count, 12);
}

#[test]
fn build_app_config_rejects_sensor_count_out_of_range() {
    let mut map = full_env();
    map.insert("NOBETCI_SENSOR_COUNT", "21");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::SensorCountOutOfRange(21))),
        "expected SensorCountOutOfRange(21), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_non_numeric_sensor_count() {
    let mut map = full_env();
    map.insert("NOBETCI_SENSOR_COUNT", "five");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "NOBETCI_SENSOR_COUNT"),
        "expected InvalidEnvVar(NOBETCI_SENSOR_COUNT), got: {result:?}"
    );
}

#[test]
fn build_app_config_daily_interval() {
    let mut map = full_env();
    map.insert("NOBETCI_UPDATE_INTERVAL_SECS", "86400");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.settings.update_interval, UpdateInterval::Daily);
}

#[test]
fn build_app_config_rejects_unsupported_interval() {
    let mut map = full_env();
    map.insert("NOBETCI_UPDATE_INTERVAL_SECS", "600");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidUpdateInterval(600))),
        "expected InvalidUpdateInterval(600), got: {result:?}"
    );
}

#[test]
fn build_app_config_request_timeout_override() {
    let mut map = full_env();
    map.insert("NOBETCI_REQUEST_TIMEOUT_SECS", "30");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.source.request_timeout_secs, 30);
}

#[test]
fn build_app_config_request_timeout_invalid() {
    let mut map = full_env();
    map.insert("NOBETCI_REQUEST_TIMEOUT_SECS", "not-a-number");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "NOBETCI_REQUEST_TIMEOUT_SECS"),
        "expected InvalidEnvVar(NOBETCI_REQUEST_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn build_app_config_source_and_user_agent_override() {
    let mut map = full_env();
    map.insert("NOBETCI_SOURCE_BASE_URL", "http://127.0.0.1:8080");
    map.insert("NOBETCI_USER_AGENT", "nobetci-test/0.1");
    map.insert("NOBETCI_LOG_LEVEL", "debug");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.source.source_base_url, "http://127.0.0.1:8080");
    assert_eq!(cfg.source.user_agent, "nobetci-test/0.1");
    assert_eq!(cfg.source.log_level, "debug");
}

#[test]
fn build_source_config_needs_no_city() {
    let map: HashMap<&str, &str> = HashMap::new();
    let source = build_source_config(lookup_from_map(&map)).unwrap();
    assert_eq!(source.source_base_url, DEFAULT_SOURCE_BASE_URL);
    assert_eq!(source.request_timeout_secs, DEFAULT_REQUEST_TIMEOUT_SECS);
}
