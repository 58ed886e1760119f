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

#[test]
fn parse_environment_production() {
    assert_eq!(parse_environment("production"), Environment::Production);
}

#[test]
fn parse_environment_test() {
    assert_eq!(parse_environment("test"), Environment::Test);
}

#[test]
fn parse_environment_unknown_defaults_to_development() {
    assert_eq!(parse_environment("staging"), Environment::Development);
}

#[test]
fn build_app_config_defaults_from_empty_env() {
    let map: HashMap<&str, &str> = HashMap::new();
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.output_format, OutputFormat::Pretty);
    assert_eq!(cfg.default_country, "US");
    assert_eq!(cfg.description_max_len, 160);
    assert!(cfg.gazetteer_path.is_none());
    assert_eq!(cfg.geocode_rate_limit, 1);
    assert_eq!(cfg.geocode_window_ms, 1000);
}

#[test]
fn output_format_override() {
    let mut map = HashMap::new();
    map.insert("SCHEMASNAP_OUTPUT_FORMAT", "minified");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.output_format, OutputFormat::Minified);
}

#[test]
fn output_format_accepts_formatted_alias() {
    let mut map = HashMap::new();
    map.insert("SCHEMASNAP_OUTPUT_FORMAT", "Formatted");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.output_format, OutputFormat::Pretty);
}

#[test]
fn output_format_invalid() {
    let mut map = HashMap::new();
    map.insert("SCHEMASNAP_OUTPUT_FORMAT", "xml");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "SCHEMASNAP_OUTPUT_FORMAT"),
        "expected InvalidEnvVar(SCHEMASNAP_OUTPUT_FORMAT), got: {result:?}"
    );
}

#[test]
fn default_country_is_uppercased() {
    let mut map = HashMap::new();
    map.insert("SCHEMASNAP_DEFAULT_COUNTRY", " ca ");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.default_country, "CA");
}

#[test]
fn description_max_len_invalid() {
    let mut map = HashMap::new();
    map.insert("SCHEMASNAP_DESCRIPTION_MAX_LEN", "lots");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "SCHEMASNAP_DESCRIPTION_MAX_LEN"),
        "expected InvalidEnvVar(SCHEMASNAP_DESCRIPTION_MAX_LEN), got: {result:?}"
    );
}

#[test]
fn blank_gazetteer_path_is_ignored() {
    let mut map = HashMap::new();
    map.insert("SCHEMASNAP_GAZETTEER_PATH", "   ");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert!(cfg.gazetteer_path.is_none());
}

#[test]
fn gazetteer_path_override() {
    let mut map = HashMap::new();
    map.insert("SCHEMASNAP_GAZETTEER_PATH", "./config/places.yaml");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(
        cfg.gazetteer_path.as_deref(),
        Some(std::path::Path::new("./config/places.yaml"))
    );
}

#[test]
fn geocode_rate_limit_zero_is_rejected() {
    let mut map = HashMap::new();
    map.insert("SCHEMASNAP_GEOCODE_RATE_LIMIT", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "SCHEMASNAP_GEOCODE_RATE_LIMIT"),
        "expected InvalidEnvVar(SCHEMASNAP_GEOCODE_RATE_LIMIT), got: {result:?}"
    );
}

#[test]
fn geocode_window_ms_override() {
    let mut map = HashMap::new();
    map.insert("SCHEMASNAP_GEOCODE_WINDOW_MS", "2500");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.geocode_window_ms, 2500);
}

#[test]
fn geocode_window_ms_invalid() {
    let mut map = HashMap::new();
    map.insert("SCHEMASNAP_GEOCODE_WINDOW_MS", "-1");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "SCHEMASNAP_GEOCODE_WINDOW_MS"),
        "expected InvalidEnvVar(SCHEMASNAP_GEOCODE_WINDOW_MS), got: {result:?}"
    );
}

#[test]
fn output_format_serializes_lowercase() {
    let json = serde_json::to_string(&OutputFormat::Html).unwrap();
    assert_eq!(json, "\"html\"");
}
