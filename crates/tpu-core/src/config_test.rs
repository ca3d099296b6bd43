use std::collections::HashMap;
use std::env::VarError;
use std::path::PathBuf;

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
fn parse_environment_development() {
    assert_eq!(
        parse_environment("development").unwrap(),
        Environment::Development
    );
}

#[test]
fn parse_environment_test() {
    assert_eq!(parse_environment("test").unwrap(), Environment::Test);
}

#[test]
fn parse_environment_production() {
    assert_eq!(
        parse_environment("production").unwrap(),
        Environment::Production
    );
}

#[test]
fn parse_environment_unknown_fails() {
    let err = parse_environment("staging").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidEnvVar { ref var, .. } if var == "TPU_ENV"));
}

#[test]
fn build_app_config_defaults_with_empty_env() {
    let map: HashMap<&str, &str> = HashMap::new();
    let result = build_app_config(lookup_from_map(&map));
    assert!(result.is_ok(), "expected Ok, got: {result:?}");
    let cfg = result.unwrap();
    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.log_level, "info");
    assert!(cfg.storage_path.is_none());
    assert_eq!(cfg.base_url, "/");
    assert_eq!(cfg.matching_kits_path, "/trailer-axle-kits/");
    assert_eq!(cfg.contact_path, "/contact-us/");
}

#[test]
fn build_app_config_reads_storage_path() {
    let mut map = HashMap::new();
    map.insert("TPU_STORAGE_PATH", "/tmp/tpu/fitment.json");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(
        cfg.storage_path,
        Some(PathBuf::from("/tmp/tpu/fitment.json"))
    );
}

#[test]
fn build_app_config_blank_storage_path_means_no_storage() {
    let mut map = HashMap::new();
    map.insert("TPU_STORAGE_PATH", "   ");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert!(cfg.storage_path.is_none());
}

#[test]
fn build_app_config_base_url_override() {
    let mut map = HashMap::new();
    map.insert("TPU_BASE_URL", "/kits/");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.base_url, "/kits/");
}

#[test]
fn build_app_config_rejects_relative_base_url() {
    let mut map = HashMap::new();
    map.insert("TPU_BASE_URL", "kits/");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "TPU_BASE_URL"),
        "expected InvalidEnvVar(TPU_BASE_URL), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_empty_matching_kits_path() {
    let mut map = HashMap::new();
    map.insert("TPU_MATCHING_KITS_PATH", "");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "TPU_MATCHING_KITS_PATH"),
        "expected InvalidEnvVar(TPU_MATCHING_KITS_PATH), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_unknown_env() {
    let mut map = HashMap::new();
    map.insert("TPU_ENV", "qa");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "TPU_ENV"),
        "expected InvalidEnvVar(TPU_ENV), got: {result:?}"
    );
}

#[test]
fn build_app_config_log_level_override() {
    let mut map = HashMap::new();
    map.insert("TPU_LOG_LEVEL", "debug");
    map.insert("TPU_ENV", "production");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.log_level, "debug");
    assert_eq!(cfg.env, Environment::Production);
    assert_eq!(cfg.env.to_string(), "production");
}
