use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can drive it with a plain
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let path_like = |var: &str, default: &str| -> Result<String, ConfigError> {
        let raw = or_default(var, default);
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        if !trimmed.starts_with('/') {
            return Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: format!("must be an absolute path, got {trimmed:?}"),
            });
        }
        Ok(trimmed.to_string())
    };

    let env = parse_environment(&or_default("TPU_ENV", "development"))?;
    let log_level = or_default("TPU_LOG_LEVEL", "info");

    // An empty path is treated the same as an unset one: no durable storage.
    let storage_path = lookup("TPU_STORAGE_PATH")
        .ok()
        .filter(|p| !p.trim().is_empty())
        .map(PathBuf::from);

    let base_url = path_like("TPU_BASE_URL", "/")?;
    let matching_kits_path = path_like("TPU_MATCHING_KITS_PATH", "/trailer-axle-kits/")?;
    let contact_path = path_like("TPU_CONTACT_PATH", "/contact-us/")?;

    Ok(AppConfig {
        env,
        log_level,
        storage_path,
        base_url,
        matching_kits_path,
        contact_path,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "TPU_ENV".to_string(),
            reason: format!(
                "unknown environment {other:?}; expected development, test, or production"
            ),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
