use crate::app_config::{
    AppConfig, SourceConfig, DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_SOURCE_BASE_URL,
    DEFAULT_USER_AGENT,
};
use crate::settings::{PharmacySettings, UpdateInterval, DEFAULT_SENSOR_COUNT};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
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
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Load only the source/logging configuration (no locality required).
///
/// Calls `dotenvy::dotenv().ok()` first, like [`load_app_config`].
///
/// # Errors
///
/// Returns `ConfigError` if a present value is invalid.
pub fn load_source_config() -> Result<SourceConfig, ConfigError> {
    dotenvy::dotenv().ok();
    build_source_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the process environment so it can be tested with a plain
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_i64 = |var: &str, default: &str| -> Result<i64, ConfigError> {
        let raw = or_default(var, default);
        raw.trim()
            .parse::<i64>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.trim()
            .parse::<u64>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let city = require("NOBETCI_CITY")?;
    let district = or_default("NOBETCI_DISTRICT", "");
    let sensor_count = parse_i64("NOBETCI_SENSOR_COUNT", &DEFAULT_SENSOR_COUNT.to_string())?;
    let update_interval = UpdateInterval::from_secs(parse_u64(
        "NOBETCI_UPDATE_INTERVAL_SECS",
        &UpdateInterval::default().as_secs().to_string(),
    )?)?;

    let settings = PharmacySettings::new(&city, &district, sensor_count, update_interval)?;
    let source = build_source_config(&lookup)?;

    Ok(AppConfig { settings, source })
}

fn build_source_config<F>(lookup: F) -> Result<SourceConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let log_level = or_default("NOBETCI_LOG_LEVEL", "info");
    let source_base_url = or_default("NOBETCI_SOURCE_BASE_URL", DEFAULT_SOURCE_BASE_URL);
    let raw_timeout = or_default(
        "NOBETCI_REQUEST_TIMEOUT_SECS",
        &DEFAULT_REQUEST_TIMEOUT_SECS.to_string(),
    );
    let request_timeout_secs = raw_timeout
        .trim()
        .parse::<u64>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            var: "NOBETCI_REQUEST_TIMEOUT_SECS".to_string(),
            reason: e.to_string(),
        })?;
    let user_agent = or_default("NOBETCI_USER_AGENT", DEFAULT_USER_AGENT);

    Ok(SourceConfig {
        log_level,
        source_base_url,
        request_timeout_secs,
        user_agent,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
