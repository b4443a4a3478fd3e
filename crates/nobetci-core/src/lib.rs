pub mod app_config;
pub mod config;
pub mod settings;

pub use app_config::{AppConfig, SourceConfig};
pub use config::{load_app_config, load_app_config_from_env, load_source_config};
pub use settings::{
    clamp_limit, PharmacySettings, UpdateInterval, DEFAULT_SENSOR_COUNT, MAX_SENSOR_COUNT,
    MIN_SENSOR_COUNT,
};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("city must not be empty")]
    EmptyCity,

    #[error("sensor count must be between 1 and 20, got {0}")]
    SensorCountOutOfRange(i64),

    #[error("update interval must be 3600 (hourly) or 86400 (daily) seconds, got {0}")]
    InvalidUpdateInterval(u64),
}
