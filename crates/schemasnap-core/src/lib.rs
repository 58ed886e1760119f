pub mod app_config;
pub mod business_types;
pub mod config;

pub use app_config::{AppConfig, Environment, OutputFormat};
pub use business_types::{is_supported_business_type, DEFAULT_BUSINESS_TYPE, SUPPORTED_BUSINESS_TYPES};
pub use config::{load_app_config, load_app_config_from_env};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
