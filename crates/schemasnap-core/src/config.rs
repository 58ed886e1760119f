use crate::app_config::{AppConfig, Environment, OutputFormat};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is set to a value that cannot be parsed.
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
/// Returns `ConfigError` if a variable is set to a value that cannot be parsed.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable has a default, so an empty environment yields a usable
/// config. Tests drive this with a `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let env = parse_environment(&or_default("SCHEMASNAP_ENV", "development"));
    let log_level = or_default("SCHEMASNAP_LOG_LEVEL", "info");

    let output_format = or_default("SCHEMASNAP_OUTPUT_FORMAT", "pretty")
        .parse::<OutputFormat>()
        .map_err(|reason| ConfigError::InvalidEnvVar {
            var: "SCHEMASNAP_OUTPUT_FORMAT".to_string(),
            reason,
        })?;

    let default_country = or_default("SCHEMASNAP_DEFAULT_COUNTRY", "US")
        .trim()
        .to_ascii_uppercase();
    let description_max_len = parse_usize("SCHEMASNAP_DESCRIPTION_MAX_LEN", "160")?;
    let gazetteer_path = lookup("SCHEMASNAP_GAZETTEER_PATH")
        .ok()
        .filter(|p| !p.trim().is_empty())
        .map(PathBuf::from);

    let geocode_rate_limit = parse_u32("SCHEMASNAP_GEOCODE_RATE_LIMIT", "1")?;
    if geocode_rate_limit == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "SCHEMASNAP_GEOCODE_RATE_LIMIT".to_string(),
            reason: "must be at least 1".to_string(),
        });
    }
    let geocode_window_ms = parse_u64("SCHEMASNAP_GEOCODE_WINDOW_MS", "1000")?;

    Ok(AppConfig {
        env,
        log_level,
        output_format,
        default_country,
        description_max_len,
        gazetteer_path,
        geocode_rate_limit,
        geocode_window_ms,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
