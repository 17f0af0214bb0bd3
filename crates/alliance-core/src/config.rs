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
/// Decoupled from the real environment so tests can drive it from a `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let env = parse_environment(&or_default("ALLIANCE_ENV", "development"))?;
    let log_level = or_default("ALLIANCE_LOG_LEVEL", "info");
    let profiles_path = PathBuf::from(or_default(
        "ALLIANCE_PROFILES_PATH",
        "./config/profiles.yaml",
    ));
    let tuning_path = lookup("ALLIANCE_TUNING_PATH")
        .ok()
        .filter(|p| !p.trim().is_empty())
        .map(PathBuf::from);
    let min_score = parse_score(&or_default("ALLIANCE_MIN_SCORE", "0"))?;

    Ok(AppConfig {
        env,
        log_level,
        profiles_path,
        tuning_path,
        min_score,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "ALLIANCE_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}

/// Parse a 0-100 alignment score threshold.
fn parse_score(raw: &str) -> Result<u8, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidEnvVar {
        var: "ALLIANCE_MIN_SCORE".to_string(),
        reason,
    };
    let value = raw.trim().parse::<u8>().map_err(|e| invalid(e.to_string()))?;
    if value > 100 {
        return Err(invalid(format!("{value} is outside 0-100")));
    }
    Ok(value)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
