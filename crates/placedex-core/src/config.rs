use crate::app_config::{AppConfig, Environment, OutputFormat};
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
/// Decoupled from the real environment so tests can use a `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let env = parse_environment(&or_default("PLACEDEX_ENV", "development"))?;
    let log_level = or_default("PLACEDEX_LOG_LEVEL", "info");
    let output_format = parse_output_format(&or_default("PLACEDEX_OUTPUT_FORMAT", "json"))?;
    let strip_guard_prefix = parse_bool(
        "PLACEDEX_STRIP_GUARD_PREFIX",
        &or_default("PLACEDEX_STRIP_GUARD_PREFIX", "true"),
    )?;

    Ok(AppConfig {
        env,
        log_level,
        output_format,
        strip_guard_prefix,
    })
}

fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "PLACEDEX_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}

/// Parse an output format name as accepted by both the env var and the CLI.
///
/// # Errors
///
/// Returns `ConfigError::InvalidEnvVar` for names other than `json` / `jsonl`.
pub fn parse_output_format(s: &str) -> Result<OutputFormat, ConfigError> {
    match s {
        "json" => Ok(OutputFormat::Json),
        "jsonl" | "ndjson" => Ok(OutputFormat::JsonLines),
        other => Err(ConfigError::InvalidEnvVar {
            var: "PLACEDEX_OUTPUT_FORMAT".to_string(),
            reason: format!("unknown output format '{other}'"),
        }),
    }
}

fn parse_bool(var: &str, s: &str) -> Result<bool, ConfigError> {
    match s {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        other => Err(ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: format!("expected true/false, got '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
