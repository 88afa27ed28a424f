use crate::app_config::{AppConfig, DEFAULT_PREVIEW_USER_AGENT, DEFAULT_QUERIES};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if the Google credentials are missing or a numeric
/// value does not parse.
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
/// Returns `ConfigError` if the Google credentials are missing or a numeric
/// value does not parse.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the process environment so tests can drive it with a
/// plain `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    // An empty credential is as useless as an absent one.
    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.trim()
            .parse::<u32>()
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

    let google_api_key = require("GOOGLE_API_KEY")?;
    let google_cse_cx = require("GOOGLE_CSE_CX")?;

    let default_queries = lookup("TGSCOUT_DEFAULT_QUERIES")
        .ok()
        .map(|raw| parse_list(&raw))
        .filter(|queries| !queries.is_empty())
        .unwrap_or_else(|| DEFAULT_QUERIES.iter().map(|q| (*q).to_string()).collect());

    let max_pages_per_query = parse_u32("TGSCOUT_MAX_PAGES_PER_QUERY", "3")?;
    let request_timeout_secs = parse_u64("TGSCOUT_REQUEST_TIMEOUT_SECS", "10")?;
    let preview_user_agent = or_default("TGSCOUT_PREVIEW_USER_AGENT", DEFAULT_PREVIEW_USER_AGENT);
    let page_delay_ms = parse_u64("TGSCOUT_PAGE_DELAY_MS", "1000")?;
    let output_dir = PathBuf::from(or_default("TGSCOUT_OUTPUT_DIR", "data"));
    let log_level = or_default("TGSCOUT_LOG_LEVEL", "info");

    Ok(AppConfig {
        google_api_key,
        google_cse_cx,
        default_queries,
        max_pages_per_query,
        request_timeout_secs,
        preview_user_agent,
        page_delay_ms,
        output_dir,
        log_level,
    })
}

/// Split a comma-separated list, trimming entries and dropping blanks.
fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
