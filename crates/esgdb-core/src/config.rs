use crate::app_config::AppConfig;
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
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual environment
/// so it can be tested with a pure `HashMap` lookup — no `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
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

    // The reasoning-service credential is the only hard requirement; a run
    // without it must fail before the batch starts.
    let openai_api_key = require("ESGDB_OPENAI_API_KEY")?;

    let openai_base_url = or_default("ESGDB_OPENAI_BASE_URL", "https://api.openai.com");
    let model = or_default("ESGDB_MODEL", "gpt-4o");
    let log_level = or_default("ESGDB_LOG_LEVEL", "info");
    let companies_path = PathBuf::from(or_default(
        "ESGDB_COMPANIES_PATH",
        "./config/companies.yaml",
    ));

    let fetch_timeout_secs = parse_u64("ESGDB_FETCH_TIMEOUT_SECS", "15")?;
    let reasoning_timeout_secs = parse_u64("ESGDB_REASONING_TIMEOUT_SECS", "60")?;
    let user_agent = or_default("ESGDB_USER_AGENT", "esgdb/0.1 (esg-data-collection)");
    let max_concurrent_companies = parse_usize("ESGDB_MAX_CONCURRENT_COMPANIES", "1")?;
    let run_limit = parse_usize("ESGDB_RUN_LIMIT", "5")?;

    if fetch_timeout_secs == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "ESGDB_FETCH_TIMEOUT_SECS".to_string(),
            reason: "timeout must be at least 1 second".to_string(),
        });
    }
    if reasoning_timeout_secs == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "ESGDB_REASONING_TIMEOUT_SECS".to_string(),
            reason: "timeout must be at least 1 second".to_string(),
        });
    }

    Ok(AppConfig {
        openai_api_key,
        openai_base_url,
        model,
        log_level,
        companies_path,
        fetch_timeout_secs,
        reasoning_timeout_secs,
        user_agent,
        max_concurrent_companies,
        run_limit,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
