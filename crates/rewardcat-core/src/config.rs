use crate::app_config::AppConfig;
use crate::ConfigError;

pub(crate) const DEFAULT_BASE_URL: &str =
    "https://loyalty-award-api.myvip.co/api/proxy/rewards/section/";

/// Load crawl configuration from environment variables.
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

/// Load crawl configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build crawl configuration using the provided env-var lookup function.
///
/// Every variable has a default, so an empty environment yields the stock
/// crawl of the `category` collection.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.trim()
            .parse::<u32>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.trim()
            .parse::<u64>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.trim()
            .parse::<usize>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let base_url = or_default("REWARDCAT_BASE_URL", DEFAULT_BASE_URL);
    if base_url.trim().is_empty() {
        return Err(invalid("REWARDCAT_BASE_URL", "must not be empty".into()));
    }

    let slugs = parse_slugs(&or_default("REWARDCAT_SLUGS", "category"));
    if slugs.is_empty() {
        return Err(invalid(
            "REWARDCAT_SLUGS",
            "at least one collection slug is required".into(),
        ));
    }

    let max_page = parse_u32("REWARDCAT_MAX_PAGE", "50")?;
    let max_concurrent_pages = parse_usize("REWARDCAT_MAX_CONCURRENT_PAGES", "4")?;
    let request_timeout_secs = parse_u64("REWARDCAT_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("REWARDCAT_USER_AGENT", "rewardcat/0.1 (reward-catalog)");
    let log_level = or_default("REWARDCAT_LOG_LEVEL", "info");

    Ok(AppConfig {
        base_url: base_url.trim().to_string(),
        slugs,
        max_page,
        max_concurrent_pages,
        request_timeout_secs,
        user_agent,
        log_level,
    })
}

/// Split a comma-separated slug list, dropping blanks and duplicates while
/// keeping first-seen order.
fn parse_slugs(raw: &str) -> Vec<String> {
    let mut slugs: Vec<String> = Vec::new();
    for slug in raw.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        if !slugs.iter().any(|s| s == slug) {
            slugs.push(slug.to_string());
        }
    }
    slugs
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
