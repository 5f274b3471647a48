use crate::app_config::AppConfig;
use crate::ConfigError;

/// Landing page the scraper starts from.
pub const DEFAULT_START_URL: &str = "https://uk.trip.com/hotels/?locale=en-GB&curr=GBP";

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
/// Decoupled from the process environment so tests can drive it with a
/// plain `HashMap`.
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

    let log_level = or_default("TRIPSCRAPE_LOG_LEVEL", "info");
    let start_url = or_default("TRIPSCRAPE_START_URL", DEFAULT_START_URL);
    if !(start_url.starts_with("http://") || start_url.starts_with("https://")) {
        return Err(ConfigError::InvalidEnvVar {
            var: "TRIPSCRAPE_START_URL".to_string(),
            reason: format!("expected an http(s) URL, got \"{start_url}\""),
        });
    }

    let output_dir = PathBuf::from(or_default("TRIPSCRAPE_OUTPUT_DIR", "."));
    let locations_file = or_default("TRIPSCRAPE_LOCATIONS_FILE", "Scraped_locations.json");
    let hotels_file = or_default("TRIPSCRAPE_HOTELS_FILE", "Scraped_hotels.json");
    if locations_file == hotels_file {
        return Err(ConfigError::InvalidEnvVar {
            var: "TRIPSCRAPE_HOTELS_FILE".to_string(),
            reason: "must differ from TRIPSCRAPE_LOCATIONS_FILE".to_string(),
        });
    }
    let images_dir = PathBuf::from(or_default("TRIPSCRAPE_IMAGES_DIR", "images"));

    let request_timeout_secs = parse_u64("TRIPSCRAPE_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default(
        "TRIPSCRAPE_USER_AGENT",
        "tripscrape/0.1 (hotel-landing-extractor)",
    );
    let max_retries = parse_u32("TRIPSCRAPE_MAX_RETRIES", "3")?;
    let retry_backoff_base_ms = parse_u64("TRIPSCRAPE_RETRY_BACKOFF_BASE_MS", "1000")?;

    Ok(AppConfig {
        log_level,
        start_url,
        output_dir,
        locations_file,
        hotels_file,
        images_dir,
        request_timeout_secs,
        user_agent,
        max_retries,
        retry_backoff_base_ms,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
