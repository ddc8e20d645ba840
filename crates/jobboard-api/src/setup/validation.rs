//! Configuration validation
//!
//! Validates critical configuration values at startup to catch misconfigurations early.
//! Value-level checks (secret length, allow-lists, storage settings) already ran when
//! the configuration was parsed; this pass covers what only matters to the server.

use anyhow::Result;
use axum::http::HeaderValue;
use jobboard_core::Config;

/// Validate critical configuration values
pub fn validate_config(config: &Config) -> Result<()> {
    config.validate()?;

    let is_production = config.is_production();

    if is_production && config.cors_origins().iter().any(|o| o == "*") {
        return Err(anyhow::anyhow!(
            "CORS configured to allow all origins (*) in production. \
            Set specific allowed origins via CORS_ORIGINS."
        ));
    }

    for origin in config.cors_origins().iter().filter(|o| o.as_str() != "*") {
        if origin.parse::<HeaderValue>().is_err() {
            return Err(anyhow::anyhow!("Invalid CORS origin: {}", origin));
        }
    }

    if config.db_timeout_seconds() == 0 {
        return Err(anyhow::anyhow!("Database timeout cannot be 0"));
    }

    if is_production && config.jwt_expiry_hours() > 24 {
        tracing::warn!(
            jwt_expiry_hours = config.jwt_expiry_hours(),
            "Tokens live longer than a day in production"
        );
    }

    Ok(())
}
