//! Configuration helpers
//!
//! Both binaries read their settings from environment variables (optionally
//! seeded from a `.env` file). This module holds the error type and the
//! parsing helpers they share.

use std::str::FromStr;
use thiserror::Error;

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("invalid value for {key}: '{value}'")]
    InvalidValue { key: &'static str, value: String },
    #[error("missing value: {0}")]
    MissingValue(&'static str),
}

/// Read `key` from the environment and parse it, falling back to `default`
/// when the variable is unset or empty.
pub fn env_or<T: FromStr>(key: &'static str, default: T) -> Result<T, ConfigError> {
    match std::env::var(key) {
        Ok(raw) if !raw.trim().is_empty() => parse_value(key, &raw),
        _ => Ok(default),
    }
}

/// Parse a raw configuration value, reporting the key on failure.
pub fn parse_value<T: FromStr>(key: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse::<T>().map_err(|_| ConfigError::InvalidValue {
        key,
        value: raw.to_string(),
    })
}

/// Check that a base URL uses an HTTP scheme and strip any trailing slash.
pub fn normalize_base_url(url: &str) -> Result<String, ConfigError> {
    let url = url.trim();
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(ConfigError::InvalidUrl(url.to_string()));
    }
    Ok(url.trim_end_matches('/').to_string())
}
