//! Client configuration resolved from build-time environment variables.
//!
//! The WASM bundle has no process environment at runtime, so values are
//! baked in with `option_env!` when the crate is compiled:
//!
//! - `BLOG_API_BASE_URL`: auth API origin or path prefix, default
//!   `http://localhost:5000`. Trailing `/` is stripped.
//! - `BLOG_LOG_LEVEL`: `error`, `warn`, `info` (default), `debug`, `trace`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::str::FromStr;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";
pub const DEFAULT_LOG_LEVEL: log::Level = log::Level::Info;

/// Errors produced while resolving [`ClientConfig`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid BLOG_API_BASE_URL '{0}' (expected http://, https:// or a /path prefix)")]
    InvalidBaseUrl(String),

    #[error("unknown BLOG_LOG_LEVEL '{0}'")]
    InvalidLogLevel(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Prefix joined with form endpoints such as `/signin`.
    pub api_base_url: String,
    pub log_level: log::Level,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { api_base_url: DEFAULT_API_BASE_URL.to_owned(), log_level: DEFAULT_LOG_LEVEL }
    }
}

impl ClientConfig {
    /// Resolve the values captured at compile time.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if a provided value is malformed.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_values(option_env!("BLOG_API_BASE_URL"), option_env!("BLOG_LOG_LEVEL"))
    }

    /// Resolve from raw optional values; `None` or blank means default.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if a provided value is malformed.
    pub fn from_values(api_base_url: Option<&str>, log_level: Option<&str>) -> Result<Self, ConfigError> {
        let api_base_url = parse_base_url(api_base_url)?;
        let log_level = parse_log_level(log_level)?;
        Ok(Self { api_base_url, log_level })
    }
}

fn parse_base_url(raw: Option<&str>) -> Result<String, ConfigError> {
    let raw = raw.map(str::trim).filter(|v| !v.is_empty()).unwrap_or(DEFAULT_API_BASE_URL);
    let accepted = raw.starts_with("http://") || raw.starts_with("https://") || raw.starts_with('/');
    if !accepted {
        return Err(ConfigError::InvalidBaseUrl(raw.to_owned()));
    }
    Ok(raw.trim_end_matches('/').to_owned())
}

fn parse_log_level(raw: Option<&str>) -> Result<log::Level, ConfigError> {
    match raw.map(str::trim).filter(|v| !v.is_empty()) {
        None => Ok(DEFAULT_LOG_LEVEL),
        Some(level) => log::Level::from_str(level).map_err(|_| ConfigError::InvalidLogLevel(level.to_owned())),
    }
}
