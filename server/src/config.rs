//! Host server configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_PLAYER_API_URL: &str = "https://localhost:7251";
pub const DEFAULT_PLAYER_API_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a valid {expected}, got {value:?}")]
    Invalid { var: &'static str, expected: &'static str, value: String },
    #[error("{var} must be an http(s) URL, got {value:?}")]
    BadUrl { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Remote player service origin, without a trailing slash.
    pub player_api_url: String,
    /// Accept self-signed upstream certificates (local dev service).
    pub insecure_tls: bool,
    pub upstream_timeout: Duration,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `PLAYER_API_URL`: default `https://localhost:7251`
    /// - `PLAYER_API_INSECURE_TLS`: default false
    /// - `PLAYER_API_TIMEOUT_SECS`: default 30
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is set but malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = parse_var(&lookup, "PORT", "port number", DEFAULT_PORT)?;

        let player_api_url = lookup("PLAYER_API_URL")
            .map(|raw| raw.trim().to_owned())
            .filter(|raw| !raw.is_empty())
            .unwrap_or_else(|| DEFAULT_PLAYER_API_URL.to_owned())
            .trim_end_matches('/')
            .to_owned();
        if !(player_api_url.starts_with("http://") || player_api_url.starts_with("https://")) {
            return Err(ConfigError::BadUrl { var: "PLAYER_API_URL", value: player_api_url });
        }

        let insecure_tls = match lookup("PLAYER_API_INSECURE_TLS") {
            None => false,
            Some(raw) => parse_bool(&raw).ok_or(ConfigError::Invalid {
                var: "PLAYER_API_INSECURE_TLS",
                expected: "boolean",
                value: raw,
            })?,
        };

        let timeout_secs =
            parse_var(&lookup, "PLAYER_API_TIMEOUT_SECS", "number of seconds", DEFAULT_PLAYER_API_TIMEOUT_SECS)?;

        Ok(Self { port, player_api_url, insecure_tls, upstream_timeout: Duration::from_secs(timeout_secs) })
    }
}

pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn parse_var<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    expected: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(var) {
        None => Ok(default),
        Some(raw) => raw.trim().parse::<T>().map_err(|_| ConfigError::Invalid { var, expected, value: raw }),
    }
}
