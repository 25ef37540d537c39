//! Client configuration parsed from environment variables.

use std::path::PathBuf;

use crate::net::error::ClientError;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8080/api";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_SESSION_FILE: &str = ".coursehub-session.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self { request_secs: DEFAULT_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API root every request path is appended to, without trailing `/`.
    pub base_url: String,
    pub timeouts: Timeouts,
    /// Where native callers persist the session (`token` / `userInfo`).
    pub session_file: PathBuf,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeouts: Timeouts::default(),
            session_file: PathBuf::from(DEFAULT_SESSION_FILE),
        }
    }
}

impl ClientConfig {
    /// Build typed client config from environment variables.
    ///
    /// Optional:
    /// - `COURSEHUB_BASE_URL`: default `http://127.0.0.1:8080/api`
    /// - `COURSEHUB_REQUEST_TIMEOUT_SECS`: default 30
    /// - `COURSEHUB_CONNECT_TIMEOUT_SECS`: default 10
    /// - `COURSEHUB_SESSION_FILE`: default `.coursehub-session.json`
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Config` if the base URL is set but blank.
    pub fn from_env() -> Result<Self, ClientError> {
        let base_url = match std::env::var("COURSEHUB_BASE_URL") {
            Ok(raw) => normalize_base_url(&raw)?,
            Err(_) => DEFAULT_BASE_URL.to_owned(),
        };
        let timeouts = Timeouts {
            request_secs: env_parse_u64("COURSEHUB_REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS),
            connect_secs: env_parse_u64("COURSEHUB_CONNECT_TIMEOUT_SECS", DEFAULT_CONNECT_TIMEOUT_SECS),
        };
        let session_file = std::env::var("COURSEHUB_SESSION_FILE")
            .map_or_else(|_| PathBuf::from(DEFAULT_SESSION_FILE), PathBuf::from);

        Ok(Self { base_url, timeouts, session_file })
    }

    /// Replace the base URL, applying the same normalization as `from_env`.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Config` if `raw` is blank.
    pub fn with_base_url(mut self, raw: &str) -> Result<Self, ClientError> {
        self.base_url = normalize_base_url(raw)?;
        Ok(self)
    }
}

fn normalize_base_url(raw: &str) -> Result<String, ClientError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(ClientError::Config("COURSEHUB_BASE_URL is empty".into()));
    }
    Ok(trimmed.to_owned())
}

fn env_parse_u64(key: &str, default: u64) -> u64 {
    match std::env::var(key) {
        Ok(v) => v.trim().parse::<u64>().unwrap_or(default),
        Err(_) => default,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
