//! Service configuration loaded from the environment.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::breach::{DEFAULT_RANGE_URL, DEFAULT_TIMEOUT};
use crate::wordlist::DEFAULT_WORDLIST_PATH;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub wordlist_path: PathBuf,
    pub breach_api_url: String,
    pub breach_timeout: Duration,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 5000,
            wordlist_path: PathBuf::from(DEFAULT_WORDLIST_PATH),
            breach_api_url: DEFAULT_RANGE_URL.to_owned(),
            breach_timeout: DEFAULT_TIMEOUT,
            log_level: "info".to_owned(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    /// Loads `.env` file if present; every variable is optional.
    ///
    /// | Variable | Default |
    /// |---|---|
    /// | `PWD_ARENA_HOST` | `127.0.0.1` |
    /// | `PWD_ARENA_PORT` | `5000` |
    /// | `PWD_WORDLIST_PATH` | `./common_words.json` |
    /// | `PWD_BREACH_API_URL` | `https://api.pwnedpasswords.com/range/` |
    /// | `PWD_BREACH_TIMEOUT_SECS` | `5` |
    /// | `LOG_LEVEL` | `info` |
    pub fn from_env() -> Result<Self, ConfigError> {
        // Best-effort .env load; ignore if missing
        let _ = dotenvy::dotenv();

        let defaults = Self::default();
        Ok(Self {
            host: get_var_or("PWD_ARENA_HOST", &defaults.host),
            port: parse_var("PWD_ARENA_PORT", defaults.port)?,
            wordlist_path: env::var("PWD_WORDLIST_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.wordlist_path),
            breach_api_url: get_var_or("PWD_BREACH_API_URL", &defaults.breach_api_url),
            breach_timeout: parse_timeout("PWD_BREACH_TIMEOUT_SECS", defaults.breach_timeout)?,
            log_level: get_var_or("LOG_LEVEL", &defaults.log_level),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn get_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

fn parse_var<T>(key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            key,
            reason: format!("{raw:?}: {e}"),
        }),
        Err(_) => Ok(default),
    }
}

/// Whole seconds, at least 1.
fn parse_timeout(key: &'static str, default: Duration) -> Result<Duration, ConfigError> {
    match parse_var(key, default.as_secs())? {
        0 => Err(ConfigError::Invalid {
            key,
            reason: "timeout must be at least 1 second".to_owned(),
        }),
        secs => Ok(Duration::from_secs(secs)),
    }
}
