//! Breach checker
//!
//! k-anonymity lookup against a Pwned-Passwords style range API: only the
//! first five hex characters of the SHA-1 digest leave the process, and the
//! matching suffix is searched for locally.
//!
//! Breach checking is best-effort. Any failure is logged and reported as
//! zero breaches so it never fails the surrounding request.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use secrecy::{ExposeSecret, SecretString};
use sha1::{Digest, Sha1};
use thiserror::Error;

pub const DEFAULT_RANGE_URL: &str = "https://api.pwnedpasswords.com/range/";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

const PREFIX_LEN: usize = 5;

#[derive(Error, Debug)]
pub enum BreachError {
    #[error("Range request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Range service responded with status code {0}")]
    Status(StatusCode),
    #[error("Failed to parse range response: {0}")]
    Parse(String),
}

/// Anything able to tell how often a password shows up in breach corpora.
#[async_trait]
pub trait BreachSource: Send + Sync {
    /// Number of times `password` appears in known breaches; `0` when unknown.
    async fn breach_count(&self, password: &SecretString) -> u64;
}

/// Uppercase SHA-1 hex digest split into its 5-char prefix and 35-char suffix.
pub fn hash_prefix_suffix(password: &str) -> (String, String) {
    let hash = data_encoding::HEXUPPER.encode(Sha1::digest(password.as_bytes()).as_slice());
    let suffix = hash[PREFIX_LEN..].to_string();
    let mut prefix = hash;
    prefix.truncate(PREFIX_LEN);
    (prefix, suffix)
}

/// Scans `SUFFIX:COUNT` lines for `suffix` and returns its count, or `0`.
///
/// Suffixes compare case-insensitively. A malformed line fails the whole parse.
pub fn parse_range_response(body: &str, suffix: &str) -> Result<u64, BreachError> {
    for line in body.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let (line_suffix, count) = line
            .split_once(':')
            .ok_or_else(|| BreachError::Parse(format!("missing ':' in line {line:?}")))?;
        if line_suffix.eq_ignore_ascii_case(suffix) {
            return count
                .trim()
                .parse::<u64>()
                .map_err(|e| BreachError::Parse(format!("bad count {count:?}: {e}")));
        }
    }
    Ok(0)
}

/// Production [`BreachSource`] backed by an HTTP range API.
#[derive(Debug, Clone)]
pub struct HibpClient {
    client: reqwest::Client,
    base_url: String,
}

impl HibpClient {
    /// `base_url` is joined with the hash prefix as-is, so it should end with `/`.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, BreachError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Single attempt, no retries.
    pub async fn lookup(&self, password: &SecretString) -> Result<u64, BreachError> {
        let (prefix, suffix) = hash_prefix_suffix(password.expose_secret());
        let url = format!("{}{}", self.base_url, prefix);

        let resp = self
            .client
            .get(&url)
            .header("Add-Padding", "true")
            .send()
            .await?;

        match resp.status() {
            StatusCode::OK => {
                let body = resp.text().await?;
                parse_range_response(&body, &suffix)
            }
            status => Err(BreachError::Status(status)),
        }
    }
}

#[async_trait]
impl BreachSource for HibpClient {
    async fn breach_count(&self, password: &SecretString) -> u64 {
        match self.lookup(password).await {
            Ok(count) => count,
            Err(_e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!("Breach check failed, assuming no breaches: {}", _e);
                0
            }
        }
    }
}
