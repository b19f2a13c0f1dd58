//! Configuration for the backend client.

use std::collections::BTreeMap;
use std::time::Duration;

use reqwest::Url;

use crate::error::{ClientError, Result};

/// Backend address used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// HTTP request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Environment variable overriding the base URL.
pub const API_URL_ENV: &str = "UNITCONV_API_URL";

/// Environment variable overriding the timeout, in whole seconds.
pub const TIMEOUT_ENV: &str = "UNITCONV_TIMEOUT_SECS";

/// User agent string for API requests.
const USER_AGENT_VALUE: &str = concat!("unitconv/", env!("CARGO_PKG_VERSION"));

/// Settings for [`HttpUnitClient`](crate::HttpUnitClient).
///
/// Built explicitly and handed to the client, so tests and front ends can
/// point at any backend without global state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Backend root, without a trailing slash.
    pub base_url: String,
    /// Headers sent with every request.
    pub headers: BTreeMap<String, String>,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        let mut headers = BTreeMap::new();
        headers.insert("Accept".to_string(), "application/json".to_string());
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        headers.insert("User-Agent".to_string(), USER_AGENT_VALUE.to_string());
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            headers,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ClientConfig {
    /// Set the backend root. A trailing slash is dropped.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Add or replace a header.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Default configuration with `UNITCONV_API_URL` and
    /// `UNITCONV_TIMEOUT_SECS` applied.
    pub fn from_env() -> Result<Self> {
        Self::default().apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup.
    ///
    /// Unset or blank keys leave the current value in place.
    pub fn apply_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let present = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(url) = present(API_URL_ENV) {
            self = self.with_base_url(url.trim());
        }
        if let Some(raw) = present(TIMEOUT_ENV) {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                let message = format!("{TIMEOUT_ENV} must be whole seconds, got {raw:?}");
                ClientError::InvalidConfig(message)
            })?;
            self.timeout = Duration::from_secs(secs);
        }
        Ok(self)
    }

    /// Check that the base URL is an absolute http(s) URL.
    pub fn validate(&self) -> Result<Url> {
        let url = Url::parse(&self.base_url)
            .map_err(|e| ClientError::InvalidBaseUrl(format!("{}: {e}", self.base_url)))?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(ClientError::InvalidBaseUrl(format!(
                "{}: unsupported scheme {other:?}",
                self.base_url
            ))),
        }
    }
}
