//! Blocking HTTP client for the conversion backend.

use reqwest::StatusCode;
use reqwest::blocking::{Client, Response};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde_json::Value;
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::{ClientError, Result};
use crate::source::UnitSource;

/// Path of the unit collection.
const UNITS_PATH: &str = "/units";

/// Client for the `/units` endpoints.
#[derive(Debug, Clone)]
pub struct HttpUnitClient {
    /// HTTP client.
    client: Client,
    /// Backend root, without a trailing slash.
    base_url: String,
}

impl HttpUnitClient {
    /// Create a client from an explicit configuration.
    ///
    /// Fails if the base URL is not absolute http(s) or a header is invalid.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        config.validate()?;

        let mut headers = HeaderMap::new();
        for (name, value) in &config.headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| ClientError::InvalidHeader(format!("{name}: {e}")))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| ClientError::InvalidHeader(format!("{name}: {e}")))?;
            headers.insert(name, value);
        }

        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .map_err(|e| ClientError::Network(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Backend root this client talks to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Path of one unit, with the name encoded as a single segment.
    #[must_use]
    pub fn unit_path(unit_name: &str) -> String {
        format!("{UNITS_PATH}/{}", urlencoding::encode(unit_name))
    }

    fn get_json(&self, path: &str) -> Result<Value> {
        let url = format!("{}{path}", self.base_url);
        debug!("GET {}", url);

        let response = self.client.get(&url).send()?;
        Self::handle_response(path, response)
    }

    /// Map non-success statuses to errors and parse the body.
    fn handle_response(path: &str, response: Response) -> Result<Value> {
        let status = response.status();
        debug!(%status, path, "backend responded");

        if status == StatusCode::NOT_FOUND {
            return Err(ClientError::NotFound {
                path: path.to_string(),
            });
        }

        if !status.is_success() {
            let message = response.text().unwrap_or_default();
            return Err(ClientError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text()?;
        Ok(serde_json::from_str(&body)?)
    }
}

impl UnitSource for HttpUnitClient {
    fn units(&self) -> Result<Value> {
        self.get_json(UNITS_PATH)
    }

    fn unit(&self, unit_name: &str) -> Result<Value> {
        if unit_name.is_empty() {
            return Err(ClientError::EmptyUnitName);
        }
        // URL parsing collapses dot segments, even percent-encoded ones
        if is_dot_segment(unit_name) {
            return Err(ClientError::InvalidUnitName(unit_name.to_string()));
        }
        self.get_json(&Self::unit_path(unit_name))
    }
}

/// `.` or `..`, which would resolve to a different path than `/units/{name}`.
fn is_dot_segment(segment: &str) -> bool {
    matches!(segment, "." | "..")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = HttpUnitClient::new(&ClientConfig::default());
        assert!(client.is_ok());
        assert_eq!(client.unwrap().base_url(), "http://localhost:3000");
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let config = ClientConfig::default().with_base_url("mailto:units@example.com");
        assert!(matches!(
            HttpUnitClient::new(&config),
            Err(ClientError::InvalidBaseUrl(_))
        ));
    }

    #[test]
    fn test_invalid_header_rejected() {
        let config = ClientConfig::default().with_header("Bad Header", "x");
        assert!(matches!(
            HttpUnitClient::new(&config),
            Err(ClientError::InvalidHeader(_))
        ));
    }

    #[test]
    fn test_unit_path_encoding() {
        assert_eq!(HttpUnitClient::unit_path("length"), "/units/length");
        assert_eq!(
            HttpUnitClient::unit_path("cubic metre"),
            "/units/cubic%20metre"
        );
        assert_eq!(HttpUnitClient::unit_path("a/b"), "/units/a%2Fb");
    }

    #[test]
    fn test_dot_segments() {
        assert!(is_dot_segment("."));
        assert!(is_dot_segment(".."));
        assert!(!is_dot_segment("..."));
        assert!(!is_dot_segment(".5"));
        assert!(!is_dot_segment("metre"));
    }

    #[test]
    fn test_empty_unit_name_rejected_without_request() {
        // Port 9 (discard) is never contacted: the name check comes first.
        let config = ClientConfig::default().with_base_url("http://127.0.0.1:9");
        let client = HttpUnitClient::new(&config).unwrap();
        assert!(matches!(client.unit(""), Err(ClientError::EmptyUnitName)));
    }
}
