//! Error types for the backend client.

use thiserror::Error;

/// Errors that can occur while talking to the conversion backend.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ClientError {
    /// The configured base URL is not an absolute http(s) URL.
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),

    /// A configured header name or value is not valid HTTP.
    #[error("invalid header: {0}")]
    InvalidHeader(String),

    /// An environment override could not be parsed.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A unit lookup was attempted with an empty name.
    #[error("unit name must not be empty")]
    EmptyUnitName,

    /// A unit name that cannot be sent as a single path segment.
    #[error("invalid unit name: {0:?}")]
    InvalidUnitName(String),

    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// The backend answered 404.
    #[error("not found: {path}")]
    NotFound {
        /// Request path that was not found.
        path: String,
    },

    /// The backend answered with any other non-success status.
    #[error("backend error ({status}): {message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, if any.
        message: String,
    },

    /// The response body was not valid JSON.
    #[error("JSON parse error: {0}")]
    JsonParse(String),
}

impl ClientError {
    /// Returns a short message suitable for showing to the user.
    #[must_use]
    pub fn user_message(&self) -> &str {
        match self {
            Self::Network(_) => "Could not reach the conversion service.",
            Self::NotFound { .. } => "That unit does not exist.",
            Self::Status { status, .. } if *status >= 500 => {
                "The conversion service is having trouble. Please try again."
            }
            Self::Status { .. } => "The conversion service rejected the request.",
            Self::EmptyUnitName => "Please choose a unit.",
            Self::InvalidUnitName(_) => "That is not a valid unit name.",
            Self::InvalidBaseUrl(_) | Self::InvalidHeader(_) | Self::InvalidConfig(_) => {
                "The client is misconfigured."
            }
            Self::JsonParse(_) => "The conversion service sent an unreadable response.",
        }
    }

    /// Returns whether retrying the same request could succeed.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Network(_) => true,
            Self::Status { status, .. } => *status >= 500,
            _ => false,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::JsonParse(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        Self::JsonParse(err.to_string())
    }
}

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;
