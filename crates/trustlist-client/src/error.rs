//! Error types for the lookup clients
//!
//! This module provides error types for the HTTP lookups, covering
//! transport failures, deadline overruns, and responses that fall outside
//! the documented API contracts.

use thiserror::Error;

/// Result type alias for lookup operations
pub type ClientResult<T> = Result<T, ClientError>;

/// Lookup-client errors
#[derive(Debug, Error)]
pub enum ClientError {
    /// Request did not complete within the configured deadline
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// Connection could not be established or broke mid-request
    #[error("Connection error: {0}")]
    Connection(String),

    /// Server answered with a status the API contract does not define
    #[error("Unexpected response status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    /// Response body did not match the documented shape
    #[error("Malformed response body: {0}")]
    MalformedBody(String),

    /// Invalid client configuration
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Generic transport error
    #[error("{0}")]
    Other(String),
}

impl ClientError {
    /// Check if this error is a deadline overrun
    pub fn is_timeout(&self) -> bool {
        matches!(self, ClientError::Timeout(_))
    }

    /// Check if this is a transient error that could succeed on a later call
    pub fn is_transient(&self) -> bool {
        matches!(self, ClientError::Timeout(_) | ClientError::Connection(_))
    }
}

/// Convert reqwest transport errors to our error type
impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ClientError::Timeout(err.to_string())
        } else if err.is_connect() {
            ClientError::Connection(err.to_string())
        } else if err.is_decode() {
            ClientError::MalformedBody(err.to_string())
        } else if err.is_builder() {
            ClientError::Configuration(err.to_string())
        } else {
            ClientError::Other(err.to_string())
        }
    }
}

/// Convert URL parse errors
impl From<url::ParseError> for ClientError {
    fn from(err: url::ParseError) -> Self {
        ClientError::Configuration(format!("Invalid URL: {}", err))
    }
}
