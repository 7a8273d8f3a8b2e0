//! Error types for the trustlist domain

use thiserror::Error;

/// Result type alias for trustlist domain operations
pub type Result<T> = std::result::Result<T, TrustlistError>;

/// Main error type for trustlist domain operations
#[derive(Error, Debug)]
pub enum TrustlistError {
    /// Label does not name one of the four classification buckets
    #[error("Invalid contract status: {0}")]
    InvalidStatus(String),
}
