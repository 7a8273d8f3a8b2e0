//! Lookup clients for the Aurox trustlist
//!
//! This crate provides the HTTP integrations the resolver is built on:
//! - FIO chain API client for NFT signature records (FIP-27)
//! - Safelist API client for the fallback classification authority
//! - Lookup trait abstractions so the resolver never depends on transport
//! - Hierarchical configuration with file and environment sources
//! - Per-request deadlines enforced at the HTTP client
//!
//! # Example
//!
//! ```rust,no_run
//! use trustlist_client::{FioClient, LookupConfig, SafelistClient};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = LookupConfig::load_or_default("config", "development");
//! let fio = FioClient::new(&config.fio)?;
//! let safelist = SafelistClient::new(&config.safelist)?;
//! # Ok(())
//! # }
//! ```

// Re-export core domain types for convenience
pub use trustlist_core;

// Public modules
pub mod client;
pub mod config;
pub mod dto;
pub mod error;
pub mod lookup;

// Re-exports for convenience
pub use client::{FioClient, SafelistClient};
pub use config::{get_environment, FioApiConfig, LookupConfig, SafelistConfig};
pub use dto::{
    FioFieldError, FioNotFound, FioRequestError, FioResponse, NftsByContractRequest,
    NftsByContractResponse, NftsByHandleRequest, NftsByHandleResponse, PageOptions,
    SafelistResponse,
};
pub use error::{ClientError, ClientResult};
pub use lookup::{NftSignatureLookup, SafelistLookup};

/// Lookup layer version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prefix of the environment variables that override file configuration
pub const ENV_PREFIX: &str = "TRUSTLIST";
