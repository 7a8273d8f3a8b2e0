//! Resolver layer for the Aurox trustlist
//!
//! This crate decides the trust classification of smart contracts. It fans
//! out concurrent lookups against the FIO classification handles and the
//! contract record index, reconciles the answers in handle precedence
//! order, and falls back to the safelist authority for contracts no handle
//! owns.
//!
//! Verification is total: a contract is classified or it is unknown, and
//! every lookup failure reads as "no answer from that source" rather than
//! as an error of its own.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use trustlist_client::{FioClient, LookupConfig, SafelistClient};
//! use trustlist_resolver::ContractVerifier;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = LookupConfig::load_or_default("config", "development");
//! let verifier = ContractVerifier::new(
//!     Arc::new(FioClient::new(&config.fio)?),
//!     Arc::new(SafelistClient::new(&config.safelist)?),
//! );
//!
//! let status = verifier.verify("0xdAC17F958D2ee523a2206206994597C13D831ec7").await;
//! println!("classification: {:?}", status);
//! # Ok(())
//! # }
//! ```

pub mod verifier;

// Re-export main types for convenience
pub use verifier::ContractVerifier;
