//! Core domain models and types for the Aurox trustlist
//!
//! This crate contains the classification statuses, the fixed set of FIO
//! classification-list handles, and the FIP-27 NFT signature records that
//! the lookup clients and the resolver share.

pub mod classification;
pub mod error;
pub mod handle;
pub mod signature;

// Re-exports for convenience
pub use classification::ContractStatus;
pub use error::{Result, TrustlistError};
pub use handle::{RegistryHandle, LIST_HANDLE_MARKER, REGISTRY_HANDLES};
pub use signature::{MappedNftSignature, NftSignature, DEFAULT_CHAIN_CODE};
