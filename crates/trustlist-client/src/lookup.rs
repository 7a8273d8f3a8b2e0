//! Lookup trait abstractions for contract verification
//!
//! This module defines the traits the resolver consumes, allowing for
//! different implementations (live HTTP clients, in-memory stubs for
//! tests).

use async_trait::async_trait;

use crate::dto::{FioResponse, NftsByContractResponse, NftsByHandleResponse, SafelistResponse};
use crate::error::ClientResult;

/// NFT record lookups against the FIO chain API
///
/// Implementations must be thread-safe (Send + Sync) for use in async
/// contexts, and must bound each call by their configured deadline.
#[async_trait]
pub trait NftSignatureLookup: Send + Sync {
    /// Fetch every record published by one handle
    ///
    /// # Arguments
    /// * `fio_address` - The handle to query, e.g. `"whitelist@aurox"`
    ///
    /// # Returns
    /// * `Ok(FioResponse::Success)` - The handle's records
    /// * `Ok(FioResponse::BadRequest)` - The endpoint rejected the payload
    /// * `Ok(FioResponse::NotFound)` - The handle has no records
    /// * `Err(ClientError)` - Transport failure, timeout, or undocumented status
    async fn nfts_for_handle(
        &self,
        fio_address: &str,
    ) -> ClientResult<FioResponse<NftsByHandleResponse>>;

    /// Fetch every record covering one contract, tagged with the publishing
    /// handles
    ///
    /// # Arguments
    /// * `chain_code` - Chain the contract is deployed on, e.g. `"ETH"`
    /// * `contract_address` - The contract to query
    ///
    /// # Returns
    /// * `Ok(FioResponse::Success)` - The contract's records
    /// * `Ok(FioResponse::BadRequest)` - The endpoint rejected the payload
    /// * `Ok(FioResponse::NotFound)` - Nothing is mapped for the contract
    /// * `Err(ClientError)` - Transport failure, timeout, or undocumented status
    async fn nfts_for_contract(
        &self,
        chain_code: &str,
        contract_address: &str,
    ) -> ClientResult<FioResponse<NftsByContractResponse>>;
}

/// Classification lookups against the safelist API
#[async_trait]
pub trait SafelistLookup: Send + Sync {
    /// Fetch the safelist entry for one contract
    ///
    /// # Arguments
    /// * `contract_address` - The contract to query
    ///
    /// # Returns
    /// * `Ok(SafelistResponse)` - The entry; its `status` is absent for unlisted contracts
    /// * `Err(ClientError)` - Transport failure, timeout, or undocumented status
    async fn contract_status(&self, contract_address: &str) -> ClientResult<SafelistResponse>;
}
