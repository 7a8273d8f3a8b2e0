//! FIP-27 NFT signature records
//!
//! Classification-list handles publish one NFT record per contract they
//! cover. The record shapes here mirror the FIO chain API responses
//! field-for-field.

use serde::{Deserialize, Serialize};

/// Chain code assumed when a caller does not name one
pub const DEFAULT_CHAIN_CODE: &str = "ETH";

/// A single NFT record signed by a FIO handle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NftSignature {
    /// Chain the contract is deployed on, e.g. `"ETH"`
    pub chain_code: String,
    /// Contract address the record covers
    pub contract_address: String,
    /// Token ID within the contract, empty for whole-contract records
    pub token_id: String,
    /// URL of the signed asset
    pub url: String,
    /// Hash of the signed asset
    pub hash: String,
    /// Free-form JSON metadata attached by the signer
    pub metadata: String,
}

impl NftSignature {
    /// Whether this record covers `contract_address`.
    ///
    /// Addresses are hex strings whose letter case varies between signers
    /// and callers, so the comparison ignores ASCII case.
    pub fn signs_contract(&self, contract_address: &str) -> bool {
        self.contract_address.eq_ignore_ascii_case(contract_address)
    }
}

/// An [`NftSignature`] as returned by the contract lookup, which also
/// reports the FIO handle that published the record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappedNftSignature {
    /// Handle that published the record, e.g. `"redlist@aurox"`
    pub fio_address: String,
    /// The record itself
    #[serde(flatten)]
    pub signature: NftSignature,
}
