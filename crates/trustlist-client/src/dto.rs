//! Wire types for the FIO chain API and the safelist API
//!
//! Request payloads and response bodies mirror the upstream JSON
//! field-for-field. The FIO chain API answers every defined outcome with a
//! JSON body: `200` carries the records, `400` a field-level rejection, and
//! `404` a plain message when nothing is mapped.

use serde::{Deserialize, Serialize};
use trustlist_core::{ContractStatus, MappedNftSignature, NftSignature};

/// Pagination options shared by the FIO lookup payloads
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageOptions {
    /// Maximum number of records to return
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    /// Number of records to skip
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

/// Payload for `get_nfts_fio_address`: all records published by one handle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NftsByHandleRequest {
    /// Handle whose records are requested
    pub fio_address: String,

    #[serde(flatten)]
    pub page: PageOptions,
}

impl NftsByHandleRequest {
    /// Request every record for `fio_address`, unpaginated
    pub fn new(fio_address: impl Into<String>) -> Self {
        Self {
            fio_address: fio_address.into(),
            page: PageOptions::default(),
        }
    }
}

/// Payload for `get_nfts_contract`: all records covering one contract
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NftsByContractRequest {
    /// Chain the contract is deployed on
    pub chain_code: String,

    /// Contract address to look up
    pub contract_address: String,

    /// Restrict to a single token ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_id: Option<String>,

    #[serde(flatten)]
    pub page: PageOptions,
}

impl NftsByContractRequest {
    /// Request every record covering `contract_address` on `chain_code`
    pub fn new(chain_code: impl Into<String>, contract_address: impl Into<String>) -> Self {
        Self {
            chain_code: chain_code.into(),
            contract_address: contract_address.into(),
            token_id: None,
            page: PageOptions::default(),
        }
    }
}

/// `200` body of `get_nfts_fio_address`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NftsByHandleResponse {
    /// Records published by the handle
    pub nfts: Vec<NftSignature>,

    /// `1` when more records exist past this page, `0` otherwise
    pub more: u32,
}

impl NftsByHandleResponse {
    /// Whether another page of records is available
    pub fn has_more(&self) -> bool {
        self.more != 0
    }
}

/// `200` body of `get_nfts_contract`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NftsByContractResponse {
    /// Records covering the contract, each tagged with its publishing handle
    pub nfts: Vec<MappedNftSignature>,

    /// `1` when more records exist past this page, `0` otherwise
    pub more: u32,
}

impl NftsByContractResponse {
    /// Whether another page of records is available
    pub fn has_more(&self) -> bool {
        self.more != 0
    }
}

/// `400` body: the chain endpoint rejected the request payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FioRequestError {
    /// Error category reported by the endpoint
    #[serde(rename = "type")]
    pub error_type: String,

    /// Human-readable summary
    pub message: String,

    /// Per-field diagnostics
    #[serde(default)]
    pub fields: Vec<FioFieldError>,
}

/// One entry of [`FioRequestError::fields`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FioFieldError {
    /// Name of the offending payload field
    pub name: String,

    /// Value that was rejected
    pub value: String,

    /// What was wrong with it
    pub error: String,
}

/// `404` body: the handle or contract has nothing mapped
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FioNotFound {
    pub message: String,
}

/// Outcome of a FIO chain API call, keyed by the HTTP status it came with.
///
/// All three are well-formed answers from the endpoint; transport failures
/// and undocumented statuses surface as [`crate::ClientError`] instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FioResponse<T> {
    /// `200` with a decoded body
    Success(T),
    /// `400` with field-level diagnostics
    BadRequest(FioRequestError),
    /// `404`, nothing mapped for the query
    NotFound(FioNotFound),
}

impl<T> FioResponse<T> {
    /// Whether this is a `200` outcome
    pub fn is_success(&self) -> bool {
        matches!(self, FioResponse::Success(_))
    }

    /// The decoded `200` body, if this is one
    pub fn success(&self) -> Option<&T> {
        match self {
            FioResponse::Success(body) => Some(body),
            _ => None,
        }
    }

    /// Consume the outcome, keeping only a `200` body
    pub fn into_success(self) -> Option<T> {
        match self {
            FioResponse::Success(body) => Some(body),
            _ => None,
        }
    }
}

/// Body of a safelist lookup
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafelistResponse {
    /// Classification label, absent or empty when the contract is unlisted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl SafelistResponse {
    /// Parse the label into a classification.
    ///
    /// Absent, empty, and unrecognized labels all map to `None`; the label
    /// is matched case-insensitively.
    pub fn classification(&self) -> Option<ContractStatus> {
        self.status.as_deref().and_then(|label| label.parse().ok())
    }
}
