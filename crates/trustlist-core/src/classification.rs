//! Contract trust classifications
//!
//! The four classification buckets a smart contract can land in, plus the
//! logic for deriving a bucket from the FIO handle that signed a contract
//! record.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TrustlistError;
use crate::handle::LIST_HANDLE_MARKER;

/// Trust classification of a smart contract
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContractStatus {
    /// Vetted and considered trustworthy
    White,
    /// Flagged for caution
    Yellow,
    /// High risk
    Red,
    /// Known malicious
    Black,
}

impl ContractStatus {
    /// Returns the lowercase label used on the wire and in handle names
    pub fn as_str(&self) -> &'static str {
        match self {
            ContractStatus::White => "white",
            ContractStatus::Yellow => "yellow",
            ContractStatus::Red => "red",
            ContractStatus::Black => "black",
        }
    }

    /// Derives the classification encoded in a FIO handle.
    ///
    /// A handle carries a classification when the [`LIST_HANDLE_MARKER`]
    /// infix appears in it verbatim. The handle is then lowercased, every
    /// occurrence of the marker is stripped, and the remainder names the
    /// bucket. Handles without the verbatim marker (ordinary signing
    /// handles) carry no classification, as do handles whose remainder is
    /// not a known bucket.
    pub fn from_list_handle(handle: &str) -> Option<Self> {
        if !handle.contains(LIST_HANDLE_MARKER) {
            return None;
        }
        handle.to_lowercase().replace(LIST_HANDLE_MARKER, "").parse().ok()
    }

    /// Whether the classification marks the contract as safe to interact with
    pub fn is_trusted(&self) -> bool {
        matches!(self, ContractStatus::White)
    }
}

impl fmt::Display for ContractStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ContractStatus {
    type Err = TrustlistError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "white" => Ok(ContractStatus::White),
            "yellow" => Ok(ContractStatus::Yellow),
            "red" => Ok(ContractStatus::Red),
            "black" => Ok(ContractStatus::Black),
            _ => Err(TrustlistError::InvalidStatus(s.to_string())),
        }
    }
}
