//! FIO classification-list handles
//!
//! Aurox maintains one FIO crypto handle per classification bucket. Each
//! handle signs NFT records for the contracts on its list, so the handle
//! that owns a contract's record determines the contract's classification.

use std::fmt;

use crate::classification::ContractStatus;

/// Marker infix that identifies a FIO handle as a classification list.
///
/// The text remaining after the marker is stripped from a handle names the
/// classification bucket, e.g. `"whitelist@aurox"` strips to `"white"`.
pub const LIST_HANDLE_MARKER: &str = "list@aurox";

/// The classification-list handles, in precedence order.
///
/// Order matters: when several handles claim the same contract, the
/// earliest entry here wins. Reconciliation only considers entries up to
/// (but not including) the last one, so `blacklist@aurox` records are
/// surfaced solely through the contract lookup.
pub const REGISTRY_HANDLES: [RegistryHandle; 4] = [
    RegistryHandle::new(ContractStatus::White, "whitelist@aurox"),
    RegistryHandle::new(ContractStatus::Yellow, "yellowlist@aurox"),
    RegistryHandle::new(ContractStatus::Red, "redlist@aurox"),
    RegistryHandle::new(ContractStatus::Black, "blacklist@aurox"),
];

/// A FIO crypto handle bound to one classification bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistryHandle {
    status: ContractStatus,
    fio_address: &'static str,
}

impl RegistryHandle {
    const fn new(status: ContractStatus, fio_address: &'static str) -> Self {
        Self { status, fio_address }
    }

    /// Classification bucket this handle curates
    pub fn status(&self) -> ContractStatus {
        self.status
    }

    /// The handle as it appears on chain, e.g. `"redlist@aurox"`
    pub fn fio_address(&self) -> &'static str {
        self.fio_address
    }
}

impl fmt::Display for RegistryHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.fio_address)
    }
}
