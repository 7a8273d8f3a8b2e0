//! Contract verification
//!
//! This module orchestrates a verification round: one records lookup per
//! classification handle plus one contract lookup, all issued concurrently,
//! then reconciled in handle precedence order with a safelist fallback for
//! contracts no handle owns.

use futures::future;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

use trustlist_client::{FioResponse, NftSignatureLookup, SafelistLookup};
use trustlist_core::{ContractStatus, DEFAULT_CHAIN_CODE, REGISTRY_HANDLES};

/// How many leading handles reconciliation walks.
///
/// The final handle is left out on purpose: its records reach the verifier
/// through the contract lookup instead of through its own records lookup.
const RECONCILED_HANDLES: usize = REGISTRY_HANDLES.len() - 1;

/// Resolves the trust classification of smart contracts.
///
/// Verification is total. Every lookup failure, timeout, or rejection
/// reads as "no answer from that source", so the caller always gets a
/// classification or `None`, never an error.
pub struct ContractVerifier {
    fio: Arc<dyn NftSignatureLookup>,
    safelist: Arc<dyn SafelistLookup>,
}

impl ContractVerifier {
    /// Create a verifier over the given lookups
    pub fn new(fio: Arc<dyn NftSignatureLookup>, safelist: Arc<dyn SafelistLookup>) -> Self {
        Self { fio, safelist }
    }

    /// Classify a contract deployed on the default chain
    ///
    /// # Arguments
    /// * `contract_address` - The contract to classify
    ///
    /// # Returns
    /// * `Some(status)` - The contract's classification
    /// * `None` - The contract is unknown to every source
    pub async fn verify(&self, contract_address: &str) -> Option<ContractStatus> {
        self.verify_on_chain(contract_address, DEFAULT_CHAIN_CODE)
            .await
    }

    /// Classify a contract deployed on a specific chain
    ///
    /// Fans out every lookup at once and waits for all of them to settle
    /// before reconciling, so the round takes as long as the slowest
    /// upstream answer (bounded by the per-request deadlines of the
    /// lookups themselves).
    #[instrument(skip(self))]
    pub async fn verify_on_chain(
        &self,
        contract_address: &str,
        chain_code: &str,
    ) -> Option<ContractStatus> {
        debug!("Verifying contract");

        let handle_lookups = future::join_all(
            REGISTRY_HANDLES
                .iter()
                .map(|handle| self.fio.nfts_for_handle(handle.fio_address())),
        );
        let contract_lookup = self.fio.nfts_for_contract(chain_code, contract_address);

        let (handle_results, contract_result) = tokio::join!(handle_lookups, contract_lookup);

        let mut owner: Option<String> = None;

        for (handle, result) in REGISTRY_HANDLES
            .iter()
            .zip(handle_results.iter())
            .take(RECONCILED_HANDLES)
        {
            match result {
                Ok(FioResponse::Success(body)) => {
                    if body
                        .nfts
                        .iter()
                        .any(|record| record.signs_contract(contract_address))
                    {
                        debug!(handle = %handle, "contract found in handle records");
                        owner = Some(handle.fio_address().to_string());
                        break;
                    }
                }
                Ok(_) => {}
                Err(error) => {
                    debug!(handle = %handle, %error, "handle lookup failed");
                }
            }
        }

        // A contract no reconciled handle owns may still carry records; the
        // contract lookup reports them along with their publishing handle.
        if owner.is_none() {
            match &contract_result {
                Ok(FioResponse::Success(body)) => {
                    if let Some(record) = body
                        .nfts
                        .iter()
                        .find(|record| record.signature.signs_contract(contract_address))
                    {
                        debug!(handle = %record.fio_address, "contract found via contract lookup");
                        owner = Some(record.fio_address.clone());
                    }
                }
                Ok(_) => {}
                Err(error) => {
                    debug!(%error, "contract lookup failed");
                }
            }
        }

        match owner {
            Some(fio_address) => ContractStatus::from_list_handle(&fio_address),
            None => self.safelist_classification(contract_address).await,
        }
    }

    /// Consult the safelist authority; lookup failures read as unlisted
    async fn safelist_classification(&self, contract_address: &str) -> Option<ContractStatus> {
        debug!("falling back to safelist");

        match self.safelist.contract_status(contract_address).await {
            Ok(entry) => entry.classification(),
            Err(error) => {
                warn!(%error, "safelist lookup failed");
                None
            }
        }
    }
}
