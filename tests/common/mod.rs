//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests: a registry
//! of mock upstream servers, mock mounting helpers, and tracing setup.

use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

use trustlist_client::{FioApiConfig, FioClient, SafelistClient, SafelistConfig};
use trustlist_resolver::ContractVerifier;


use fixtures::{contract_listing_body, handle_listing_body};

/// Path of the records-by-handle endpoint on the mock chain node
pub const NFTS_BY_HANDLE_PATH: &str = "/v1/chain/get_nfts_fio_address";

/// Path of the records-by-contract endpoint on the mock chain node
pub const NFTS_BY_CONTRACT_PATH: &str = "/v1/chain/get_nfts_contract";

/// Base path of the mock safelist service
pub const SAFELIST_PATH: &str = "/api/v1/contracts";

/// Mock upstreams plus the client configuration pointing at them.
///
/// Mocks are matched in mount order, so tests mount their specific
/// answers first and close with [`TestRegistry::mount_remaining_not_found`].
pub struct TestRegistry {
    pub fio_server: MockServer,
    pub safelist_server: MockServer,
    timeout_seconds: u64,
}

impl TestRegistry {
    /// Start mock upstreams with the production 5s lookup deadline
    pub async fn start() -> Self {
        Self::start_with_timeout(5).await
    }

    /// Start mock upstreams with a custom lookup deadline
    pub async fn start_with_timeout(timeout_seconds: u64) -> Self {
        init_tracing();

        Self {
            fio_server: MockServer::start().await,
            safelist_server: MockServer::start().await,
            timeout_seconds,
        }
    }

    /// Build a verifier wired to the mock upstreams
    pub fn verifier(&self) -> ContractVerifier {
        let fio = FioClient::new(&FioApiConfig {
            base_url: self.fio_server.uri(),
            timeout_seconds: self.timeout_seconds,
        })
        .expect("Failed to build FIO client");

        let safelist = SafelistClient::new(&SafelistConfig {
            base_url: format!("{}{}", self.safelist_server.uri(), SAFELIST_PATH),
            timeout_seconds: self.timeout_seconds,
        })
        .expect("Failed to build safelist client");

        ContractVerifier::new(Arc::new(fio), Arc::new(safelist))
    }

    /// Answer one handle's records lookup with a listing of contracts
    pub async fn mount_handle_listing(&self, handle: &str, contracts: &[&str]) {
        Mock::given(method("POST"))
            .and(path(NFTS_BY_HANDLE_PATH))
            .and(body_partial_json(json!({ "fio_address": handle })))
            .respond_with(ResponseTemplate::new(200).set_body_json(handle_listing_body(contracts)))
            .mount(&self.fio_server)
            .await;
    }

    /// Same as [`mount_handle_listing`], answering after a delay
    ///
    /// [`mount_handle_listing`]: TestRegistry::mount_handle_listing
    pub async fn mount_delayed_handle_listing(
        &self,
        handle: &str,
        contracts: &[&str],
        delay: Duration,
    ) {
        Mock::given(method("POST"))
            .and(path(NFTS_BY_HANDLE_PATH))
            .and(body_partial_json(json!({ "fio_address": handle })))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(handle_listing_body(contracts))
                    .set_delay(delay),
            )
            .mount(&self.fio_server)
            .await;
    }

    /// Answer one handle's records lookup with an HTTP error status
    pub async fn mount_handle_error(&self, handle: &str, status: u16) {
        Mock::given(method("POST"))
            .and(path(NFTS_BY_HANDLE_PATH))
            .and(body_partial_json(json!({ "fio_address": handle })))
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.fio_server)
            .await;
    }

    /// Answer one handle's records lookup with a `400` payload rejection
    pub async fn mount_handle_rejection(&self, handle: &str) {
        Mock::given(method("POST"))
            .and(path(NFTS_BY_HANDLE_PATH))
            .and(body_partial_json(json!({ "fio_address": handle })))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "type": "invalid_input",
                "message": "An invalid request was sent in, please check the nested errors for details.",
                "fields": [{
                    "name": "fio_address",
                    "value": handle,
                    "error": "Invalid FIO Address"
                }]
            })))
            .mount(&self.fio_server)
            .await;
    }

    /// Answer the contract lookup with records tagged by their handles
    ///
    /// `records` pairs a publishing handle with a contract address.
    pub async fn mount_contract_listing(&self, records: &[(&str, &str)]) {
        Mock::given(method("POST"))
            .and(path(NFTS_BY_CONTRACT_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(contract_listing_body(records)))
            .mount(&self.fio_server)
            .await;
    }

    /// Same as [`mount_contract_listing`], answering after a delay
    ///
    /// [`mount_contract_listing`]: TestRegistry::mount_contract_listing
    pub async fn mount_delayed_contract_listing(
        &self,
        records: &[(&str, &str)],
        delay: Duration,
    ) {
        Mock::given(method("POST"))
            .and(path(NFTS_BY_CONTRACT_PATH))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(contract_listing_body(records))
                    .set_delay(delay),
            )
            .mount(&self.fio_server)
            .await;
    }

    /// Answer every chain lookup not matched so far with `404`.
    ///
    /// Mount this after the test's specific mocks.
    pub async fn mount_remaining_not_found(&self) {
        for endpoint in [NFTS_BY_HANDLE_PATH, NFTS_BY_CONTRACT_PATH] {
            Mock::given(method("POST"))
                .and(path(endpoint))
                .respond_with(
                    ResponseTemplate::new(404)
                        .set_body_json(json!({ "message": "No NFTS are mapped" })),
                )
                .mount(&self.fio_server)
                .await;
        }
    }

    /// List one contract on the safelist, verifying it is fetched `hits` times
    pub async fn mount_safelist_entry(&self, contract_address: &str, status: &str, hits: u64) {
        Mock::given(method("GET"))
            .and(path(format!("{}/{}", SAFELIST_PATH, contract_address)))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": status })))
            .expect(hits)
            .mount(&self.safelist_server)
            .await;
    }

    /// Leave one contract off the safelist (entry without a label)
    pub async fn mount_safelist_unlisted(&self, contract_address: &str) {
        Mock::given(method("GET"))
            .and(path(format!("{}/{}", SAFELIST_PATH, contract_address)))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .mount(&self.safelist_server)
            .await;
    }

    /// Fail every safelist lookup with an HTTP error status
    pub async fn mount_safelist_error(&self, status: u16) {
        Mock::given(method("GET"))
            .and(path_regex(format!("^{}/.+$", SAFELIST_PATH)))
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.safelist_server)
            .await;
    }

    /// Verify on drop that the safelist was never consulted
    pub async fn expect_no_safelist_lookup(&self) {
        Mock::given(method("GET"))
            .and(path_regex(format!("^{}/.+$", SAFELIST_PATH)))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .expect(0)
            .mount(&self.safelist_server)
            .await;
    }
}

/// Initialize tracing once per test binary; `RUST_LOG` overrides the level
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_test_writer()
        .try_init();
}
