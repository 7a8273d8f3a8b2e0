//! HTTP implementations of the lookup traits
//!
//! [`FioClient`] speaks to a FIO chain API node, [`SafelistClient`] to the
//! safelist service. Both enforce their configured per-request deadline
//! through the underlying HTTP client, so a stalled upstream surfaces as
//! [`ClientError::Timeout`] instead of hanging the caller.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing::instrument;
use url::Url;

use crate::config::{FioApiConfig, SafelistConfig};
use crate::dto::{
    FioResponse, NftsByContractRequest, NftsByContractResponse, NftsByHandleRequest,
    NftsByHandleResponse, SafelistResponse,
};
use crate::error::{ClientError, ClientResult};
use crate::lookup::{NftSignatureLookup, SafelistLookup};

/// Path of the records-by-handle endpoint
const NFTS_BY_HANDLE_PATH: &str = "/v1/chain/get_nfts_fio_address";

/// Path of the records-by-contract endpoint
const NFTS_BY_CONTRACT_PATH: &str = "/v1/chain/get_nfts_contract";

/// Client for the FIO chain API
#[derive(Debug, Clone)]
pub struct FioClient {
    http: reqwest::Client,
    nfts_by_handle_url: Url,
    nfts_by_contract_url: Url,
}

impl FioClient {
    /// Create a client from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL does not parse or the HTTP client
    /// cannot be built
    pub fn new(config: &FioApiConfig) -> ClientResult<Self> {
        let base: Url = config.base_url.parse()?;
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self {
            nfts_by_handle_url: base.join(NFTS_BY_HANDLE_PATH)?,
            nfts_by_contract_url: base.join(NFTS_BY_CONTRACT_PATH)?,
            http,
        })
    }

    async fn post_lookup<B, T>(&self, url: Url, payload: &B) -> ClientResult<FioResponse<T>>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let response = self.http.post(url).json(payload).send().await?;
        decode_fio_response(response).await
    }
}

#[async_trait]
impl NftSignatureLookup for FioClient {
    #[instrument(skip(self))]
    async fn nfts_for_handle(
        &self,
        fio_address: &str,
    ) -> ClientResult<FioResponse<NftsByHandleResponse>> {
        let payload = NftsByHandleRequest::new(fio_address);
        self.post_lookup(self.nfts_by_handle_url.clone(), &payload)
            .await
    }

    #[instrument(skip(self))]
    async fn nfts_for_contract(
        &self,
        chain_code: &str,
        contract_address: &str,
    ) -> ClientResult<FioResponse<NftsByContractResponse>> {
        let payload = NftsByContractRequest::new(chain_code, contract_address);
        self.post_lookup(self.nfts_by_contract_url.clone(), &payload)
            .await
    }
}

/// Map a chain API response onto [`FioResponse`] by HTTP status
async fn decode_fio_response<T>(response: reqwest::Response) -> ClientResult<FioResponse<T>>
where
    T: DeserializeOwned,
{
    match response.status() {
        StatusCode::OK => Ok(FioResponse::Success(response.json().await?)),
        StatusCode::BAD_REQUEST => Ok(FioResponse::BadRequest(response.json().await?)),
        StatusCode::NOT_FOUND => Ok(FioResponse::NotFound(response.json().await?)),
        status => Err(ClientError::UnexpectedStatus {
            status: status.as_u16(),
            url: response.url().to_string(),
        }),
    }
}

/// Client for the safelist API
#[derive(Debug, Clone)]
pub struct SafelistClient {
    http: reqwest::Client,
    base_url: Url,
}

impl SafelistClient {
    /// Create a client from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL does not parse or the HTTP client
    /// cannot be built
    pub fn new(config: &SafelistConfig) -> ClientResult<Self> {
        let base_url: Url = config.base_url.parse()?;
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self { http, base_url })
    }

    /// Entry URL for one contract: the address appended to the base path
    fn contract_url(&self, contract_address: &str) -> ClientResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                ClientError::Configuration(format!(
                    "Safelist base URL cannot take path segments: {}",
                    self.base_url
                ))
            })?
            .pop_if_empty()
            .push(contract_address);
        Ok(url)
    }
}

#[async_trait]
impl SafelistLookup for SafelistClient {
    #[instrument(skip(self))]
    async fn contract_status(&self, contract_address: &str) -> ClientResult<SafelistResponse> {
        let url = self.contract_url(contract_address)?;
        let response = self.http.get(url).send().await?;

        match response.status() {
            StatusCode::OK => Ok(response.json().await?),
            status => Err(ClientError::UnexpectedStatus {
                status: status.as_u16(),
                url: response.url().to_string(),
            }),
        }
    }
}
