use reqwest::{Client, Response};
use serde_json::Value;
use tracing::{debug, instrument, warn};

use super::errors::{ClientError, ClientResult};
use super::types::*;
use crate::services::config::{
    ApiConfig, CREATE_LINK_PATH, FETCH_DATA_PATH, SUBMIT_CREDENTIALS_PATH,
};

/// HTTP client for the three account-linking exchanges.
///
/// Every call issues exactly one request. Nothing is retried, cached or
/// timed out, and all parameters travel in the query string with no body.
#[derive(Debug, Clone)]
pub struct LinkClient {
    pub(crate) http_client: Client,
    pub(crate) config: ApiConfig,
}

impl LinkClient {
    /// Create a client for the API resolved by [`ApiConfig::from_environment`].
    pub fn new() -> Self {
        Self::with_config(ApiConfig::from_environment())
    }

    pub fn with_config(config: ApiConfig) -> Self {
        Self {
            http_client: Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// POST `/create_link?site=..`
    #[instrument(skip(self, request), fields(site = %request.site), err)]
    pub async fn create_link(&self, request: &LinkRequest) -> ClientResult<LinkTokenResponse> {
        let response = self
            .http_client
            .post(self.config.endpoint(CREATE_LINK_PATH))
            .query(&request.query_pairs())
            .send()
            .await?;

        let body = read_json_body(response, "create_link").await?;
        Ok(LinkTokenResponse::from_body(body))
    }

    /// POST `/submit_credentials?link_token=..&username=..&password=..`
    // The API contract puts the password in the query string.
    #[instrument(skip(self, request), fields(link_token = %request.link_token, username = %request.username), err)]
    pub async fn submit_credentials(
        &self,
        request: &CredentialRequest,
    ) -> ClientResult<AccessTokenResponse> {
        let response = self
            .http_client
            .post(self.config.endpoint(SUBMIT_CREDENTIALS_PATH))
            .query(&request.query_pairs())
            .send()
            .await?;

        let body = read_json_body(response, "submit_credentials").await?;
        Ok(AccessTokenResponse::from_body(body))
    }

    /// GET `/fetch_data?access_token=..`
    #[instrument(skip(self, request), err)]
    pub async fn fetch_data(&self, request: &DataRequest) -> ClientResult<DataPayload> {
        let response = self
            .http_client
            .get(self.config.endpoint(FETCH_DATA_PATH))
            .query(&request.query_pairs())
            .send()
            .await?;

        let body = read_json_body(response, "fetch_data").await?;
        Ok(DataPayload(body))
    }
}

impl Default for LinkClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Check the status, then decode the whole body as JSON.
async fn read_json_body(response: Response, operation: &str) -> ClientResult<Value> {
    let status = response.status();
    if !status.is_success() {
        warn!("{} returned HTTP {}", operation, status);
        return Err(ClientError::transport(status));
    }

    let bytes = response.bytes().await?;
    let body = serde_json::from_slice(&bytes).map_err(|e| {
        warn!("{} returned a body that is not JSON: {}", operation, e);
        ClientError::from(e)
    })?;

    debug!("{} succeeded with HTTP {}", operation, status);
    Ok(body)
}
