//! The Noun Project API client.
//!
//! One method per logical operation. Each builds the endpoint path and
//! query, signs the request, issues a single `GET` and returns the parsed
//! JSON body. Failures come back as [`ApiError`]; nothing is retried or
//! cached.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, instrument, warn};

use super::error::{ApiError, ApiResult};
use super::params::{
    AutocompleteParams, DownloadIconParams, GetCollectionParams, GetIconParams,
    SearchCollectionsParams, SearchIconsParams, to_query_pairs,
};
use super::signing::{Credentials, OAuth1Signer, RequestSigner, SigningRequest, oauth_encode};

/// Production API root.
pub const DEFAULT_BASE_URL: &str = "https://api.thenounproject.com";

/// Field of the download response holding the resolved file URL.
const DOWNLOAD_URL_FIELD: &str = "download_url";

const NO_PARAMS: &[(&str, &str)] = &[];

/// The operations the upstream icon service offers.
#[async_trait]
pub trait IconApi: Send + Sync {
    async fn search_icons(&self, params: SearchIconsParams) -> ApiResult<Value>;

    async fn get_icon(&self, params: GetIconParams) -> ApiResult<Value>;

    async fn get_collection(&self, params: GetCollectionParams) -> ApiResult<Value>;

    async fn search_collections(&self, params: SearchCollectionsParams) -> ApiResult<Value>;

    async fn autocomplete(&self, params: AutocompleteParams) -> ApiResult<Value>;

    async fn check_usage(&self) -> ApiResult<Value>;

    /// Resolve a download URL; yields the bare URL string, not the full body.
    async fn get_download_url(&self, params: DownloadIconParams) -> ApiResult<Value>;
}

/// HTTP client for The Noun Project API v2.
#[derive(Clone)]
pub struct NounProjectClient {
    http: Client,
    base_url: String,
    credentials: Credentials,
    signer: Arc<dyn RequestSigner>,
}

impl NounProjectClient {
    /// Create a client against the production API.
    pub fn new(credentials: Credentials) -> ApiResult<Self> {
        Self::with_base_url(credentials, DEFAULT_BASE_URL)
    }

    /// Create a client against a custom API root (proxies, tests).
    pub fn with_base_url(credentials: Credentials, base_url: impl Into<String>) -> ApiResult<Self> {
        let http = Client::builder()
            .user_agent(concat!("noun-project-mcp/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            credentials,
            signer: Arc::new(OAuth1Signer::new()),
        })
    }

    /// Replace the request signer.
    pub fn with_signer(mut self, signer: Arc<dyn RequestSigner>) -> Self {
        self.signer = signer;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue one signed `GET` and return the JSON body of a 2xx response.
    #[instrument(skip(self, params))]
    async fn get<P: Serialize>(&self, path: &str, params: &P) -> ApiResult<Value> {
        let query = to_query_pairs(params)?;
        let url = format!("{}{}", self.base_url, path);

        let auth = self.signer.sign(
            &SigningRequest {
                method: "GET",
                url: &url,
                query: &query,
            },
            &self.credentials,
        )?;

        let full_query: Vec<String> = query
            .iter()
            .chain(auth.query.iter())
            .map(|(k, v)| format!("{}={}", oauth_encode(k), oauth_encode(v)))
            .collect();
        let request_url = if full_query.is_empty() {
            url
        } else {
            format!("{}?{}", url, full_query.join("&"))
        };

        let mut request = self.http.get(&request_url);
        for (name, value) in &auth.headers {
            request = request.header(name.as_str(), value.as_str());
        }

        debug!("Sending upstream request");
        let response = request.send().await.map_err(|e| {
            warn!("Upstream request failed: {}", e);
            ApiError::from(e)
        })?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!("Upstream returned HTTP {}", status.as_u16());
            return Err(ApiError::from_response(status, &body));
        }

        serde_json::from_str(&body)
            .map_err(|e| ApiError::malformed(format!("response body is not valid JSON: {e}")))
    }
}

/// Pull the download URL out of a download response body.
fn extract_download_url(body: Value) -> ApiResult<Value> {
    match body.get(DOWNLOAD_URL_FIELD) {
        Some(Value::String(url)) => Ok(Value::String(url.clone())),
        _ => Err(ApiError::malformed(format!(
            "response has no '{}' field",
            DOWNLOAD_URL_FIELD
        ))),
    }
}

#[async_trait]
impl IconApi for NounProjectClient {
    async fn search_icons(&self, params: SearchIconsParams) -> ApiResult<Value> {
        self.get("/v2/icon", &params).await
    }

    async fn get_icon(&self, params: GetIconParams) -> ApiResult<Value> {
        let path = format!("/v2/icon/{}", params.icon_id);
        self.get(&path, &params).await
    }

    async fn get_collection(&self, params: GetCollectionParams) -> ApiResult<Value> {
        let path = format!("/v2/collection/{}", params.collection_id);
        self.get(&path, &params).await
    }

    async fn search_collections(&self, params: SearchCollectionsParams) -> ApiResult<Value> {
        self.get("/v2/collection", &params).await
    }

    async fn autocomplete(&self, params: AutocompleteParams) -> ApiResult<Value> {
        self.get("/v2/icon/autocomplete", &params).await
    }

    async fn check_usage(&self) -> ApiResult<Value> {
        self.get("/v2/client/usage", &NO_PARAMS).await
    }

    async fn get_download_url(&self, params: DownloadIconParams) -> ApiResult<Value> {
        let path = format!("/v2/icon/{}/download", params.icon_id);
        let body = self.get(&path, &params).await?;
        extract_download_url(body)
    }
}
