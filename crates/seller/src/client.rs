//! Seller API transport.

use ozon_core::{ApiResponse, HttpClient, OzonError, Query};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::Method;
use serde::Serialize;
use tracing::debug;

use crate::credentials::SellerCredentials;

/// Production API root.
pub const SELLER_URL: &str = "https://api-seller.ozon.ru/";

/// Configuration for [`OzonSellerClient`].
#[derive(Debug, Clone)]
pub struct SellerConfig {
    /// API root, trailing slash included.
    pub base_url: String,
}

impl Default for SellerConfig {
    fn default() -> Self {
        Self { base_url: SELLER_URL.to_string() }
    }
}

/// Client for the Ozon Seller API.
///
/// Stateless: credentials ride along as headers on every request, so clones
/// are independent and there is nothing to invalidate.
#[derive(Clone)]
pub struct OzonSellerClient {
    credentials: SellerCredentials,
    http: HttpClient,
    base_url: String,
}

impl OzonSellerClient {
    /// Create a client against the production API.
    ///
    /// # Errors
    ///
    /// Returns [`OzonError::Validation`] when a credential field is empty or
    /// contains bytes that cannot appear in an HTTP header.
    pub fn new(credentials: SellerCredentials) -> Result<Self, OzonError> {
        Self::with_config(credentials, SellerConfig::default())
    }

    /// Create a client with explicit configuration (tests point `base_url`
    /// at a mock server).
    pub fn with_config(
        credentials: SellerCredentials,
        config: SellerConfig,
    ) -> Result<Self, OzonError> {
        credentials.validate()?;
        let http = HttpClient::builder().default_headers(default_headers()).build()?;
        Ok(Self { credentials, http, base_url: config.base_url })
    }

    /// Issue a GET to `path` with `query` appended. Exposed so that
    /// endpoints without a dedicated method remain reachable.
    pub async fn get_response(&self, path: &str, query: &Query) -> Result<ApiResponse, OzonError> {
        let mut builder = self.authorized(Method::GET, path)?;
        if !query.is_empty() {
            builder = builder.query(query.pairs());
        }
        let response = self.http.send(builder).await?;
        ApiResponse::from_json(response).await
    }

    /// Issue a POST to `path` with `body` as JSON. Exposed so that
    /// endpoints without a dedicated method remain reachable.
    pub async fn post_response<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<ApiResponse, OzonError> {
        let builder = self.authorized(Method::POST, path)?.json(body);
        let response = self.http.send(builder).await?;
        ApiResponse::from_json(response).await
    }

    /// POST with an empty JSON object, for endpoints that take no
    /// parameters.
    pub(crate) async fn post_empty(&self, path: &str) -> Result<ApiResponse, OzonError> {
        self.post_response(path, &serde_json::json!({})).await
    }

    fn authorized(&self, method: Method, path: &str) -> Result<reqwest::RequestBuilder, OzonError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%method, %url, "seller API request");
        Ok(self
            .http
            .request(method, url)
            .header("Client-Id", self.credentials.client_id_header()?)
            .header("Api-Key", self.credentials.api_key_header()?))
    }
}

fn default_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers
}
