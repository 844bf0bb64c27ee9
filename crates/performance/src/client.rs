//! Performance API client: bearer-authenticated request primitives.

use std::sync::Arc;
use std::time::Duration;

use ozon_core::{ApiResponse, HttpClient, OzonError, Query};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::Method;
use serde::Serialize;
use tracing::debug;

use crate::credentials::PerformanceCredentials;
use crate::token::TokenCache;

/// Production base URL of the Performance API.
pub const PERFORMANCE_URL: &str = "https://performance.ozon.ru/";

const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
const TIMEOUT: Duration = Duration::from_secs(120);

/// Configuration for [`OzonPerformanceClient`].
#[derive(Debug, Clone)]
pub struct PerformanceConfig {
    /// API root, trailing slash included.
    pub base_url: String,
    /// Connection-establishment bound.
    pub connect_timeout: Duration,
    /// Total per-request bound. Statistics exports can be slow, hence the
    /// generous default.
    pub timeout: Duration,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            base_url: PERFORMANCE_URL.to_string(),
            connect_timeout: CONNECT_TIMEOUT,
            timeout: TIMEOUT,
        }
    }
}

/// Client for the Ozon Performance (advertising) API.
///
/// Cloning is cheap; clones share the token cache, so a token fetched through
/// one clone is visible to the others.
#[derive(Clone)]
pub struct OzonPerformanceClient {
    credentials: PerformanceCredentials,
    http: HttpClient,
    tokens: Arc<TokenCache>,
    base_url: String,
}

impl OzonPerformanceClient {
    /// Create a client against the production API.
    ///
    /// # Errors
    ///
    /// Returns [`OzonError::Validation`] when a credential field is empty.
    pub fn new(credentials: PerformanceCredentials) -> Result<Self, OzonError> {
        Self::with_config(credentials, PerformanceConfig::default())
    }

    /// Create a client with explicit configuration (tests point `base_url`
    /// at a mock server).
    pub fn with_config(
        credentials: PerformanceCredentials,
        config: PerformanceConfig,
    ) -> Result<Self, OzonError> {
        let http = build_transport(&config)?;
        let tokens = Arc::new(TokenCache::new(http.clone(), &config.base_url));
        Self::assemble(credentials, config, http, tokens)
    }

    /// Create a client sharing an existing token cache. Useful for
    /// multi-tenant setups where many credential sets go through one
    /// registry.
    pub fn with_token_cache(
        credentials: PerformanceCredentials,
        config: PerformanceConfig,
        tokens: Arc<TokenCache>,
    ) -> Result<Self, OzonError> {
        let http = build_transport(&config)?;
        Self::assemble(credentials, config, http, tokens)
    }

    fn assemble(
        credentials: PerformanceCredentials,
        config: PerformanceConfig,
        http: HttpClient,
        tokens: Arc<TokenCache>,
    ) -> Result<Self, OzonError> {
        credentials.validate()?;
        Ok(Self { credentials, http, tokens, base_url: config.base_url })
    }

    /// The token registry backing this client.
    pub fn token_cache(&self) -> &Arc<TokenCache> {
        &self.tokens
    }

    /// Evict this client's cached token, forcing re-authentication on the
    /// next request. Call it after a downstream call reports the token as
    /// rejected.
    pub fn forget_token(&self) {
        self.tokens.forget(&self.credentials);
    }

    /// GET returning a JSON body.
    pub async fn get_response(&self, path: &str, query: &Query) -> Result<ApiResponse, OzonError> {
        let response = self.send(Method::GET, path, query, None::<&()>).await?;
        ApiResponse::from_json(response).await
    }

    /// GET returning a `;`-delimited CSV body (statistics exports).
    pub async fn get_response_csv(
        &self,
        path: &str,
        query: &Query,
    ) -> Result<ApiResponse, OzonError> {
        let response = self.send(Method::GET, path, query, None::<&()>).await?;
        ApiResponse::from_csv(response).await
    }

    /// POST with a JSON body.
    pub async fn post_response<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<ApiResponse, OzonError> {
        let response = self.send(Method::POST, path, &Query::new(), Some(body)).await?;
        ApiResponse::from_json(response).await
    }

    async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        query: &Query,
        body: Option<&B>,
    ) -> Result<reqwest::Response, OzonError> {
        let token = self.tokens.get_token(&self.credentials).await?;
        let url = format!("{}{path}", self.base_url);
        debug!(%method, %url, "performance API request");

        let mut request = self.http.request(method, &url).bearer_auth(token);
        if !query.is_empty() {
            request = request.query(query.pairs());
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        self.http.send(request).await
    }
}

fn build_transport(config: &PerformanceConfig) -> Result<HttpClient, OzonError> {
    HttpClient::builder()
        .connect_timeout(config.connect_timeout)
        .timeout(config.timeout)
        .default_headers(default_headers())
        .build()
}

fn default_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers
}
