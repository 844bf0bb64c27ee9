//! Bearer-token cache for the Performance API.
//!
//! One entry per credential set. A token is valid while
//! `now - issued_at < ttl`; an expired token is never handed out, it is
//! replaced by a fresh client-credentials exchange before use. Callers racing
//! on the same credential set are serialized per key, so a cold cache
//! performs exactly one exchange no matter how many callers hit it at once.
//! A failed exchange caches nothing and leaves any previous entry untouched.

use std::collections::HashMap;
use std::sync::{Mutex as StdMutex, MutexGuard};
use std::sync::Arc;
use std::time::{Duration, Instant};

use ozon_core::{HttpClient, OzonError};
use reqwest::Method;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::credentials::PerformanceCredentials;

pub(crate) const TOKEN_PATH: &str = "api/client/token";

#[derive(Debug, Clone)]
struct CachedToken {
    value: String,
    issued_at: Instant,
    ttl: Duration,
}

impl CachedToken {
    fn is_valid(&self) -> bool {
        self.issued_at.elapsed() < self.ttl
    }
}

#[derive(Serialize)]
struct TokenRequest<'a> {
    client_id: &'a str,
    client_secret: &'a str,
    grant_type: &'static str,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: u64,
}

type Slot = Arc<Mutex<Option<CachedToken>>>;

/// Token registry mapping credential sets to cached bearer tokens.
///
/// Explicitly constructed and owned, never global: share it behind an `Arc`
/// to have several clients observe the same registry. Entries live in process
/// memory only and die with the cache.
pub struct TokenCache {
    http: HttpClient,
    token_url: String,
    entries: StdMutex<HashMap<String, Slot>>,
}

impl TokenCache {
    /// `base_url` is the Performance API root (trailing slash included); the
    /// token endpoint path is appended to it.
    pub fn new(http: HttpClient, base_url: &str) -> Self {
        Self {
            http,
            token_url: format!("{base_url}{TOKEN_PATH}"),
            entries: StdMutex::new(HashMap::new()),
        }
    }

    /// Return a currently-valid bearer token for `credentials`.
    ///
    /// Hits the cache when a valid token exists (no network call); otherwise
    /// performs one client-credentials exchange and stores the result.
    pub async fn get_token(
        &self,
        credentials: &PerformanceCredentials,
    ) -> Result<String, OzonError> {
        let slot = self.slot(&credentials.cache_key());
        let mut entry = slot.lock().await;

        if let Some(token) = entry.as_ref() {
            if token.is_valid() {
                debug!(client_id = %credentials.client_id, "token cache hit");
                return Ok(token.value.clone());
            }
        }

        let token = self.exchange(credentials).await?;
        let value = token.value.clone();
        *entry = Some(token);
        Ok(value)
    }

    /// Evict the entry for one credential set, forcing the next
    /// [`TokenCache::get_token`] for it to re-authenticate. Forgetting an
    /// absent key is a no-op.
    pub fn forget(&self, credentials: &PerformanceCredentials) {
        self.lock_entries().remove(&credentials.cache_key());
    }

    /// Clear the whole registry. Idempotent.
    pub fn forget_all(&self) {
        self.lock_entries().clear();
    }

    fn slot(&self, key: &str) -> Slot {
        Arc::clone(self.lock_entries().entry(key.to_string()).or_default())
    }

    fn lock_entries(&self) -> MutexGuard<'_, HashMap<String, Slot>> {
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    async fn exchange(
        &self,
        credentials: &PerformanceCredentials,
    ) -> Result<CachedToken, OzonError> {
        info!(client_id = %credentials.client_id, "requesting performance API token");

        let issued_at = Instant::now();
        let request = self.http.request(Method::POST, &self.token_url).json(&TokenRequest {
            client_id: &credentials.client_id,
            client_secret: &credentials.client_secret,
            grant_type: "client_credentials",
        });
        let response = self.http.send(request).await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(OzonError::Authentication { status: status.as_u16(), body });
        }

        let parsed: TokenResponse = serde_json::from_str(&body)
            .map_err(|_| OzonError::Authentication { status: status.as_u16(), body })?;

        Ok(CachedToken {
            value: parsed.access_token,
            issued_at,
            ttl: Duration::from_secs(parsed.expires_in),
        })
    }

    /// Rewind the issue time of a cached token, as if it had been obtained
    /// `by` ago. Lets tests cross the expiry boundary without sleeping.
    #[cfg(test)]
    async fn backdate(&self, credentials: &PerformanceCredentials, by: Duration) {
        let slot = self.slot(&credentials.cache_key());
        let mut entry = slot.lock().await;
        if let Some(token) = entry.as_mut() {
            if let Some(earlier) = token.issued_at.checked_sub(by) {
                token.issued_at = earlier;
            }
        }
    }
}
