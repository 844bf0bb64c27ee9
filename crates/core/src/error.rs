//! Error taxonomy shared by the Seller and Performance clients.

use thiserror::Error;

/// Errors surfaced by the Ozon API clients.
///
/// Business-level failures are not represented here: a non-2xx status on a
/// marshaled business call comes back inside the [`crate::ApiResponse`]
/// envelope, exactly as the server returned it. Only the authentication
/// exchange treats a non-2xx status as a hard error.
#[derive(Debug, Error)]
pub enum OzonError {
    /// The client-credentials exchange failed: non-2xx status, or a 2xx body
    /// missing `access_token`/`expires_in`. Carries the upstream response so
    /// the caller can inspect what the authorization server said.
    #[error("authentication failed (status {status}): {body}")]
    Authentication {
        /// Upstream HTTP status of the token exchange.
        status: u16,
        /// Raw response body from the authorization endpoint.
        body: String,
    },

    /// The HTTP call failed before a status code was obtained (connection
    /// refused, timeout, TLS failure). Surfaced as-is from the transport.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A configured credential set is missing a required field. Raised at
    /// client construction time, before any request or cache interaction.
    #[error("invalid credentials: {0}")]
    Validation(String),

    /// The response body could not be decoded into the envelope (malformed
    /// JSON or CSV).
    #[error("failed to decode response body: {0}")]
    Decode(String),
}

impl OzonError {
    /// True for authentication-exchange failures. Callers typically react by
    /// evicting the cached token and retrying once.
    pub fn is_authentication(&self) -> bool {
        matches!(self, Self::Authentication { .. })
    }
}
