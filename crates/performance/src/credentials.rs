//! Performance API credential set.

use ozon_core::OzonError;
use sha2::{Digest, Sha256};

/// Client-credential pair for the Performance API.
///
/// Credentials are compared by value: two sets with the same fields map to
/// the same token-cache entry regardless of which client instance holds them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PerformanceCredentials {
    pub client_id: String,
    pub client_secret: String,
}

impl PerformanceCredentials {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self { client_id: client_id.into(), client_secret: client_secret.into() }
    }

    /// Require both fields to be non-empty. Called at client construction,
    /// before any request or cache interaction.
    pub fn validate(&self) -> Result<(), OzonError> {
        if self.client_id.is_empty() {
            return Err(OzonError::Validation("client_id is required".to_string()));
        }
        if self.client_secret.is_empty() {
            return Err(OzonError::Validation("client_secret is required".to_string()));
        }
        Ok(())
    }

    /// Deterministic cache key: SHA-256 over the fields in a fixed order.
    /// Each field is length-prefixed, so distinct pairs that concatenate to
    /// the same string still produce distinct keys.
    pub(crate) fn cache_key(&self) -> String {
        let mut hasher = Sha256::new();
        for field in [&self.client_id, &self.client_secret] {
            hasher.update((field.len() as u64).to_be_bytes());
            hasher.update(field.as_bytes());
        }
        hex::encode(hasher.finalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_credentials_share_a_key() {
        let a = PerformanceCredentials::new("c1", "s1");
        let b = PerformanceCredentials::new("c1", "s1");
        assert_eq!(a.cache_key(), b.cache_key());
    }

    #[test]
    fn different_credentials_get_different_keys() {
        let a = PerformanceCredentials::new("c1", "s1");
        let b = PerformanceCredentials::new("c2", "s1");
        let c = PerformanceCredentials::new("c1", "s2");
        assert_ne!(a.cache_key(), b.cache_key());
        assert_ne!(a.cache_key(), c.cache_key());
    }

    #[test]
    fn length_prefix_prevents_concatenation_collisions() {
        let a = PerformanceCredentials::new("ab", "c");
        let b = PerformanceCredentials::new("a", "bc");
        assert_ne!(a.cache_key(), b.cache_key());
    }

    #[test]
    fn validation_rejects_empty_fields() {
        assert!(PerformanceCredentials::new("", "s").validate().is_err());
        assert!(PerformanceCredentials::new("c", "").validate().is_err());
        assert!(PerformanceCredentials::new("c", "s").validate().is_ok());
    }
}
