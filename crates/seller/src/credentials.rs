//! Seller API credentials.

use ozon_core::OzonError;
use reqwest::header::HeaderValue;

/// Credential pair for the Seller API, issued in the seller cabinet.
///
/// Sent with every request as the `Client-Id` and `Api-Key` headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SellerCredentials {
    pub client_id: String,
    pub api_key: String,
}

impl SellerCredentials {
    pub fn new(client_id: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self { client_id: client_id.into(), api_key: api_key.into() }
    }

    /// Reject unusable fields up front rather than letting the API answer
    /// 401 to every call. A field is unusable when it is empty or contains
    /// bytes that cannot appear in an HTTP header.
    pub fn validate(&self) -> Result<(), OzonError> {
        if self.client_id.is_empty() {
            return Err(OzonError::Validation("client_id must not be empty".into()));
        }
        if self.api_key.is_empty() {
            return Err(OzonError::Validation("api_key must not be empty".into()));
        }
        self.client_id_header()?;
        self.api_key_header()?;
        Ok(())
    }

    pub(crate) fn client_id_header(&self) -> Result<HeaderValue, OzonError> {
        header_value(&self.client_id, "client_id")
    }

    pub(crate) fn api_key_header(&self) -> Result<HeaderValue, OzonError> {
        header_value(&self.api_key, "api_key")
    }
}

fn header_value(value: &str, field: &str) -> Result<HeaderValue, OzonError> {
    HeaderValue::from_str(value)
        .map_err(|_| OzonError::Validation(format!("{field} is not a valid header value")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_credentials_validate() {
        assert!(SellerCredentials::new("12345", "key").validate().is_ok());
    }

    #[test]
    fn empty_fields_are_rejected() {
        assert!(SellerCredentials::new("", "key").validate().is_err());
        assert!(SellerCredentials::new("12345", "").validate().is_err());
    }

    #[test]
    fn fields_with_control_bytes_are_rejected() {
        assert!(matches!(
            SellerCredentials::new("123\n45", "key").validate(),
            Err(OzonError::Validation(_))
        ));
        assert!(matches!(
            SellerCredentials::new("12345", "bad\nkey").validate(),
            Err(OzonError::Validation(_))
        ));
    }
}
