//! Customer return endpoints.

use ozon_core::OzonError;
use serde::Serialize;
use serde_json::Value;

use crate::client::OzonSellerClient;

/// Posting and status filter for [`OzonSellerClient::returns_list`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct ReturnsFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub posting_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Vec<String>>,
}

/// Parameters for [`OzonSellerClient::returns_list`].
#[derive(Debug, Clone, Serialize)]
pub struct ReturnsListRequest {
    pub filter: ReturnsFilter,
    /// Identifier to resume after; omit on the first page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_id: Option<i64>,
    pub limit: u32,
}

impl Default for ReturnsListRequest {
    fn default() -> Self {
        Self { filter: ReturnsFilter::default(), last_id: None, limit: 1000 }
    }
}

impl OzonSellerClient {
    /// Returns across both schemes: POST `v1/returns/list`.
    pub async fn returns_list(&self, request: &ReturnsListRequest) -> Result<Value, OzonError> {
        Ok(self.post_response("v1/returns/list", request).await?.into_data())
    }
}
