//! Report generation endpoints.

use ozon_core::OzonError;
use serde::Serialize;
use serde_json::{json, Value};

use crate::client::OzonSellerClient;

/// Parameters for [`OzonSellerClient::report_list`].
#[derive(Debug, Clone, Serialize)]
pub struct ReportListRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    pub page_size: u32,
    /// `ALL`, `SELLER_PRODUCTS`, `SELLER_TRANSACTIONS`, `SELLER_PRODUCT_PRICES`,
    /// `SELLER_STOCK`, `SELLER_PRODUCT_MOVEMENT`, `SELLER_RETURNS`,
    /// `SELLER_POSTINGS` or `SELLER_FINANCE`.
    pub report_type: String,
}

impl Default for ReportListRequest {
    fn default() -> Self {
        Self { page: None, page_size: 100, report_type: "ALL".to_string() }
    }
}

impl OzonSellerClient {
    /// Previously generated reports: POST `v1/report/list`.
    pub async fn report_list(&self, request: &ReportListRequest) -> Result<Value, OzonError> {
        Ok(self.post_response("v1/report/list", request).await?.into_data())
    }

    /// One report by its code: POST `v1/report/info`.
    pub async fn report_info(&self, code: &str) -> Result<Value, OzonError> {
        Ok(self.post_response("v1/report/info", &json!({ "code": code })).await?.into_data())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_request_defaults() {
        let body = serde_json::to_value(ReportListRequest::default()).unwrap();
        assert_eq!(body, json!({"page_size": 100, "report_type": "ALL"}));
    }

    #[test]
    fn list_request_keeps_an_explicit_page() {
        let request = ReportListRequest { page: Some(3), ..ReportListRequest::default() };
        assert_eq!(serde_json::to_value(request).unwrap()["page"], 3);
    }
}
