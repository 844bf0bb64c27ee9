//! Seller warehouse endpoints (FBS and rFBS schemes).

use ozon_core::OzonError;
use serde::Serialize;
use serde_json::Value;

use crate::client::OzonSellerClient;

/// Filter for [`OzonSellerClient::delivery_method_list`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct DeliveryMethodFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warehouse_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_id: Option<i64>,
    /// `NEW`, `EDITED`, `ACTIVE` or `DISABLED`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Parameters for [`OzonSellerClient::delivery_method_list`].
#[derive(Debug, Clone, Serialize)]
pub struct DeliveryMethodListRequest {
    pub filter: DeliveryMethodFilter,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    /// Page size, 1 to 50.
    pub limit: u32,
}

impl Default for DeliveryMethodListRequest {
    fn default() -> Self {
        Self { filter: DeliveryMethodFilter::default(), offset: None, limit: 50 }
    }
}

impl OzonSellerClient {
    /// All seller warehouses: POST `v1/warehouse/list`, no parameters.
    pub async fn warehouse_list(&self) -> Result<Value, OzonError> {
        Ok(self.post_empty("v1/warehouse/list").await?.into_data())
    }

    /// Delivery methods of the seller's warehouses: POST
    /// `v1/delivery-method/list`.
    pub async fn delivery_method_list(
        &self,
        request: &DeliveryMethodListRequest,
    ) -> Result<Value, OzonError> {
        Ok(self.post_response("v1/delivery-method/list", request).await?.into_data())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn delivery_method_request_defaults() {
        let body = serde_json::to_value(DeliveryMethodListRequest::default()).unwrap();
        assert_eq!(body, json!({"filter": {}, "limit": 50}));
    }

    #[test]
    fn warehouse_filter_survives_serialization() {
        let request = DeliveryMethodListRequest {
            filter: DeliveryMethodFilter {
                warehouse_id: Some(15_588_127_982_000),
                status: Some("ACTIVE".into()),
                ..DeliveryMethodFilter::default()
            },
            offset: Some(10),
            limit: 20,
        };
        let body = serde_json::to_value(request).unwrap();
        assert_eq!(
            body,
            json!({
                "filter": {"warehouse_id": 15_588_127_982_000_i64, "status": "ACTIVE"},
                "offset": 10,
                "limit": 20,
            })
        );
    }
}
