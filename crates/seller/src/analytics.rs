//! Analytics endpoints.

use chrono::NaiveDate;
use ozon_core::dates::serde_date;
use ozon_core::OzonError;
use serde::Serialize;
use serde_json::Value;

use crate::client::OzonSellerClient;

/// One comparison in [`AnalyticsDataRequest::filters`].
#[derive(Debug, Clone, Serialize)]
pub struct AnalyticsFilter {
    /// Any `dimension` or `metric` attribute except `brand`.
    pub key: String,
    /// `EQ`, `GT`, `GTE`, `LT` or `LTE`.
    pub op: String,
    pub value: String,
}

/// One sort key in [`AnalyticsDataRequest::sort`].
#[derive(Debug, Clone, Serialize)]
pub struct AnalyticsSorting {
    pub key: String,
    /// `ASC` or `DESC`.
    pub order: String,
}

/// Parameters for [`OzonSellerClient::analytics_data`].
///
/// Dates go on the wire as `YYYY-MM-DD`, unlike the posting filters.
#[derive(Debug, Clone, Serialize)]
pub struct AnalyticsDataRequest {
    #[serde(with = "serde_date")]
    pub date_from: NaiveDate,
    #[serde(with = "serde_date")]
    pub date_to: NaiveDate,
    pub metrics: Vec<String>,
    pub dimension: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<Vec<AnalyticsFilter>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<Vec<AnalyticsSorting>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    /// Page size, 1 to 1000.
    pub limit: u32,
}

impl AnalyticsDataRequest {
    pub fn new(
        date_from: NaiveDate,
        date_to: NaiveDate,
        metrics: Vec<String>,
        dimension: Vec<String>,
    ) -> Self {
        Self {
            date_from,
            date_to,
            metrics,
            dimension,
            filters: None,
            sort: None,
            offset: None,
            limit: 1000,
        }
    }
}

/// Parameters for [`OzonSellerClient::analytics_stock_on_warehouses`].
#[derive(Debug, Clone, Serialize)]
pub struct StockOnWarehousesRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    pub limit: u32,
    /// Warehouse type filter, `ALL` by default.
    pub warehouse_type: String,
}

impl Default for StockOnWarehousesRequest {
    fn default() -> Self {
        Self { offset: None, limit: 100, warehouse_type: "ALL".to_string() }
    }
}

impl OzonSellerClient {
    /// Sales and traffic metrics: POST `v1/analytics/data`.
    pub async fn analytics_data(
        &self,
        request: &AnalyticsDataRequest,
    ) -> Result<Value, OzonError> {
        Ok(self.post_response("v1/analytics/data", request).await?.into_data())
    }

    /// Stock and in-transit items per Ozon warehouse: POST
    /// `v2/analytics/stock_on_warehouses`.
    pub async fn analytics_stock_on_warehouses(
        &self,
        request: &StockOnWarehousesRequest,
    ) -> Result<Value, OzonError> {
        Ok(self.post_response("v2/analytics/stock_on_warehouses", request).await?.into_data())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn data_request_uses_plain_dates() {
        let request = AnalyticsDataRequest::new(
            date(2024, 3, 1),
            date(2024, 3, 31),
            vec!["revenue".into()],
            vec!["sku".into()],
        );
        let body = serde_json::to_value(request).unwrap();
        assert_eq!(
            body,
            json!({
                "date_from": "2024-03-01",
                "date_to": "2024-03-31",
                "metrics": ["revenue"],
                "dimension": ["sku"],
                "limit": 1000,
            })
        );
    }

    #[test]
    fn data_request_nests_filters_and_sort() {
        let mut request = AnalyticsDataRequest::new(
            date(2024, 3, 1),
            date(2024, 3, 31),
            vec!["hits_view".into()],
            vec!["day".into()],
        );
        request.filters = Some(vec![AnalyticsFilter {
            key: "hits_view".into(),
            op: "GT".into(),
            value: "100".into(),
        }]);
        request.sort =
            Some(vec![AnalyticsSorting { key: "hits_view".into(), order: "DESC".into() }]);

        let body = serde_json::to_value(request).unwrap();
        assert_eq!(body["filters"], json!([{"key": "hits_view", "op": "GT", "value": "100"}]));
        assert_eq!(body["sort"], json!([{"key": "hits_view", "order": "DESC"}]));
    }

    #[test]
    fn stock_request_defaults() {
        let body = serde_json::to_value(StockOnWarehousesRequest::default()).unwrap();
        assert_eq!(body, json!({"limit": 100, "warehouse_type": "ALL"}));
    }
}
