//! Posting (shipment) endpoints for the FBO and FBS schemes.

use chrono::{DateTime, Utc};
use ozon_core::dates::serde_opt_date_time;
use ozon_core::OzonError;
use serde::Serialize;
use serde_json::Value;

use crate::client::OzonSellerClient;

/// Period and status filter for [`OzonSellerClient::posting_fbo_list`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct FboListFilter {
    #[serde(with = "serde_opt_date_time", skip_serializing_if = "Option::is_none")]
    pub since: Option<DateTime<Utc>>,
    #[serde(with = "serde_opt_date_time", skip_serializing_if = "Option::is_none")]
    pub to: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Extra response sections for FBO postings.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FboWith {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analytics_data: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub financial_data: Option<bool>,
}

/// Parameters for [`OzonSellerClient::posting_fbo_list`].
#[derive(Debug, Clone, Serialize)]
pub struct FboListRequest {
    pub filter: FboListFilter,
    pub with: FboWith,
    /// `ASC` or `DESC`.
    pub dir: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translit: Option<bool>,
    /// Page size, 1 to 1000.
    pub limit: u32,
}

impl Default for FboListRequest {
    fn default() -> Self {
        Self {
            filter: FboListFilter::default(),
            with: FboWith::default(),
            dir: "ASC".to_string(),
            offset: None,
            translit: None,
            limit: 1000,
        }
    }
}

/// Parameters for [`OzonSellerClient::posting_fbo_get`].
#[derive(Debug, Clone, Serialize)]
pub struct FboGetRequest {
    pub posting_number: String,
    pub with: FboWith,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translit: Option<bool>,
}

impl FboGetRequest {
    pub fn new(posting_number: impl Into<String>) -> Self {
        Self { posting_number: posting_number.into(), with: FboWith::default(), translit: None }
    }
}

/// Period and routing filter for [`OzonSellerClient::posting_fbs_list`].
///
/// The period must not span more than one year.
#[derive(Debug, Clone, Serialize)]
pub struct FbsListFilter {
    #[serde(with = "serde_opt_date_time", skip_serializing_if = "Option::is_none")]
    pub since: Option<DateTime<Utc>>,
    #[serde(with = "serde_opt_date_time", skip_serializing_if = "Option::is_none")]
    pub to: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_method_id: Option<Vec<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_id: Option<Vec<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warehouse_id: Option<Vec<i64>>,
}

impl FbsListFilter {
    pub fn period(since: DateTime<Utc>, to: DateTime<Utc>) -> Self {
        Self {
            since: Some(since),
            to: Some(to),
            status: None,
            delivery_method_id: None,
            order_id: None,
            provider_id: None,
            warehouse_id: None,
        }
    }
}

/// Extra response sections for FBS postings.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FbsWith {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analytics_data: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barcodes: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub financial_data: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translit: Option<bool>,
}

/// Parameters for [`OzonSellerClient::posting_fbs_list`].
#[derive(Debug, Clone, Serialize)]
pub struct FbsListRequest {
    pub filter: FbsListFilter,
    pub with: FbsWith,
    /// `ASC` or `DESC`.
    pub dir: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    /// Page size, 1 to 1000.
    pub limit: u32,
}

impl FbsListRequest {
    pub fn new(filter: FbsListFilter) -> Self {
        Self { filter, with: FbsWith::default(), dir: "ASC".to_string(), offset: None, limit: 1000 }
    }
}

/// Extra response sections for a single FBS posting.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FbsGetWith {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analytics_data: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barcodes: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub financial_data: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_exemplars: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_postings: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translit: Option<bool>,
}

/// Cutoff and delivery-date filter for
/// [`OzonSellerClient::posting_fbs_unfulfilled_list`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct FbsUnfulfilledFilter {
    #[serde(with = "serde_opt_date_time", skip_serializing_if = "Option::is_none")]
    pub cutoff_from: Option<DateTime<Utc>>,
    #[serde(with = "serde_opt_date_time", skip_serializing_if = "Option::is_none")]
    pub cutoff_to: Option<DateTime<Utc>>,
    #[serde(with = "serde_opt_date_time", skip_serializing_if = "Option::is_none")]
    pub delivering_date_from: Option<DateTime<Utc>>,
    #[serde(with = "serde_opt_date_time", skip_serializing_if = "Option::is_none")]
    pub delivering_date_to: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_id: Option<Vec<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warehouse_id: Option<Vec<i64>>,
}

/// Parameters for [`OzonSellerClient::posting_fbs_unfulfilled_list`].
#[derive(Debug, Clone, Serialize)]
pub struct FbsUnfulfilledListRequest {
    pub filter: FbsUnfulfilledFilter,
    pub with: FbsWith,
    /// `ASC` or `DESC`.
    pub dir: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    /// Page size, 1 to 1000.
    pub limit: u32,
}

impl Default for FbsUnfulfilledListRequest {
    fn default() -> Self {
        Self {
            filter: FbsUnfulfilledFilter::default(),
            with: FbsWith::default(),
            dir: "ASC".to_string(),
            offset: None,
            limit: 1000,
        }
    }
}

impl OzonSellerClient {
    /// FBO postings for a period: POST `v2/posting/fbo/list`.
    pub async fn posting_fbo_list(&self, request: &FboListRequest) -> Result<Value, OzonError> {
        Ok(self.post_response("v2/posting/fbo/list", request).await?.into_data())
    }

    /// One FBO posting by number: POST `v2/posting/fbo/get`.
    pub async fn posting_fbo_get(&self, request: &FboGetRequest) -> Result<Value, OzonError> {
        Ok(self.post_response("v2/posting/fbo/get", request).await?.into_data())
    }

    /// FBS postings for a period: POST `v3/posting/fbs/list`.
    pub async fn posting_fbs_list(&self, request: &FbsListRequest) -> Result<Value, OzonError> {
        Ok(self.post_response("v3/posting/fbs/list", request).await?.into_data())
    }

    /// One FBS posting by number: POST `v3/posting/fbs/get`.
    pub async fn posting_fbs_get(
        &self,
        posting_number: &str,
        with: &FbsGetWith,
    ) -> Result<Value, OzonError> {
        let body = serde_json::json!({ "posting_number": posting_number, "with": with });
        Ok(self.post_response("v3/posting/fbs/get", &body).await?.into_data())
    }

    /// FBS postings awaiting processing: POST `v3/posting/fbs/unfulfilled/list`.
    pub async fn posting_fbs_unfulfilled_list(
        &self,
        request: &FbsUnfulfilledListRequest,
    ) -> Result<Value, OzonError> {
        Ok(self.post_response("v3/posting/fbs/unfulfilled/list", request).await?.into_data())
    }
}
