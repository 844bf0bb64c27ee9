//! Finance and accounting endpoints.

use chrono::{DateTime, Utc};
use ozon_core::dates::serde_date_time;
use ozon_core::OzonError;
use serde::Serialize;
use serde_json::{json, Value};

use crate::client::OzonSellerClient;

/// Inclusive accrual period.
#[derive(Debug, Clone, Serialize)]
pub struct DateRange {
    #[serde(with = "serde_date_time")]
    pub from: DateTime<Utc>,
    #[serde(with = "serde_date_time")]
    pub to: DateTime<Utc>,
}

/// Filter for [`OzonSellerClient::finance_transaction_list`].
#[derive(Debug, Clone, Serialize)]
pub struct TransactionFilter {
    pub date: DateRange,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_type: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub posting_number: Option<String>,
    /// `all`, `orders`, `returns`, `services`, `compensation`,
    /// `transferDelivery` or `other`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_type: Option<String>,
}

impl TransactionFilter {
    pub fn period(from: DateTime<Utc>, to: DateTime<Utc>) -> Self {
        Self {
            date: DateRange { from, to },
            operation_type: None,
            posting_number: None,
            transaction_type: None,
        }
    }
}

/// Parameters for [`OzonSellerClient::finance_transaction_list`].
#[derive(Debug, Clone, Serialize)]
pub struct TransactionListRequest {
    pub filter: TransactionFilter,
    pub page: u32,
    pub page_size: u32,
}

impl TransactionListRequest {
    pub fn new(filter: TransactionFilter) -> Self {
        Self { filter, page: 1, page_size: 1000 }
    }
}

/// Parameters for [`OzonSellerClient::finance_transaction_totals`].
#[derive(Debug, Clone, Serialize)]
pub struct TransactionTotalsRequest {
    pub date: DateRange,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub posting_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_type: Option<String>,
}

impl OzonSellerClient {
    /// Transaction log page: POST `v3/finance/transaction/list`.
    pub async fn finance_transaction_list(
        &self,
        request: &TransactionListRequest,
    ) -> Result<Value, OzonError> {
        Ok(self.post_response("v3/finance/transaction/list", request).await?.into_data())
    }

    /// Per-type totals for a period: POST `v3/finance/transaction/totals`.
    pub async fn finance_transaction_totals(
        &self,
        request: &TransactionTotalsRequest,
    ) -> Result<Value, OzonError> {
        Ok(self.post_response("v3/finance/transaction/totals", request).await?.into_data())
    }

    /// Monthly sales realization report: POST `v2/finance/realization`.
    pub async fn finance_realization_report(
        &self,
        month: u32,
        year: i32,
    ) -> Result<Value, OzonError> {
        Ok(self
            .post_response("v2/finance/realization", &json!({ "month": month, "year": year }))
            .await?
            .into_data())
    }
}
