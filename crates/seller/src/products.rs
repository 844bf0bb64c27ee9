//! Product catalog endpoints.

use ozon_core::OzonError;
use serde::Serialize;
use serde_json::{json, Value};

use crate::client::OzonSellerClient;

/// Item filter shared by the price and stock listings.
///
/// `visibility` always goes on the wire; the identifier lists are pruned
/// when absent, which means "all items".
#[derive(Debug, Clone, Serialize)]
pub struct ProductFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offer_id: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<Vec<i64>>,
    pub visibility: String,
}

impl Default for ProductFilter {
    fn default() -> Self {
        Self { offer_id: None, product_id: None, visibility: "ALL".to_string() }
    }
}

/// Parameters for the cursor-paginated listings
/// ([`OzonSellerClient::product_info_prices`] and
/// [`OzonSellerClient::product_info_stocks`]).
#[derive(Debug, Clone, Serialize)]
pub struct ProductPageRequest {
    pub filter: ProductFilter,
    /// Cursor from the previous page; omit on the first request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
    /// Page size, 1 to 1000.
    pub limit: u32,
}

impl Default for ProductPageRequest {
    fn default() -> Self {
        Self { filter: ProductFilter::default(), cursor: None, limit: 1000 }
    }
}

/// Parameters for [`OzonSellerClient::product_info`]. Exactly one identifier
/// must be set.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProductInfoRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offer_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<i64>,
}

/// Parameters for [`OzonSellerClient::product_info_list`]. Pass one kind of
/// identifier, up to 1000 of them.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProductInfoListRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offer_id: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<Vec<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<Vec<i64>>,
}

impl OzonSellerClient {
    /// Create or update products: POST `v2/product/import`.
    ///
    /// `items` follow the import schema; they are passed through verbatim.
    pub async fn product_import(&self, items: &[Value]) -> Result<Value, OzonError> {
        Ok(self.post_response("v2/product/import", &json!({ "items": items })).await?.into_data())
    }

    /// Status of an import task: POST `v1/product/import/info`.
    pub async fn product_import_info(&self, task_id: &str) -> Result<Value, OzonError> {
        Ok(self
            .post_response("v1/product/import/info", &json!({ "task_id": task_id }))
            .await?
            .into_data())
    }

    /// Single item card: POST `v2/product/info`.
    pub async fn product_info(&self, request: &ProductInfoRequest) -> Result<Value, OzonError> {
        Ok(self.post_response("v2/product/info", request).await?.into_data())
    }

    /// Item cards by identifier lists: POST `v3/product/info/list`.
    pub async fn product_info_list(
        &self,
        request: &ProductInfoListRequest,
    ) -> Result<Value, OzonError> {
        Ok(self.post_response("v3/product/info/list", request).await?.into_data())
    }

    /// Prices page: POST `v5/product/info/prices`.
    pub async fn product_info_prices(
        &self,
        request: &ProductPageRequest,
    ) -> Result<Value, OzonError> {
        Ok(self.post_response("v5/product/info/prices", request).await?.into_data())
    }

    /// Stock page: POST `v4/product/info/stocks`.
    pub async fn product_info_stocks(
        &self,
        request: &ProductPageRequest,
    ) -> Result<Value, OzonError> {
        Ok(self.post_response("v4/product/info/stocks", request).await?.into_data())
    }

    /// Content rating per SKU: POST `v1/product/rating-by-sku`.
    pub async fn product_rating_by_sku(&self, skus: &[i64]) -> Result<Value, OzonError> {
        Ok(self.post_response("v1/product/rating-by-sku", &json!({ "skus": skus })).await?
            .into_data())
    }

    /// Condition and defects of discounted items: POST
    /// `v1/product/info/discounted`.
    pub async fn product_discounted_info(
        &self,
        discounted_skus: &[i64],
    ) -> Result<Value, OzonError> {
        Ok(self
            .post_response(
                "v1/product/info/discounted",
                &json!({ "discounted_skus": discounted_skus }),
            )
            .await?
            .into_data())
    }
}
