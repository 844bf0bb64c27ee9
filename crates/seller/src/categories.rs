//! Category tree and attribute endpoints.

use ozon_core::OzonError;
use serde::Serialize;
use serde_json::Value;

use crate::client::OzonSellerClient;

/// Parameters for [`OzonSellerClient::category_tree`].
#[derive(Debug, Clone, Serialize)]
pub struct CategoryTreeRequest {
    /// Subtree root; omit for the whole tree.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
    /// Response language: `DEFAULT`, `RU`, `EN` or `TR`.
    pub language: String,
}

impl Default for CategoryTreeRequest {
    fn default() -> Self {
        Self { category_id: None, language: "DEFAULT".to_string() }
    }
}

/// Parameters for [`OzonSellerClient::category_attributes`].
///
/// At most 20 category identifiers per request.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryAttributesRequest {
    pub attribute_type: String,
    pub category_id: Vec<i64>,
    pub language: String,
}

impl CategoryAttributesRequest {
    pub fn new(category_id: Vec<i64>) -> Self {
        Self { attribute_type: "ALL".to_string(), category_id, language: "DEFAULT".to_string() }
    }
}

/// Parameters for [`OzonSellerClient::category_attribute_values`].
#[derive(Debug, Clone, Serialize)]
pub struct CategoryAttributeValuesRequest {
    pub attribute_id: i64,
    pub category_id: i64,
    pub language: String,
    /// Dictionary value to resume after; omit on the first page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_value_id: Option<i64>,
    /// Page size, 1 to 5000.
    pub limit: u32,
}

impl CategoryAttributeValuesRequest {
    pub fn new(attribute_id: i64, category_id: i64) -> Self {
        Self {
            attribute_id,
            category_id,
            language: "DEFAULT".to_string(),
            last_value_id: None,
            limit: 5000,
        }
    }
}

impl OzonSellerClient {
    /// Category and type tree: POST `v1/description-category/tree`.
    pub async fn category_tree(&self, request: &CategoryTreeRequest) -> Result<Value, OzonError> {
        Ok(self.post_response("v1/description-category/tree", request).await?.into_data())
    }

    /// Attributes of the given categories: POST `v3/category/attribute`.
    pub async fn category_attributes(
        &self,
        request: &CategoryAttributesRequest,
    ) -> Result<Value, OzonError> {
        Ok(self.post_response("v3/category/attribute", request).await?.into_data())
    }

    /// Dictionary values of one attribute: POST `v2/category/attribute/values`.
    pub async fn category_attribute_values(
        &self,
        request: &CategoryAttributeValuesRequest,
    ) -> Result<Value, OzonError> {
        Ok(self.post_response("v2/category/attribute/values", request).await?.into_data())
    }
}
