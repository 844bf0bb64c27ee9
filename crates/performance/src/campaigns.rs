//! Campaign endpoints.

use ozon_core::{OzonError, Query};
use serde_json::Value;

use crate::client::OzonPerformanceClient;

/// Filter for [`OzonPerformanceClient::campaigns`].
#[derive(Debug, Default, Clone)]
pub struct CampaignFilter {
    /// Restrict to these campaign identifiers; empty means all.
    pub campaign_ids: Vec<u64>,
    /// Advertised object type, e.g. `SKU`.
    pub adv_object_type: Option<String>,
    /// Campaign state, e.g. `CAMPAIGN_STATE_RUNNING`.
    pub state: Option<String>,
}

impl OzonPerformanceClient {
    /// Campaign list: GET `api/client/campaign`.
    pub async fn campaigns(&self, filter: &CampaignFilter) -> Result<Value, OzonError> {
        let query = Query::new()
            .push_all("campaign_ids", filter.campaign_ids.iter())
            .push_opt("adv_object_type", filter.adv_object_type.as_deref())
            .push_opt("state", filter.state.as_deref());

        Ok(self.get_response("api/client/campaign", &query).await?.into_data())
    }

    /// Advertised objects of one campaign: GET
    /// `api/client/campaign/{campaign_id}/objects`.
    pub async fn campaign_objects(&self, campaign_id: u64) -> Result<Value, OzonError> {
        let path = format!("api/client/campaign/{campaign_id}/objects");
        Ok(self.get_response(&path, &Query::new()).await?.into_data())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::client::PerformanceConfig;
    use crate::credentials::PerformanceCredentials;

    async fn client_for(server: &MockServer) -> OzonPerformanceClient {
        Mock::given(method("POST"))
            .and(path("/api/client/token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": "tok",
                "expires_in": 600,
            })))
            .mount(server)
            .await;

        let config = PerformanceConfig {
            base_url: format!("{}/", server.uri()),
            ..PerformanceConfig::default()
        };
        OzonPerformanceClient::with_config(PerformanceCredentials::new("c1", "s1"), config)
            .expect("client")
    }

    #[tokio::test]
    async fn campaigns_encodes_repeated_ids_and_prunes_absent_fields() {
        let server = MockServer::start().await;
        let client = client_for(&server).await;

        Mock::given(method("GET"))
            .and(path("/api/client/campaign"))
            .and(query_param("campaign_ids", "1"))
            .and(query_param("state", "CAMPAIGN_STATE_RUNNING"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"list": [{"id": "1"}]})))
            .expect(1)
            .mount(&server)
            .await;

        let filter = CampaignFilter {
            campaign_ids: vec![1, 2],
            adv_object_type: None,
            state: Some("CAMPAIGN_STATE_RUNNING".to_string()),
        };
        let data = client.campaigns(&filter).await.expect("campaigns");

        assert_eq!(data, json!({"list": [{"id": "1"}]}));

        let request = &server.received_requests().await.unwrap()[1];
        let raw_query = request.url.query().unwrap();
        assert!(raw_query.contains("campaign_ids=1&campaign_ids=2"));
        assert!(!raw_query.contains("adv_object_type"));
    }

    #[tokio::test]
    async fn campaign_objects_interpolates_the_id_into_the_path() {
        let server = MockServer::start().await;
        let client = client_for(&server).await;

        Mock::given(method("GET"))
            .and(path("/api/client/campaign/42/objects"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"list": []})))
            .expect(1)
            .mount(&server)
            .await;

        let data = client.campaign_objects(42).await.expect("objects");
        assert_eq!(data, json!({"list": []}));
    }
}
