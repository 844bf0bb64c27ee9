//! End-to-end tests for the performance client against a mock server.

use std::sync::Arc;

use ozon_core::HttpClient;
use ozon_performance::campaigns::CampaignFilter;
use ozon_performance::{
    OzonPerformanceClient, PerformanceConfig, PerformanceCredentials, TokenCache,
};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(server: &MockServer) -> PerformanceConfig {
    PerformanceConfig { base_url: format!("{}/", server.uri()), ..PerformanceConfig::default() }
}

async fn mount_token(server: &MockServer, client_id: &str, token: &str, expires_in: u64) {
    Mock::given(method("POST"))
        .and(path("/api/client/token"))
        .and(body_partial_json(json!({"client_id": client_id})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": token,
            "expires_in": expires_in,
        })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn token_is_fetched_once_and_reused_across_calls() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/client/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "tok-1",
            "expires_in": 600,
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/client/campaign"))
        .and(header("Authorization", "Bearer tok-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"list": []})))
        .expect(3)
        .mount(&server)
        .await;

    let client =
        OzonPerformanceClient::with_config(PerformanceCredentials::new("c1", "s1"), config_for(&server))
            .expect("client");

    for _ in 0..3 {
        client.campaigns(&CampaignFilter::default()).await.expect("campaigns");
    }
}

#[tokio::test]
async fn an_expired_token_is_replaced_before_the_next_request() {
    let server = MockServer::start().await;
    // a zero-second lifetime means every business call re-authenticates
    Mock::given(method("POST"))
        .and(path("/api/client/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "tok",
            "expires_in": 0,
        })))
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/client/campaign"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"list": []})))
        .expect(2)
        .mount(&server)
        .await;

    let client =
        OzonPerformanceClient::with_config(PerformanceCredentials::new("c1", "s1"), config_for(&server))
            .expect("client");

    client.campaigns(&CampaignFilter::default()).await.expect("first");
    client.campaigns(&CampaignFilter::default()).await.expect("second");
}

#[tokio::test]
async fn tenants_sharing_a_registry_keep_isolated_tokens() {
    let server = MockServer::start().await;
    mount_token(&server, "tenant-a", "tok-a", 600).await;
    mount_token(&server, "tenant-b", "tok-b", 600).await;
    Mock::given(method("GET"))
        .and(path("/api/client/campaign"))
        .and(header("Authorization", "Bearer tok-a"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"tenant": "a"})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/client/campaign"))
        .and(header("Authorization", "Bearer tok-b"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"tenant": "b"})))
        .mount(&server)
        .await;

    let config = config_for(&server);
    let registry = Arc::new(TokenCache::new(HttpClient::new().expect("http"), &config.base_url));

    let client_a = OzonPerformanceClient::with_token_cache(
        PerformanceCredentials::new("tenant-a", "secret-a"),
        config.clone(),
        Arc::clone(&registry),
    )
    .expect("client a");
    let client_b = OzonPerformanceClient::with_token_cache(
        PerformanceCredentials::new("tenant-b", "secret-b"),
        config,
        Arc::clone(&registry),
    )
    .expect("client b");

    let data_a = client_a.campaigns(&CampaignFilter::default()).await.expect("a");
    let data_b = client_b.campaigns(&CampaignFilter::default()).await.expect("b");

    assert_eq!(data_a, json!({"tenant": "a"}));
    assert_eq!(data_b, json!({"tenant": "b"}));

    // evicting one tenant leaves the other's entry alone
    registry.forget(&PerformanceCredentials::new("tenant-a", "secret-a"));
    let data_b_again = client_b.campaigns(&CampaignFilter::default()).await.expect("b again");
    assert_eq!(data_b_again, json!({"tenant": "b"}));

    let token_requests = server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .filter(|r| r.url.path() == "/api/client/token")
        .count();
    assert_eq!(token_requests, 2);
}
