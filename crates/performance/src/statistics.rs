//! Statistics endpoints.

use chrono::NaiveDate;
use ozon_core::dates::format_date;
use ozon_core::{OzonError, Query};
use serde_json::{json, Value};

use crate::client::OzonPerformanceClient;

/// Filter for [`OzonPerformanceClient::expense_statistics`].
#[derive(Debug, Default, Clone)]
pub struct ExpenseStatisticsFilter {
    /// Restrict the report to one campaign.
    pub campaigns: Option<u64>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
}

impl OzonPerformanceClient {
    /// Daily campaign spend: GET `api/client/statistics/expense`.
    ///
    /// The server answers with a `;`-delimited CSV export; rows come back as
    /// an array of objects keyed by column header.
    pub async fn expense_statistics(
        &self,
        filter: &ExpenseStatisticsFilter,
    ) -> Result<Value, OzonError> {
        let query = Query::new()
            .push_opt("campaigns", filter.campaigns)
            .push_opt("dateFrom", filter.date_from.map(format_date))
            .push_opt("dateTo", filter.date_to.map(format_date));

        Ok(self.get_response_csv("api/client/statistics/expense", &query).await?.into_data())
    }

    /// Vendor performance totals: POST `api/client/vendors/statistics`.
    pub async fn vendor_statistics(
        &self,
        date_from: NaiveDate,
        date_to: NaiveDate,
        statistics_type: &str,
    ) -> Result<Value, OzonError> {
        let body = json!({
            "dateFrom": format_date(date_from),
            "dateTo": format_date(date_to),
            "type": statistics_type,
        });

        Ok(self.post_response("api/client/vendors/statistics", &body).await?.into_data())
    }
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{body_json, method, path, query_param};
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
    async fn expense_statistics_decodes_the_csv_export() {
        let server = MockServer::start().await;
        let client = client_for(&server).await;

        Mock::given(method("GET"))
            .and(path("/api/client/statistics/expense"))
            .and(query_param("dateFrom", "2024-03-01"))
            .and(query_param("dateTo", "2024-03-07"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string("ID;Расход\n101;12.50\n102;3.00\n")
                    .insert_header("Content-Type", "text/csv"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let filter = ExpenseStatisticsFilter {
            campaigns: None,
            date_from: NaiveDate::from_ymd_opt(2024, 3, 1),
            date_to: NaiveDate::from_ymd_opt(2024, 3, 7),
        };
        let data = client.expense_statistics(&filter).await.expect("report");

        assert_eq!(
            data,
            json!([
                {"ID": "101", "Расход": "12.50"},
                {"ID": "102", "Расход": "3.00"},
            ])
        );
    }

    #[tokio::test]
    async fn vendor_statistics_posts_formatted_dates() {
        let server = MockServer::start().await;
        let client = client_for(&server).await;

        Mock::given(method("POST"))
            .and(path("/api/client/vendors/statistics"))
            .and(body_json(json!({
                "dateFrom": "2024-03-01",
                "dateTo": "2024-03-07",
                "type": "TRAFFIC_SOURCES",
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"UUID": "abc"})))
            .expect(1)
            .mount(&server)
            .await;

        let data = client
            .vendor_statistics(
                NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
                NaiveDate::from_ymd_opt(2024, 3, 7).unwrap(),
                "TRAFFIC_SOURCES",
            )
            .await
            .expect("statistics");

        assert_eq!(data, json!({"UUID": "abc"}));
    }
}
