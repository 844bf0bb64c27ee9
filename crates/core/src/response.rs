//! The uniform `{status, data}` response envelope.

use reqwest::Response;
use serde_json::{Map, Value};

use crate::error::OzonError;

/// Decoded response envelope returned by the request primitives.
///
/// `status` is the upstream HTTP status; `data` is the decoded body. The
/// envelope never interprets business-level errors: what the server returned
/// is what the caller gets.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    /// Upstream HTTP status code.
    pub status: u16,
    /// Decoded response body.
    pub data: Value,
}

impl ApiResponse {
    /// Decode a JSON response body. An empty body decodes to `Value::Null`.
    pub async fn from_json(response: Response) -> Result<Self, OzonError> {
        let status = response.status().as_u16();
        let body = response.text().await?;

        let data = if body.is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&body)
                .map_err(|err| OzonError::Decode(format!("invalid JSON body: {err}")))?
        };

        Ok(Self { status, data })
    }

    /// Decode a `;`-delimited CSV body with a header row into an array of
    /// objects keyed by column name. An empty body decodes to an empty array.
    pub async fn from_csv(response: Response) -> Result<Self, OzonError> {
        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(Self { status, data: csv_to_json(&body)? })
    }

    /// Consume the envelope, keeping only the decoded body.
    pub fn into_data(self) -> Value {
        self.data
    }
}

fn csv_to_json(body: &str) -> Result<Value, OzonError> {
    if body.trim().is_empty() {
        return Ok(Value::Array(Vec::new()));
    }

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b';')
        .flexible(true)
        .from_reader(body.as_bytes());

    let headers = reader
        .headers()
        .map_err(|err| OzonError::Decode(format!("invalid CSV header: {err}")))?
        .clone();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|err| OzonError::Decode(format!("invalid CSV row: {err}")))?;
        let mut row = Map::new();
        for (header, field) in headers.iter().zip(record.iter()) {
            row.insert(header.to_string(), Value::String(field.to_string()));
        }
        rows.push(Value::Object(row));
    }

    Ok(Value::Array(rows))
}
