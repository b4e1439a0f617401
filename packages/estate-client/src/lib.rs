//! Pure REST client for the estate back-office property API.
//!
//! A minimal client for the administrative API that owns the property
//! catalog. Supports listing records with arbitrary filter parameters and
//! fetching a single record by id.
//!
//! # Example
//!
//! ```rust,ignore
//! use estate_client::EstateClient;
//!
//! let client = EstateClient::new("https://admin.example.am/api".into());
//!
//! let params = vec![("propertyType".to_string(), "apartment".to_string())];
//! let records = client.list_properties(&params).await?;
//! for record in &records {
//!     println!("{}", record.title.as_deref().unwrap_or("(untitled)"));
//! }
//! ```

pub mod error;
pub mod types;

pub use error::{EstateApiError, Result};
pub use types::{ApiEnvelope, RawProperty};

use std::time::Duration;

use serde_json::Value;

/// Default per-request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

pub struct EstateClient {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl EstateClient {
    pub fn new(base_url: String) -> Self {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// Create a client with a custom per-request timeout.
    pub fn with_timeout(base_url: String, timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
        }
    }

    /// Fetch property records matching the given filter parameters.
    ///
    /// Parameters are sent as flat key/value query pairs; list-valued
    /// filters repeat their key. Malformed individual records are skipped
    /// rather than failing the whole batch.
    pub async fn list_properties(&self, params: &[(String, String)]) -> Result<Vec<RawProperty>> {
        let url = format!("{}/properties", self.base_url);
        tracing::debug!(param_count = params.len(), "Requesting property list");

        let resp = self
            .client
            .get(&url)
            .query(params)
            .timeout(self.timeout)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(EstateApiError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body: Value = resp.json().await?;
        let records = decode_records(body)?;
        tracing::info!(count = records.len(), "Fetched property records");
        Ok(records)
    }

    /// Fetch a single property record by id.
    pub async fn get_property(&self, id: i64) -> Result<RawProperty> {
        let url = format!("{}/properties/{}", self.base_url, id);
        let resp = self.client.get(&url).timeout(self.timeout).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(EstateApiError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body: Value = resp.json().await?;
        // Single-record endpoints wrap in { "data": ... }, list ones don't.
        let record = if body.get("data").is_some() {
            let envelope: ApiEnvelope<RawProperty> = serde_json::from_value(body)
                .map_err(|e| EstateApiError::Parse(e.to_string()))?;
            envelope.data
        } else {
            serde_json::from_value(body).map_err(|e| EstateApiError::Parse(e.to_string()))?
        };
        Ok(record)
    }
}

/// Decode a list payload leniently.
///
/// Accepts either a bare JSON array or a `{ "data": [...] }` envelope.
/// Elements that fail to deserialize are dropped with a warning so one bad
/// row in the admin panel cannot blank the whole listing page.
fn decode_records(body: Value) -> Result<Vec<RawProperty>> {
    let items = match body {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("data") {
            Some(Value::Array(items)) => items,
            _ => {
                return Err(EstateApiError::Parse(
                    "expected a JSON array of property records".to_string(),
                ))
            }
        },
        _ => {
            return Err(EstateApiError::Parse(
                "expected a JSON array of property records".to_string(),
            ))
        }
    };

    let mut records = Vec::with_capacity(items.len());
    let mut skipped = 0usize;
    for item in items {
        match serde_json::from_value::<RawProperty>(item) {
            Ok(record) => records.push(record),
            Err(err) => {
                skipped += 1;
                tracing::warn!(%err, "Skipping malformed property record");
            }
        }
    }
    if skipped > 0 {
        tracing::warn!(skipped, kept = records.len(), "Dropped malformed records from batch");
    }
    Ok(records)
}
