use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::client::error::ApiError;
use crate::client::types::{Airport, Envelope, PredictionRequest, PredictionResponse};
use crate::config::ApiConfig;

/// Typed client for the flight-delay prediction service.
///
/// Wraps a connection-pooled [`reqwest::Client`] with the configured base
/// address and a fixed request timeout. Every response is expected to carry
/// the uniform [`Envelope`]; unwrapping it is the client's job, so callers
/// only ever see payloads or [`ApiError`].
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds.into()))
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds.into()))
            .default_headers(headers)
            .build()
            .expect("failed to build http client");

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Fetch the full airport list.
    pub async fn list_airports(&self) -> Result<Vec<Airport>, ApiError> {
        tracing::debug!("fetching airport list");
        let resp = self.client.get(self.endpoint("/airports")).send().await?;
        unwrap_envelope(resp, "Failed to fetch airports").await
    }

    /// Fetch the `limit` busiest airports by flight volume.
    pub async fn top_airports(&self, limit: usize) -> Result<Vec<Airport>, ApiError> {
        tracing::debug!(limit, "fetching top airports");
        let resp = self
            .client
            .get(self.endpoint("/airports/top"))
            .query(&[("limit", limit)])
            .send()
            .await?;
        unwrap_envelope(resp, "Failed to fetch top airports").await
    }

    /// Search airports by free-text query. The query is URL-encoded here;
    /// minimum-length rules belong to the store, not the client.
    pub async fn search_airports(&self, query: &str) -> Result<Vec<Airport>, ApiError> {
        tracing::debug!(query, "searching airports");
        let resp = self
            .client
            .get(self.endpoint("/airports/search"))
            .query(&[("q", query)])
            .send()
            .await?;
        unwrap_envelope(resp, "Failed to search airports").await
    }

    /// Submit one prediction request. Exactly one POST, no retry.
    pub async fn submit_prediction(
        &self,
        request: &PredictionRequest,
    ) -> Result<PredictionResponse, ApiError> {
        tracing::debug!(airport_id = request.airport_id, date = %request.date, "submitting prediction");
        let resp = self
            .client
            .post(self.endpoint("/predict"))
            .json(request)
            .send()
            .await?;
        unwrap_envelope(resp, "Failed to get prediction").await
    }

    /// Probe service health. Never errors: any transport or HTTP failure is
    /// reported as `false`, which makes this safe to call from a poll loop.
    pub async fn health_check(&self) -> bool {
        let resp = match self.client.get(self.endpoint("/health")).send().await {
            Ok(resp) => resp,
            Err(err) => {
                tracing::debug!(error = %err, "health check transport failure");
                return false;
            }
        };

        if !resp.status().is_success() {
            return false;
        }

        match resp.json::<Envelope<serde_json::Value>>().await {
            Ok(envelope) => envelope.success,
            Err(err) => {
                tracing::debug!(error = %err, "health check returned unparseable body");
                false
            }
        }
    }
}

/// Unwrap the uniform envelope: HTTP error statuses and `success: false`
/// both fail, and a successful envelope must actually carry a payload.
async fn unwrap_envelope<T: DeserializeOwned>(
    resp: Response,
    fallback: &str,
) -> Result<T, ApiError> {
    let status = resp.status();
    if !status.is_success() {
        return Err(ApiError::Status { status });
    }

    let envelope: Envelope<T> = resp.json().await?;
    if !envelope.success {
        return Err(ApiError::Api {
            message: envelope.error.unwrap_or_else(|| fallback.to_string()),
        });
    }

    envelope.data.ok_or_else(|| ApiError::Malformed {
        reason: "success response with no payload".to_string(),
    })
}
