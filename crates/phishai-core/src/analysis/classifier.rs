//! HTTP client for the external classification service.

use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

use crate::error::UpstreamError;

/// Default classifier endpoint.
pub const DEFAULT_AI_URL: &str = "http://127.0.0.1:8000/predict";

const HEALTH_TIMEOUT: Duration = Duration::from_secs(3);

/// Client for `POST {endpoint}` with `{ "text": ... }`.
#[derive(Clone)]
pub struct ClassifierClient {
    endpoint: String,
    client: reqwest::Client,
}

#[derive(Serialize)]
struct PredictRequest<'a> {
    text: &'a str,
}

impl ClassifierClient {
    /// Create a client for the given predict endpoint.
    ///
    /// No client-level timeout is set; the retry policy bounds each attempt.
    pub fn new(endpoint: &str) -> Self {
        Self {
            endpoint: endpoint.to_string(),
            client: reqwest::Client::new(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Send one prediction request and return the raw JSON body.
    pub async fn predict(&self, text: &str) -> Result<Value, UpstreamError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&PredictRequest { text })
            .send()
            .await
            .map_err(classify_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                detail: status_detail(status, &body),
            });
        }

        let bytes = response.bytes().await.map_err(classify_transport_error)?;
        debug!(size = bytes.len(), "Received classifier response");

        serde_json::from_slice(&bytes).map_err(|e| UpstreamError::MalformedPayload(e.to_string()))
    }

    /// Check whether the service root answers at all.
    pub async fn health_check(&self) -> bool {
        let Ok(mut root) = reqwest::Url::parse(&self.endpoint) else {
            return false;
        };
        root.set_path("/");
        root.set_query(None);

        match self.client.get(root).timeout(HEALTH_TIMEOUT).send().await {
            Ok(resp) => resp.status().is_success(),
            Err(e) => {
                debug!(error = %e, "Classifier health check failed");
                false
            }
        }
    }
}

fn classify_transport_error(e: reqwest::Error) -> UpstreamError {
    if e.is_connect() {
        UpstreamError::Offline(e.to_string())
    } else {
        UpstreamError::Network(e.to_string())
    }
}

/// Prefer the service's own `message`, else the canonical status text.
fn status_detail(status: reqwest::StatusCode, body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(Value::as_str).map(str::to_string))
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("Unknown status").to_string())
}
