//! Shared helpers for router tests.

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use phishai_core::analysis::{AnalysisProxy, ClassifierClient};
use phishai_core::{PhoneNumber, RetryPolicy, RuntimeMode, SmsAlerter, SmsError, SmsGateway, SmsReceipt};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tower::ServiceExt;

use crate::{create_router, AppState};

/// Proxy pointed at `{base}/predict` with a short retry policy.
pub fn state_with_upstream(base: &str, mode: RuntimeMode) -> AppState {
    let policy = RetryPolicy {
        attempt_timeout: Duration::from_millis(500),
        backoff: Duration::from_millis(20),
        ..RetryPolicy::default()
    };
    let proxy = AnalysisProxy::with_policy(ClassifierClient::new(&format!("{}/predict", base)), policy);
    AppState::new(proxy, None, mode)
}

pub fn state_with_gateway(gateway: Arc<FakeGateway>, mode: RuntimeMode) -> AppState {
    let proxy = AnalysisProxy::new(ClassifierClient::new("http://127.0.0.1:9/predict"));
    AppState::new(proxy, Some(SmsAlerter::new(gateway)), mode)
}

pub async fn post_json(state: AppState, uri: &str, body: serde_json::Value) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = create_router(state).oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

pub async fn get(state: AppState, uri: &str) -> (StatusCode, String) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();

    let response = create_router(state).oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

/// In-memory gateway that records what it was asked to send.
pub struct FakeGateway {
    reject_code: Option<u32>,
    sid: String,
    sent: Mutex<Vec<(String, String)>>,
}

impl FakeGateway {
    pub fn accepting(sid: &str) -> Self {
        Self { reject_code: None, sid: sid.to_string(), sent: Mutex::new(Vec::new()) }
    }

    pub fn rejecting(code: u32) -> Self {
        Self { reject_code: Some(code), sid: String::new(), sent: Mutex::new(Vec::new()) }
    }

    pub fn sent(&self) -> Vec<(String, String)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl SmsGateway for FakeGateway {
    async fn send(&self, to: &PhoneNumber, body: &str) -> Result<SmsReceipt, SmsError> {
        if let Some(code) = self.reject_code {
            return Err(SmsError::Provider { status: 400, code: Some(code), message: "rejected".into() });
        }
        self.sent.lock().unwrap().push((to.to_string(), body.to_string()));
        Ok(SmsReceipt { sid: self.sid.clone(), to: to.clone() })
    }
}
