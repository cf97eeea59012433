//! Liveness endpoints.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub environment: &'static str,
    pub sms_configured: bool,
    pub ai_service: &'static str,
    pub timestamp: String,
}

/// `GET /`
pub async fn root() -> &'static str {
    "PhishAI backend running..."
}

/// `GET /api/health`
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let ai_online = state.proxy.classifier().health_check().await;

    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        environment: state.mode.as_str(),
        sms_configured: state.alerter.is_some(),
        ai_service: if ai_online { "online" } else { "offline" },
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

#[cfg(test)]
mod tests {
    use crate::test_support::{get, state_with_upstream};
    use axum::http::StatusCode;
    use phishai_core::RuntimeMode;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_root_text() {
        let state = state_with_upstream("http://127.0.0.1:9", RuntimeMode::Development);
        let (status, body) = get(state, "/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "PhishAI backend running...");
    }

    #[tokio::test]
    async fn test_health_reports_ai_service() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "running"})))
            .mount(&server)
            .await;

        let state = state_with_upstream(&server.uri(), RuntimeMode::Production);
        let (status, body) = get(state, "/api/health").await;
        assert_eq!(status, StatusCode::OK);

        let body: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["environment"], "production");
        assert_eq!(body["ai_service"], "online");
        assert_eq!(body["sms_configured"], false);
    }
}
