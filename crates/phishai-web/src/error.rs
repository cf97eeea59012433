//! JSON error responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use phishai_core::{AnalyzeError, PhoneError, RuntimeMode, SmsError};
use serde::Serialize;
use std::any::Any;
use tracing::error;

/// Body of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_status: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// An error ready to be sent to the client.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub body: ErrorBody,
}

impl ApiError {
    pub fn new(status: StatusCode, error: &'static str, message: impl Into<String>) -> Self {
        Self {
            status,
            body: ErrorBody {
                error,
                message: message.into(),
                reason: None,
                http_status: None,
                details: None,
            },
        }
    }

    pub fn missing_phone() -> Self {
        Self::new(StatusCode::BAD_REQUEST, "missing_phone", "Phone number is required")
    }

    pub fn invalid_phone() -> Self {
        Self::new(StatusCode::BAD_REQUEST, "invalid_phone", "Invalid phone number format")
    }

    pub fn sms_not_configured() -> Self {
        Self::new(
            StatusCode::SERVICE_UNAVAILABLE,
            "sms_not_configured",
            "SMS service is not configured",
        )
    }

    /// Map an analysis failure; details are dropped in production.
    pub fn from_analyze(err: &AnalyzeError, mode: RuntimeMode) -> Self {
        match err {
            AnalyzeError::Validation(e) => Self::new(StatusCode::BAD_REQUEST, e.code(), e.to_string()),
            AnalyzeError::Upstream(e) => {
                let status = match e {
                    phishai_core::UpstreamError::Offline(_) => StatusCode::SERVICE_UNAVAILABLE,
                    _ => StatusCode::INTERNAL_SERVER_ERROR,
                };
                let mut api = Self::new(status, "ai_service_error", e.summary());
                api.body.reason = Some(e.reason());
                api.body.http_status = e.http_status();
                if mode.exposes_details() {
                    api.body.details = Some(e.detail());
                }
                api
            }
        }
    }

    /// Map an SMS failure; details only in development.
    pub fn from_sms(err: &SmsError, mode: RuntimeMode) -> Self {
        match err {
            SmsError::Phone(PhoneError::Missing) => Self::missing_phone(),
            SmsError::Phone(e @ PhoneError::Invalid { .. }) => {
                Self::new(StatusCode::BAD_REQUEST, e.code(), err.user_message())
            }
            _ => {
                let mut api = Self::new(StatusCode::INTERNAL_SERVER_ERROR, "sms_failed", err.user_message());
                if mode.is_development() {
                    api.body.details = Some(err.to_string());
                }
                api
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

/// Response for a handler that panicked. The panic message is only logged.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let message = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    error!(panic = message, "Handler panicked");

    ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "internal_error", "Internal server error").into_response()
}
