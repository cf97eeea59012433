//! SMS alert and phone verification handlers.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use phishai_core::sms::{verify_phone as check_phone, PhoneVerification};
use phishai_core::PhoneNumber;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::error;

use crate::error::ApiError;
use crate::state::AppState;

/// Fields stay loosely typed so one wrongly typed value does not discard
/// the rest of the body.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertRequest {
    #[serde(default)]
    pub phone_number: Option<Value>,
    #[serde(default)]
    pub threat: Option<Value>,
    #[serde(default)]
    pub url: Option<Value>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyPhoneRequest {
    #[serde(default)]
    pub phone_number: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct AlertResponse {
    pub success: bool,
    pub message: &'static str,
    pub sid: String,
    pub to: PhoneNumber,
}

/// How the `phoneNumber` field arrived.
#[derive(Debug, PartialEq, Eq)]
enum PhoneField<'a> {
    Missing,
    Text(&'a str),
    NotText,
}

fn phone_field(value: &Option<Value>) -> PhoneField<'_> {
    match value {
        None | Some(Value::Null) => PhoneField::Missing,
        Some(Value::String(s)) if s.is_empty() => PhoneField::Missing,
        Some(Value::String(s)) => PhoneField::Text(s.as_str()),
        Some(_) => PhoneField::NotText,
    }
}

/// String value of an optional field; anything else counts as absent.
fn text(value: &Option<Value>) -> Option<&str> {
    match value {
        Some(Value::String(s)) => Some(s.as_str()),
        _ => None,
    }
}

/// `POST /api/sms/alert`
pub async fn send_alert(
    State(state): State<AppState>,
    body: Result<Json<AlertRequest>, JsonRejection>,
) -> Result<Json<AlertResponse>, ApiError> {
    let req = body.map(|Json(r)| r).unwrap_or_default();

    let field = phone_field(&req.phone_number);
    if field == PhoneField::Missing {
        return Err(ApiError::missing_phone());
    }
    let alerter = state.alerter.as_ref().ok_or_else(ApiError::sms_not_configured)?;
    let PhoneField::Text(phone) = field else {
        return Err(ApiError::invalid_phone());
    };

    let receipt = alerter
        .send_alert(phone, text(&req.threat), text(&req.url))
        .await
        .map_err(|e| {
            error!(error = %e, "SMS sending failed");
            ApiError::from_sms(&e, state.mode)
        })?;

    Ok(Json(AlertResponse {
        success: true,
        message: "SMS alert sent successfully",
        sid: receipt.sid,
        to: receipt.to,
    }))
}

/// `POST /api/sms/verify-phone`
pub async fn verify_phone(
    body: Result<Json<VerifyPhoneRequest>, JsonRejection>,
) -> Result<Json<PhoneVerification>, ApiError> {
    let req = body.map(|Json(r)| r).unwrap_or_default();
    match phone_field(&req.phone_number) {
        PhoneField::Missing => Err(ApiError::missing_phone()),
        PhoneField::NotText => Ok(Json(PhoneVerification::invalid())),
        PhoneField::Text(phone) => check_phone(phone)
            .map(Json)
            .map_err(|_| ApiError::missing_phone()),
    }
}
