//! Mapping from the classifier wire shape to [`AnalysisResult`].

use serde_json::Value;

use super::model::{AnalysisResult, UpstreamPayload};
use crate::error::UpstreamError;

const UNKNOWN_PREDICTION: &str = "unknown";
const NO_EXPLANATION: &str = "No explanation available";
const UNKNOWN_HOST: &str = "N/A";
const UNKNOWN_METHOD: &str = "Unknown";

/// Normalize a raw classifier response for `input`.
///
/// Fails only when the payload is not a JSON object.
pub fn normalize(payload: Value, input: &str) -> Result<AnalysisResult, UpstreamError> {
    if !payload.is_object() {
        return Err(UpstreamError::MalformedPayload(format!(
            "expected a JSON object, got {}",
            kind_of(&payload)
        )));
    }

    let wire: UpstreamPayload = serde_json::from_value(payload)
        .map_err(|e| UpstreamError::MalformedPayload(e.to_string()))?;

    Ok(from_wire(wire, input))
}

/// Apply the field fallbacks and defaults.
pub fn from_wire(wire: UpstreamPayload, input: &str) -> AnalysisResult {
    let prediction = text(&wire.final_status)
        .or_else(|| text(&wire.ai_result))
        .unwrap_or(UNKNOWN_PREDICTION)
        .to_string();

    let explanation = text(&wire.explanation)
        .or_else(|| text(&wire.ai_reason))
        .unwrap_or(NO_EXPLANATION)
        .to_string();

    AnalysisResult {
        prediction,
        confidence: number(&wire.ai_score).unwrap_or(0.0),
        explanation,
        url: text(&wire.url).unwrap_or(input).to_string(),
        host: text(&wire.host).unwrap_or(UNKNOWN_HOST).to_string(),
        ai_result: present(wire.ai_result),
        google_result: present(wire.google_result),
        google_details: present(wire.google_details),
        method: text(&wire.method).unwrap_or(UNKNOWN_METHOD).to_string(),
        heuristic_score: number(&wire.heuristic_score),
        ml_score: number(&wire.ml_score),
    }
}

fn text(field: &Option<Value>) -> Option<&str> {
    match field {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s.as_str()),
        _ => None,
    }
}

fn number(field: &Option<Value>) -> Option<f64> {
    let parsed: Option<f64> = match field {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    };
    parsed.filter(|n| n.is_finite())
}

fn present(field: Option<Value>) -> Option<Value> {
    field.filter(|v| !v.is_null())
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
