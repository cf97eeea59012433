//! Analysis domain models.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ValidationError;

/// Maximum accepted input length, in characters.
pub const MAX_INPUT_CHARS: usize = 2000;

/// Inbound scan body as sent by the frontend.
///
/// Both fields stay loosely typed so that a non-string value is reported as
/// `invalid_input` instead of a deserialization failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScanBody {
    #[serde(default)]
    pub text: Option<Value>,
    #[serde(default)]
    pub url: Option<Value>,
}

impl ScanBody {
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(Value::String(text.into())),
            url: None,
        }
    }
}

/// A validated, length-bounded analysis input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    input: String,
}

impl AnalysisRequest {
    /// Pick `text` if it is a non-empty string, else `url`, and bound it.
    pub fn from_body(body: &ScanBody) -> Result<Self, ValidationError> {
        let input = [&body.text, &body.url]
            .into_iter()
            .find_map(|field| match field {
                Some(Value::String(s)) if !s.is_empty() => Some(s.as_str()),
                _ => None,
            })
            .ok_or(ValidationError::InvalidInput)?;

        Self::new(input)
    }

    pub fn new(input: &str) -> Result<Self, ValidationError> {
        if input.is_empty() {
            return Err(ValidationError::InvalidInput);
        }

        let len = input.chars().count();
        if len > MAX_INPUT_CHARS {
            return Err(ValidationError::InputTooLong { len, max: MAX_INPUT_CHARS });
        }

        Ok(Self { input: input.to_string() })
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// First 50 characters, for log lines.
    pub fn preview(&self) -> String {
        self.input.chars().take(50).collect()
    }
}

/// Classifier response as it arrives on the wire.
///
/// Every field is optional and kept as raw JSON; the service has renamed
/// fields across versions, so nothing here is trusted until normalized.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpstreamPayload {
    #[serde(default)]
    pub final_status: Option<Value>,
    #[serde(default)]
    pub ai_result: Option<Value>,
    #[serde(default)]
    pub ai_score: Option<Value>,
    #[serde(default)]
    pub ai_reason: Option<Value>,
    #[serde(default)]
    pub explanation: Option<Value>,
    #[serde(default)]
    pub url: Option<Value>,
    #[serde(default)]
    pub host: Option<Value>,
    #[serde(default)]
    pub google_result: Option<Value>,
    #[serde(default)]
    pub google_details: Option<Value>,
    #[serde(default)]
    pub method: Option<Value>,
    #[serde(default)]
    pub heuristic_score: Option<Value>,
    #[serde(default)]
    pub ml_score: Option<Value>,
}

/// Stable result shape returned to callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub prediction: String,
    pub confidence: f64,
    pub explanation: String,
    pub url: String,
    pub host: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_details: Option<Value>,
    pub method: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heuristic_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ml_score: Option<f64>,
}

impl AnalysisResult {
    /// Whether the verdict calls for a warning.
    pub fn is_threat(&self) -> bool {
        matches!(
            self.prediction.to_lowercase().as_str(),
            "phishing" | "malicious" | "suspicious"
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn body(value: Value) -> ScanBody {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_text_preferred_over_url() {
        let req = AnalysisRequest::from_body(&body(json!({"text": "hello", "url": "http://x.test"}))).unwrap();
        assert_eq!(req.input(), "hello");
    }

    #[test]
    fn test_url_used_when_text_empty() {
        let req = AnalysisRequest::from_body(&body(json!({"text": "", "url": "http://x.test"}))).unwrap();
        assert_eq!(req.input(), "http://x.test");
    }

    #[test]
    fn test_missing_or_non_string_fields_rejected() {
        for value in [json!({}), json!({"text": 42}), json!({"url": ["a"]}), json!({"text": null, "url": false})] {
            assert_eq!(
                AnalysisRequest::from_body(&body(value)),
                Err(ValidationError::InvalidInput)
            );
        }
    }

    #[test]
    fn test_length_bound() {
        let exact = "a".repeat(MAX_INPUT_CHARS);
        assert!(AnalysisRequest::new(&exact).is_ok());

        let long = "a".repeat(MAX_INPUT_CHARS + 1);
        assert_eq!(
            AnalysisRequest::new(&long),
            Err(ValidationError::InputTooLong { len: 2001, max: 2000 })
        );
    }

    #[test]
    fn test_length_counts_characters() {
        let accented = "é".repeat(MAX_INPUT_CHARS);
        assert!(AnalysisRequest::new(&accented).is_ok());
    }

    #[test]
    fn test_preview_truncates() {
        let req = AnalysisRequest::new(&"x".repeat(120)).unwrap();
        assert_eq!(req.preview().len(), 50);
    }

    #[test]
    fn test_optional_fields_omitted() {
        let result = AnalysisResult {
            prediction: "safe".into(),
            confidence: 0.1,
            explanation: "ok".into(),
            url: "http://x.test".into(),
            host: "x.test".into(),
            ai_result: None,
            google_result: None,
            google_details: None,
            method: "ML".into(),
            heuristic_score: None,
            ml_score: Some(0.2),
        };
        let value = serde_json::to_value(&result).unwrap();
        assert!(value.get("ai_result").is_none());
        assert!(value.get("heuristic_score").is_none());
        assert_eq!(value["ml_score"], json!(0.2));
        assert!(!result.is_threat());
    }
}
