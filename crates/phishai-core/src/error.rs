//! Centralized error types for PhishAI.

use std::time::Duration;
use thiserror::Error;

/// Local validation failures, raised before any network I/O.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please provide 'text' or 'url' field with valid content")]
    InvalidInput,

    #[error("Input must be less than {max} characters (got {len})")]
    InputTooLong { len: usize, max: usize },
}

impl ValidationError {
    /// Stable error code reported to callers.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidInput => "invalid_input",
            Self::InputTooLong { .. } => "input_too_long",
        }
    }
}

/// Failures talking to the upstream classification service.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UpstreamError {
    #[error("Connection refused - AI service offline: {0}")]
    Offline(String),

    #[error("Analysis timeout after {0:?}")]
    Timeout(Duration),

    #[error("AI service returned HTTP {status}: {detail}")]
    Status { status: u16, detail: String },

    #[error("Invalid response format from AI service: {0}")]
    MalformedPayload(String),

    #[error("Network error: {0}")]
    Network(String),
}

impl UpstreamError {
    /// Short machine-readable sub-kind of `ai_service_error`.
    pub fn reason(&self) -> &'static str {
        match self {
            Self::Offline(_) => "offline",
            Self::Timeout(_) => "timeout",
            Self::Status { .. } => "upstream_status",
            Self::MalformedPayload(_) => "bad_payload",
            Self::Network(_) => "network",
        }
    }

    /// Upstream HTTP status, when the service answered at all.
    pub fn http_status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Human-readable summary for the `message` field.
    pub fn summary(&self) -> &'static str {
        match self {
            Self::Offline(_) => "Connection refused - AI service offline",
            Self::Timeout(_) => "Analysis timeout",
            _ => "Failed to analyze content",
        }
    }

    /// Debug detail, only ever shown outside production.
    pub fn detail(&self) -> String {
        match self {
            Self::Offline(_) => "Python AI service is not running. Please start it first.".to_string(),
            Self::Timeout(_) => "AI service took too long to respond".to_string(),
            Self::Status { detail, .. } => detail.clone(),
            Self::MalformedPayload(msg) | Self::Network(msg) => msg.clone(),
        }
    }
}

/// Anything `AnalysisProxy::analyze` can fail with.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalyzeError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}

/// Phone number validation failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PhoneError {
    #[error("Phone number is required")]
    Missing,

    #[error("Invalid phone number format: {digits} digits")]
    Invalid { digits: usize },
}

impl PhoneError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Missing => "missing_phone",
            Self::Invalid { .. } => "invalid_phone",
        }
    }
}

/// SMS gateway and alert rendering failures.
#[derive(Error, Debug)]
pub enum SmsError {
    #[error(transparent)]
    Phone(#[from] PhoneError),

    #[error("SMS provider rejected the message (HTTP {status}, code {code:?}): {message}")]
    Provider {
        status: u16,
        code: Option<u32>,
        message: String,
    },

    #[error("SMS transport error: {0}")]
    Transport(String),
}

/// Twilio: "The 'To' number is not a valid phone number".
const PROVIDER_INVALID_NUMBER: u32 = 21211;
/// Twilio: trial accounts may only message verified numbers.
const PROVIDER_UNVERIFIED_NUMBER: u32 = 21608;

impl SmsError {
    /// Message reported to callers for a failed send.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Provider { code: Some(PROVIDER_INVALID_NUMBER), .. } => "Invalid phone number",
            Self::Provider { code: Some(PROVIDER_UNVERIFIED_NUMBER), .. } => {
                "Phone number is not verified (Twilio trial)"
            }
            Self::Phone(PhoneError::Missing) => "Phone number is required",
            Self::Phone(PhoneError::Invalid { .. }) => "Invalid phone number format",
            _ => "Failed to send SMS alert",
        }
    }
}

/// Configuration errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {name}: '{value}' ({reason})")]
    InvalidValue {
        name: &'static str,
        value: String,
        reason: String,
    },
}
