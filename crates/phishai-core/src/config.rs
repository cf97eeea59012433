//! Environment-driven configuration.

use serde::Serialize;
use tracing::{debug, warn};

use crate::analysis::DEFAULT_AI_URL;
use crate::error::ConfigError;

/// Default listen port.
pub const DEFAULT_PORT: u16 = 5000;

/// Default bind address.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default SMS provider API base.
pub const DEFAULT_TWILIO_API_BASE: &str = "https://api.twilio.com";

/// Runtime mode; production hides error details from callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RuntimeMode {
    Production,
    Development,
    Other,
}

impl RuntimeMode {
    /// Parse a `NODE_ENV`-style value. Unset means development.
    pub fn from_value(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_lowercase()).as_deref() {
            None | Some("") | Some("development") | Some("dev") => Self::Development,
            Some("production") | Some("prod") => Self::Production,
            Some(_) => Self::Other,
        }
    }

    /// Whether underlying error details may be returned to callers.
    pub fn exposes_details(&self) -> bool {
        !matches!(self, Self::Production)
    }

    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Production => "production",
            Self::Development => "development",
            Self::Other => "other",
        }
    }
}

/// Credentials for the SMS provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmsCredentials {
    pub account_sid: String,
    pub auth_token: String,
    pub from_number: String,
    pub api_base: String,
}

/// Backend configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub ai_url: String,
    pub host: String,
    pub port: u16,
    pub mode: RuntimeMode,
    /// `None` when any credential is missing.
    pub sms: Option<SmsCredentials>,
}

impl Config {
    /// Load from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load through an arbitrary variable lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let port = match get("PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|e| ConfigError::InvalidValue {
                name: "PORT",
                value: raw.clone(),
                reason: e.to_string(),
            })?,
            None => DEFAULT_PORT,
        };

        let mode_value = get("PHISHAI_ENV").or_else(|| get("NODE_ENV"));
        let mode = RuntimeMode::from_value(mode_value.as_deref());

        let sms = match (
            get("TWILIO_ACCOUNT_SID"),
            get("TWILIO_AUTH_TOKEN"),
            get("TWILIO_PHONE_NUMBER"),
        ) {
            (Some(account_sid), Some(auth_token), Some(from_number)) => Some(SmsCredentials {
                account_sid,
                auth_token,
                from_number,
                api_base: get("TWILIO_API_BASE").unwrap_or_else(|| DEFAULT_TWILIO_API_BASE.to_string()),
            }),
            (None, None, None) => None,
            _ => {
                warn!("Incomplete Twilio credentials, SMS alerts disabled");
                None
            }
        };

        let config = Self {
            ai_url: get("PYTHON_AI_URL").unwrap_or_else(|| DEFAULT_AI_URL.to_string()),
            host: get("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            mode,
            sms,
        };

        debug!(
            ai_url = %config.ai_url,
            port = config.port,
            mode = config.mode.as_str(),
            sms_configured = config.sms.is_some(),
            "Configuration loaded"
        );

        Ok(config)
    }
}
