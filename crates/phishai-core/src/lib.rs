//! PhishAI Core Library
//!
//! Request validation, upstream classifier proxying, SMS alerting and
//! configuration for the PhishAI backend.

pub mod analysis;
pub mod config;
pub mod error;
pub mod retry;
pub mod sms;

pub use analysis::{AnalysisProxy, AnalysisRequest, AnalysisResult, ScanBody};
pub use config::{Config, RuntimeMode};
pub use error::{AnalyzeError, ConfigError, PhoneError, SmsError, UpstreamError, ValidationError};
pub use retry::RetryPolicy;
pub use sms::{PhoneNumber, SmsAlerter, SmsGateway, SmsReceipt};
