//! Application state.

use phishai_core::analysis::{AnalysisProxy, ClassifierClient};
use phishai_core::sms::{SmsAlerter, TwilioGateway};
use phishai_core::{Config, RuntimeMode, SmsError};
use std::sync::Arc;
use tracing::{info, warn};

/// Application state shared across handlers. Immutable once built.
#[derive(Clone)]
pub struct AppState {
    pub proxy: Arc<AnalysisProxy>,
    /// `None` when SMS credentials are not configured.
    pub alerter: Option<Arc<SmsAlerter>>,
    pub mode: RuntimeMode,
}

impl AppState {
    pub fn new(proxy: AnalysisProxy, alerter: Option<SmsAlerter>, mode: RuntimeMode) -> Self {
        Self {
            proxy: Arc::new(proxy),
            alerter: alerter.map(Arc::new),
            mode,
        }
    }

    /// Build every collaborator from configuration.
    pub fn from_config(config: &Config) -> Result<Self, SmsError> {
        let proxy = AnalysisProxy::new(ClassifierClient::new(&config.ai_url));

        let alerter = match &config.sms {
            Some(credentials) => {
                let gateway = TwilioGateway::new(credentials)?;
                info!("Twilio client initialized");
                Some(SmsAlerter::new(Arc::new(gateway)))
            }
            None => {
                warn!("Twilio credentials missing, SMS alerts will not work");
                None
            }
        };

        Ok(Self::new(proxy, alerter, config.mode))
    }
}
