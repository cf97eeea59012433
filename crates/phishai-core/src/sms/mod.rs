//! SMS alerting: phone validation, alert text and delivery.

pub mod alert;
pub mod gateway;
pub mod phone;

pub use alert::{compose_alert, ThreatLevel};
pub use gateway::{SmsGateway, SmsReceipt, TwilioGateway};
pub use phone::{verify_phone, PhoneNumber, PhoneVerification};

use std::sync::Arc;
use tracing::info;

use crate::error::SmsError;

/// Sends threat alerts through an injected gateway. Never retries.
#[derive(Clone)]
pub struct SmsAlerter {
    gateway: Arc<dyn SmsGateway>,
}

impl SmsAlerter {
    pub fn new(gateway: Arc<dyn SmsGateway>) -> Self {
        Self { gateway }
    }

    /// Validate `phone`, compose the alert for `threat` and send it.
    pub async fn send_alert(
        &self,
        phone: &str,
        threat: Option<&str>,
        url: Option<&str>,
    ) -> Result<SmsReceipt, SmsError> {
        let to = PhoneNumber::parse(phone)?;
        let body = compose_alert(ThreatLevel::from_label(threat), url);

        let receipt = self.gateway.send(&to, &body).await?;
        info!(to = %receipt.to, sid = %receipt.sid, "SMS alert sent");

        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PhoneError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingGateway {
        sent: Mutex<Vec<(String, String)>>,
    }

    #[async_trait]
    impl SmsGateway for RecordingGateway {
        async fn send(&self, to: &PhoneNumber, body: &str) -> Result<SmsReceipt, SmsError> {
            self.sent.lock().unwrap().push((to.to_string(), body.to_string()));
            Ok(SmsReceipt { sid: "SM1".into(), to: to.clone() })
        }
    }

    #[tokio::test]
    async fn test_alert_sent_with_template() {
        let gateway = Arc::new(RecordingGateway::default());
        let alerter = SmsAlerter::new(gateway.clone());

        let receipt = alerter
            .send_alert("+1 (415) 555-0100", Some("phishing"), Some("http://bad.example.test"))
            .await
            .unwrap();
        assert_eq!(receipt.to.as_str(), "+14155550100");

        let sent = gateway.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, "+14155550100");
        assert!(sent[0].1.contains("DANGEROUS"));
    }

    #[tokio::test]
    async fn test_invalid_phone_never_reaches_gateway() {
        let gateway = Arc::new(RecordingGateway::default());
        let alerter = SmsAlerter::new(gateway.clone());

        let err = alerter.send_alert("12345", None, None).await.unwrap_err();
        assert!(matches!(err, SmsError::Phone(PhoneError::Invalid { digits: 5 })));
        assert!(gateway.sent.lock().unwrap().is_empty());
    }
}
