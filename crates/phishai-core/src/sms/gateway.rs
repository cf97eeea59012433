//! SMS gateway abstraction and the Twilio REST implementation.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

use super::phone::PhoneNumber;
use crate::config::SmsCredentials;
use crate::error::SmsError;

/// Identifier of a message accepted by the gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SmsReceipt {
    pub sid: String,
    pub to: PhoneNumber,
}

/// Something that can deliver a text message.
#[async_trait]
pub trait SmsGateway: Send + Sync {
    async fn send(&self, to: &PhoneNumber, body: &str) -> Result<SmsReceipt, SmsError>;
}

/// Twilio Messages API client.
pub struct TwilioGateway {
    client: reqwest::Client,
    api_base: String,
    account_sid: String,
    auth_token: String,
    from_number: String,
}

#[derive(Deserialize)]
struct MessageResponse {
    sid: String,
}

#[derive(Deserialize)]
struct ProviderError {
    code: Option<u32>,
    message: Option<String>,
}

impl TwilioGateway {
    pub fn new(credentials: &SmsCredentials) -> Result<Self, SmsError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| SmsError::Transport(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_base: credentials.api_base.trim_end_matches('/').to_string(),
            account_sid: credentials.account_sid.clone(),
            auth_token: credentials.auth_token.clone(),
            from_number: credentials.from_number.clone(),
        })
    }

    fn messages_url(&self) -> String {
        format!(
            "{}/2010-04-01/Accounts/{}/Messages.json",
            self.api_base, self.account_sid
        )
    }
}

#[async_trait]
impl SmsGateway for TwilioGateway {
    async fn send(&self, to: &PhoneNumber, body: &str) -> Result<SmsReceipt, SmsError> {
        let url = self.messages_url();
        debug!(to = %to, "Sending SMS through Twilio");

        let form = [
            ("To", to.as_str()),
            ("From", self.from_number.as_str()),
            ("Body", body),
        ];

        let response = self
            .client
            .post(&url)
            .basic_auth(&self.account_sid, Some(&self.auth_token))
            .form(&form)
            .send()
            .await
            .map_err(|e| SmsError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let parsed = serde_json::from_str::<ProviderError>(&text).ok();
            return Err(SmsError::Provider {
                status: status.as_u16(),
                code: parsed.as_ref().and_then(|p| p.code),
                message: parsed
                    .and_then(|p| p.message)
                    .unwrap_or_else(|| status.to_string()),
            });
        }

        let message: MessageResponse = response
            .json()
            .await
            .map_err(|e| SmsError::Transport(format!("Failed to parse Twilio response: {}", e)))?;

        Ok(SmsReceipt {
            sid: message.sid,
            to: to.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_string_contains, header_exists, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn gateway(server: &MockServer) -> TwilioGateway {
        TwilioGateway::new(&SmsCredentials {
            account_sid: "AC123".into(),
            auth_token: "token".into(),
            from_number: "+15550001111".into(),
            api_base: server.uri(),
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_send_posts_form_with_auth() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/2010-04-01/Accounts/AC123/Messages.json"))
            .and(header_exists("authorization"))
            .and(body_string_contains("To=%2B2348035551234"))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({"sid": "SM42", "status": "queued"})))
            .expect(1)
            .mount(&server)
            .await;

        let to = PhoneNumber::parse("+234 803 555 1234").unwrap();
        let receipt = gateway(&server).send(&to, "hello").await.unwrap();
        assert_eq!(receipt.sid, "SM42");
        assert_eq!(receipt.to, to);
    }

    #[tokio::test]
    async fn test_provider_error_code_kept() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "code": 21608,
                "message": "The number is unverified",
                "status": 400
            })))
            .mount(&server)
            .await;

        let to = PhoneNumber::parse("+15550002222").unwrap();
        let err = gateway(&server).send(&to, "hello").await.unwrap_err();
        match &err {
            SmsError::Provider { status, code, message } => {
                assert_eq!(*status, 400);
                assert_eq!(*code, Some(21608));
                assert_eq!(message, "The number is unverified");
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert_eq!(err.user_message(), "Phone number is not verified (Twilio trial)");
    }

    #[test]
    fn test_trailing_slash_trimmed_from_api_base() {
        let gateway = TwilioGateway::new(&SmsCredentials {
            account_sid: "AC9".into(),
            auth_token: "token".into(),
            from_number: "+15550001111".into(),
            api_base: "https://api.twilio.test/".into(),
        })
        .unwrap();
        assert_eq!(
            gateway.messages_url(),
            "https://api.twilio.test/2010-04-01/Accounts/AC9/Messages.json"
        );
    }
}
