//! SMS provider client

use async_trait::async_trait;
use log::debug;
use serde_json::json;

use crate::application::ports::SmsSender;
use crate::domain::{DomainError, DomainResult};

/// SMS provider configuration
#[derive(Debug, Clone, Default)]
pub struct SmsConfig {
    pub api_base: String,
    pub api_key: String,
    /// Sender ID shown on the recipient's phone
    pub sender_id: String,
}

impl SmsConfig {
    pub fn is_configured(&self) -> bool {
        !self.api_base.is_empty() && !self.api_key.is_empty()
    }
}

/// reqwest-backed SMS sender. Single attempt per message, no retry.
pub struct HttpSmsSender {
    config: SmsConfig,
    client: reqwest::Client,
}

impl HttpSmsSender {
    pub fn new(config: SmsConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl SmsSender for HttpSmsSender {
    async fn send(&self, to: &str, message: &str) -> DomainResult<()> {
        if !self.config.is_configured() {
            return Err(DomainError::Provider(
                "SMS provider credentials are not configured".to_string(),
            ));
        }

        let url = format!("{}/messages/send", self.config.api_base);
        debug!("Sending SMS to {}", to);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&json!({
                "from": self.config.sender_id,
                "to": to,
                "content": message,
            }))
            .send()
            .await
            .map_err(|e| DomainError::Provider(format!("SMS provider unreachable: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(DomainError::Provider(format!(
                "SMS provider returned {}: {}",
                status, body
            )));
        }

        Ok(())
    }
}
