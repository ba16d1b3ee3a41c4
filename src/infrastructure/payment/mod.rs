//! Hosted-checkout payment gateway client

use async_trait::async_trait;
use log::debug;
use serde_json::{json, Value};

use crate::application::ports::{CheckoutRequest, CheckoutSession, PaymentGateway};
use crate::domain::{DomainError, DomainResult};

/// Payment gateway configuration
#[derive(Debug, Clone, Default)]
pub struct PaymentGatewayConfig {
    /// Provider API base, e.g. `https://checkout.example.com/api`
    pub api_base: String,
    pub api_key: String,
    /// URL the provider calls back with payment outcomes
    pub callback_url: String,
}

impl PaymentGatewayConfig {
    pub fn is_configured(&self) -> bool {
        !self.api_base.is_empty() && !self.api_key.is_empty()
    }
}

/// reqwest-backed gateway client.
///
/// One call per checkout; the provider's asynchronous outcome arrives on
/// the webhook, keyed by `clientReference`.
pub struct HttpPaymentGateway {
    config: PaymentGatewayConfig,
    client: reqwest::Client,
}

impl HttpPaymentGateway {
    pub fn new(config: PaymentGatewayConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl PaymentGateway for HttpPaymentGateway {
    fn is_configured(&self) -> bool {
        self.config.is_configured()
    }

    async fn create_checkout(&self, request: CheckoutRequest) -> DomainResult<CheckoutSession> {
        let url = format!("{}/checkout/initiate", self.config.api_base);
        debug!(
            "Initiating checkout for reference {} ({} minor units)",
            request.client_reference, request.amount
        );

        let payload = json!({
            "clientReference": request.client_reference,
            "amount": request.amount as f64 / 100.0,
            "description": request.description,
            "customerName": request.full_name,
            "customerEmail": request.email,
            "customerMsisdn": request.phone,
            "callbackUrl": self.config.callback_url,
        });

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| DomainError::Provider(format!("gateway unreachable: {}", e)))?;

        let status = response.status();
        let body: Value = response
            .json()
            .await
            .map_err(|e| DomainError::Provider(format!("invalid gateway response: {}", e)))?;

        if !status.is_success() {
            return Err(DomainError::Provider(format!(
                "gateway returned {}: {}",
                status, body
            )));
        }

        let success = body
            .get("status")
            .and_then(Value::as_str)
            .is_some_and(|s| s == "Success");
        if !success {
            return Err(DomainError::Provider(format!(
                "gateway did not report success: {}",
                body
            )));
        }

        let checkout_url = body
            .pointer("/data/checkoutUrl")
            .and_then(Value::as_str)
            .ok_or_else(|| {
                DomainError::Provider(format!("gateway response missing checkoutUrl: {}", body))
            })?;

        Ok(CheckoutSession {
            url: checkout_url.to_string(),
        })
    }
}
