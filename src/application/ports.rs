//! Outbound seams for external collaborators (payment gateway, SMS
//! provider). Handlers and tests depend on these traits, not on the
//! concrete HTTP clients.

use async_trait::async_trait;

use crate::domain::DomainResult;

/// Request to open a hosted checkout session with the payment gateway.
#[derive(Debug, Clone)]
pub struct CheckoutRequest {
    /// Booking ID; echoed back by the gateway webhook as the reference
    pub client_reference: String,
    /// Amount in minor currency units
    pub amount: i64,
    pub description: String,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// A successfully opened checkout session.
#[derive(Debug, Clone)]
pub struct CheckoutSession {
    /// The gateway's hosted checkout URL
    pub url: String,
}

#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Whether provider credentials are configured at all.
    fn is_configured(&self) -> bool;

    /// Open a hosted checkout session. Provider failures surface as
    /// `DomainError::Provider` with diagnostic detail.
    async fn create_checkout(&self, request: CheckoutRequest) -> DomainResult<CheckoutSession>;
}

#[async_trait]
pub trait SmsSender: Send + Sync {
    /// Send one SMS. Single attempt; callers decide whether failure
    /// matters (the payment path deliberately ignores it).
    async fn send(&self, to: &str, message: &str) -> DomainResult<()>;
}
