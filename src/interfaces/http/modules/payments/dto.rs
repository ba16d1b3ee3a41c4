//! Payment API data transfer objects

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request to open a hosted checkout session for a booking.
///
/// Integrations commonly echo the booking's amount and customer details
/// alongside the id; those fields are accepted, but the stored booking is
/// authoritative for the amount charged and the name and phone sent to the
/// gateway. `email` is used only when the booking has none on file.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct CreateCheckoutRequest {
    pub booking_id: String,
    /// Accepted for compatibility; the booking's stored amount is charged
    pub amount: Option<i64>,
    /// Accepted for compatibility; the booking's stored name is sent
    pub full_name: Option<String>,
    /// Fallback contact when the booking has no email
    pub email: Option<String>,
    /// Accepted for compatibility; the booking's stored phone is sent
    pub phone: Option<String>,
}

/// Hosted checkout session.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CheckoutResponse {
    /// URL the passenger is redirected to
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checkout_request_accepts_the_full_integration_payload() {
        let body = r#"{
            "booking_id": "b-1",
            "amount": 15000,
            "full_name": "Ama Mensah",
            "email": "ama@example.com",
            "phone": "+233200000001"
        }"#;
        let req: CreateCheckoutRequest = serde_json::from_str(body).unwrap();
        assert_eq!(req.booking_id, "b-1");
        assert_eq!(req.email.as_deref(), Some("ama@example.com"));
    }

    #[test]
    fn checkout_request_needs_only_the_booking_id() {
        let req: CreateCheckoutRequest = serde_json::from_str(r#"{"booking_id":"b-2"}"#).unwrap();
        assert_eq!(req.booking_id, "b-2");
        assert!(req.amount.is_none());
        assert!(req.email.is_none());
    }
}
