//! Payment HTTP handlers
//!
//! The webhook endpoint accepts any method and parses its body
//! defensively: gateways disagree on field casing and retry deliveries,
//! and an error response only triggers more retries. Anything short of a
//! storage failure is acknowledged with `200 {"ok":true}`.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use log::{info, warn};
use serde_json::{json, Value};

use crate::application::ports::CheckoutRequest;
use crate::application::services::payment::WebhookUpdate;
use crate::application::{BookingService, PaymentService};
use crate::domain::DomainError;
use crate::interfaces::http::common::{reject, ApiResponse};

use super::dto::*;

/// Application state for payment handlers.
#[derive(Clone)]
pub struct PaymentAppState {
    pub payments: Arc<PaymentService>,
    pub bookings: Arc<BookingService>,
}

#[utoipa::path(
    post,
    path = "/api/v1/payments/checkout",
    tag = "Payments",
    request_body = CreateCheckoutRequest,
    responses(
        (status = 200, description = "Checkout session opened", body = ApiResponse<CheckoutResponse>),
        (status = 400, description = "Missing booking id or non-positive amount"),
        (status = 404, description = "Booking not found"),
        (status = 500, description = "Provider unconfigured or provider failure")
    )
)]
pub async fn create_checkout(
    State(state): State<PaymentAppState>,
    Json(request): Json<CreateCheckoutRequest>,
) -> Result<Json<ApiResponse<CheckoutResponse>>, (StatusCode, Json<ApiResponse<CheckoutResponse>>)>
{
    if request.booking_id.trim().is_empty() {
        return Err(reject(DomainError::Validation(
            "booking_id is required".to_string(),
        )));
    }

    let booking = state.bookings.get(&request.booking_id).await.map_err(reject)?;

    if booking.amount <= 0 {
        return Err(reject(DomainError::Validation(format!(
            "booking {} has non-positive amount",
            booking.id
        ))));
    }

    let session = state
        .payments
        .create_checkout(CheckoutRequest {
            client_reference: booking.id.clone(),
            amount: booking.amount,
            description: format!("Bus seat {} booking {}", booking.seat_number, booking.short_reference()),
            full_name: Some(booking.full_name.clone()),
            email: booking.email.clone().or(request.email),
            phone: Some(booking.phone.clone()),
        })
        .await
        .map_err(reject)?;

    Ok(Json(ApiResponse::success(CheckoutResponse {
        url: session.url,
    })))
}

/// `ANY /api/v1/payments/webhook` — gateway callback.
///
/// Not documented in OpenAPI: the consumer is the gateway, not API users.
pub async fn payment_webhook(
    State(state): State<PaymentAppState>,
    body: Bytes,
) -> (StatusCode, Json<Value>) {
    let update = parse_webhook_body(&body);

    match state.payments.reconcile(update).await {
        Ok(outcome) => {
            info!("Payment webhook reconciled: {:?}", outcome);
            (StatusCode::OK, Json(json!({"ok": true})))
        }
        Err(e) => {
            warn!("Payment webhook failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"ok": false, "error": e.to_string()})),
            )
        }
    }
}

/// Pull the fields we care about out of an arbitrary JSON body, trying the
/// casings observed from real gateways. A non-JSON or non-object body
/// yields an empty update, which reconciliation acknowledges and drops.
fn parse_webhook_body(body: &[u8]) -> WebhookUpdate {
    let Ok(value) = serde_json::from_slice::<Value>(body) else {
        warn!("Payment webhook body is not JSON");
        return WebhookUpdate::default();
    };

    // Some gateways nest the payload under "data"
    let root = value.get("data").filter(|d| d.is_object()).unwrap_or(&value);

    WebhookUpdate {
        status: pick_str(root, &["status", "Status"]),
        reference: pick_str(
            root,
            &["clientReference", "ClientReference", "reference", "Reference"],
        ),
        transaction_id: pick_str(root, &["transactionId", "TransactionId", "transaction_id"]),
        receipt_url: pick_str(root, &["receiptUrl", "ReceiptUrl", "receipt_url"]),
    }
}

fn pick_str(value: &Value, keys: &[&str]) -> Option<String> {
    keys.iter()
        .find_map(|k| value.get(k))
        .and_then(|v| v.as_str())
        .map(|s| s.to_string())
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_camel_case_body() {
        let body = br#"{"status":"Success","clientReference":"abc-123","transactionId":"TXN-9","receiptUrl":"https://pay.example/r/9"}"#;
        let update = parse_webhook_body(body);
        assert_eq!(update.status.as_deref(), Some("Success"));
        assert_eq!(update.reference.as_deref(), Some("abc-123"));
        assert_eq!(update.transaction_id.as_deref(), Some("TXN-9"));
        assert_eq!(update.receipt_url.as_deref(), Some("https://pay.example/r/9"));
    }

    #[test]
    fn parses_pascal_case_body() {
        let body = br#"{"Status":"PAID","ClientReference":"abc-123","TransactionId":"TXN-10"}"#;
        let update = parse_webhook_body(body);
        assert_eq!(update.status.as_deref(), Some("PAID"));
        assert_eq!(update.reference.as_deref(), Some("abc-123"));
        assert_eq!(update.transaction_id.as_deref(), Some("TXN-10"));
        assert!(update.receipt_url.is_none());
    }

    #[test]
    fn parses_nested_data_envelope() {
        let body = br#"{"event":"charge.completed","data":{"status":"Successful","reference":"abc-123"}}"#;
        let update = parse_webhook_body(body);
        assert_eq!(update.status.as_deref(), Some("Successful"));
        assert_eq!(update.reference.as_deref(), Some("abc-123"));
    }

    #[test]
    fn garbage_body_yields_empty_update() {
        let update = parse_webhook_body(b"not json at all");
        assert!(update.status.is_none());
        assert!(update.reference.is_none());
    }

    #[test]
    fn empty_strings_are_treated_as_absent() {
        let body = br#"{"status":"","clientReference":""}"#;
        let update = parse_webhook_body(body);
        assert!(update.status.is_none());
        assert!(update.reference.is_none());
    }
}
