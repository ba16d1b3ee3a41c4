//! Payment service: checkout initiation and webhook reconciliation.

use std::sync::Arc;

use log::{info, warn};

use crate::application::ports::{CheckoutRequest, CheckoutSession, PaymentGateway};
use crate::application::services::BookingService;
use crate::domain::{BookingStatus, DomainError, DomainResult, RepositoryProvider};

/// Default recognized "paid" vocabulary. The gateway's status strings are
/// not authoritatively documented, so the list is configurable and matched
/// case-sensitively.
pub const DEFAULT_PAID_STATUSES: [&str; 5] =
    ["Success", "Successful", "Completed", "PAID", "Paid"];

/// Fields extracted (tolerantly) from a gateway webhook body.
#[derive(Debug, Clone, Default)]
pub struct WebhookUpdate {
    pub status: Option<String>,
    pub reference: Option<String>,
    pub transaction_id: Option<String>,
    pub receipt_url: Option<String>,
}

/// What reconciliation did with a webhook delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReconcileOutcome {
    /// No usable reference, or no booking matched it; acknowledged and
    /// dropped (the gateway cannot act on an error response)
    Ignored,
    /// pending -> paid performed; confirmation SMS dispatched
    MarkedPaid,
    /// Redelivery for an already-paid booking; metadata refreshed, no SMS
    AlreadyPaid,
    /// Provider status not in the paid vocabulary; metadata stored without
    /// a lifecycle change
    MetadataRecorded,
}

pub struct PaymentService {
    repos: Arc<dyn RepositoryProvider>,
    gateway: Arc<dyn PaymentGateway>,
    bookings: Arc<BookingService>,
    paid_statuses: Vec<String>,
}

impl PaymentService {
    pub fn new(
        repos: Arc<dyn RepositoryProvider>,
        gateway: Arc<dyn PaymentGateway>,
        bookings: Arc<BookingService>,
        paid_statuses: Vec<String>,
    ) -> Self {
        Self {
            repos,
            gateway,
            bookings,
            paid_statuses,
        }
    }

    /// Whether the gateway has credentials; surfaced on the health report.
    pub fn gateway_configured(&self) -> bool {
        self.gateway.is_configured()
    }

    fn is_paid_status(&self, status: Option<&str>) -> bool {
        status.is_some_and(|s| self.paid_statuses.iter().any(|p| p == s))
    }

    /// Open a hosted checkout session for a booking.
    pub async fn create_checkout(&self, request: CheckoutRequest) -> DomainResult<CheckoutSession> {
        if !self.gateway.is_configured() {
            return Err(DomainError::Provider(
                "payment provider credentials are not configured".to_string(),
            ));
        }

        let session = self.gateway.create_checkout(request.clone()).await?;
        info!(
            "Checkout session opened for booking {}",
            request.client_reference
        );
        metrics::counter!("checkouts_created_total").increment(1);
        Ok(session)
    }

    /// Map one gateway callback onto the booking ledger.
    ///
    /// Webhook redelivery is expected: an already-paid booking gets an
    /// idempotent metadata refresh and no second SMS. Only storage errors
    /// propagate; everything else is an acknowledged outcome.
    pub async fn reconcile(&self, update: WebhookUpdate) -> DomainResult<ReconcileOutcome> {
        metrics::counter!("payment_webhooks_total").increment(1);

        let Some(reference) = update.reference else {
            info!("Payment webhook without reference, ignoring");
            return Ok(ReconcileOutcome::Ignored);
        };

        let Some(mut booking) = self.repos.bookings().find_by_id(&reference).await? else {
            warn!("Payment webhook for unknown reference {}, ignoring", reference);
            return Ok(ReconcileOutcome::Ignored);
        };

        let payment_reference = update
            .transaction_id
            .unwrap_or_else(|| reference.clone());

        if self.is_paid_status(update.status.as_deref()) {
            match booking.status {
                BookingStatus::Paid => {
                    booking.record_payment_metadata(payment_reference, update.receipt_url);
                    self.repos.bookings().update(booking).await?;
                    Ok(ReconcileOutcome::AlreadyPaid)
                }
                BookingStatus::Pending => {
                    self.bookings
                        .confirm_payment(&reference, payment_reference, update.receipt_url)
                        .await?;
                    Ok(ReconcileOutcome::MarkedPaid)
                }
                BookingStatus::Cancelled => {
                    // A cancelled booking never silently revives; keep the
                    // metadata for the operator to reconcile by hand.
                    warn!(
                        "Paid webhook for cancelled booking {}, storing metadata only",
                        reference
                    );
                    booking.record_payment_metadata(payment_reference, update.receipt_url);
                    self.repos.bookings().update(booking).await?;
                    Ok(ReconcileOutcome::MetadataRecorded)
                }
            }
        } else {
            booking.record_payment_metadata(payment_reference, update.receipt_url);
            self.repos.bookings().update(booking).await?;
            Ok(ReconcileOutcome::MetadataRecorded)
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::testutil::{
        drain_tasks, seed, test_repos, RecordingSms, StubGateway,
    };
    use crate::domain::{Booking, BookingDetails};

    struct Harness {
        sms: Arc<RecordingSms>,
        bookings: Arc<BookingService>,
        payments: PaymentService,
    }

    async fn harness_with(gateway: StubGateway, paid_statuses: Vec<String>) -> Harness {
        let repos = test_repos().await;
        seed(&repos).await;
        let sms = Arc::new(RecordingSms::default());
        let bookings = Arc::new(BookingService::new(Arc::clone(&repos), sms.clone()));
        let payments = PaymentService::new(
            repos,
            Arc::new(gateway),
            Arc::clone(&bookings),
            paid_statuses,
        );
        Harness {
            sms,
            bookings,
            payments,
        }
    }

    async fn harness() -> Harness {
        harness_with(
            StubGateway::default(),
            DEFAULT_PAID_STATUSES.iter().map(|s| s.to_string()).collect(),
        )
        .await
    }

    async fn pending_booking(h: &Harness) -> Booking {
        h.bookings
            .attempt_booking(
                1,
                1,
                BookingDetails {
                    full_name: "Ama Mensah".to_string(),
                    passenger_class: None,
                    email: None,
                    phone: "+233200000001".to_string(),
                    emergency_contact: None,
                    pickup_point_id: 1,
                    destination_id: 1,
                    referral_id: None,
                },
            )
            .await
            .expect("booking")
    }

    fn paid_update(reference: &str) -> WebhookUpdate {
        WebhookUpdate {
            status: Some("Success".to_string()),
            reference: Some(reference.to_string()),
            transaction_id: Some("TXN-1".to_string()),
            receipt_url: Some("https://pay.example/r/1".to_string()),
        }
    }

    #[tokio::test]
    async fn missing_reference_is_acknowledged_and_ignored() {
        let h = harness().await;
        let outcome = h
            .payments
            .reconcile(WebhookUpdate {
                status: Some("Success".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(outcome, ReconcileOutcome::Ignored);
    }

    #[tokio::test]
    async fn unknown_reference_is_ignored() {
        let h = harness().await;
        let outcome = h.payments.reconcile(paid_update("no-such-id")).await.unwrap();
        assert_eq!(outcome, ReconcileOutcome::Ignored);
    }

    #[tokio::test]
    async fn paid_webhook_confirms_pending_booking() {
        let h = harness().await;
        let booking = pending_booking(&h).await;

        let outcome = h.payments.reconcile(paid_update(&booking.id)).await.unwrap();
        assert_eq!(outcome, ReconcileOutcome::MarkedPaid);

        let reloaded = h.bookings.get(&booking.id).await.unwrap();
        assert_eq!(reloaded.status, BookingStatus::Paid);
        assert_eq!(reloaded.payment_reference.as_deref(), Some("TXN-1"));
        assert_eq!(
            reloaded.receipt_url.as_deref(),
            Some("https://pay.example/r/1")
        );

        drain_tasks().await;
        assert_eq!(h.sms.sent().len(), 1);
    }

    #[tokio::test]
    async fn redelivery_is_idempotent_and_sends_no_second_sms() {
        let h = harness().await;
        let booking = pending_booking(&h).await;

        h.payments.reconcile(paid_update(&booking.id)).await.unwrap();
        let outcome = h.payments.reconcile(paid_update(&booking.id)).await.unwrap();
        assert_eq!(outcome, ReconcileOutcome::AlreadyPaid);

        let reloaded = h.bookings.get(&booking.id).await.unwrap();
        assert_eq!(reloaded.status, BookingStatus::Paid);

        drain_tasks().await;
        assert_eq!(h.sms.sent().len(), 1);
    }

    #[tokio::test]
    async fn unrecognized_status_stores_metadata_only() {
        let h = harness().await;
        let booking = pending_booking(&h).await;

        let mut update = paid_update(&booking.id);
        update.status = Some("Declined".to_string());
        let outcome = h.payments.reconcile(update).await.unwrap();
        assert_eq!(outcome, ReconcileOutcome::MetadataRecorded);

        let reloaded = h.bookings.get(&booking.id).await.unwrap();
        assert_eq!(reloaded.status, BookingStatus::Pending);
        assert_eq!(reloaded.payment_reference.as_deref(), Some("TXN-1"));

        drain_tasks().await;
        assert!(h.sms.sent().is_empty());
    }

    #[tokio::test]
    async fn paid_status_matching_is_case_sensitive() {
        let h = harness().await;
        let booking = pending_booking(&h).await;

        let mut update = paid_update(&booking.id);
        update.status = Some("success".to_string());
        let outcome = h.payments.reconcile(update).await.unwrap();
        assert_eq!(outcome, ReconcileOutcome::MetadataRecorded);
    }

    #[tokio::test]
    async fn custom_paid_vocabulary_is_honored() {
        let h = harness_with(StubGateway::default(), vec!["OK".to_string()]).await;
        let booking = pending_booking(&h).await;

        let mut update = paid_update(&booking.id);
        update.status = Some("OK".to_string());
        let outcome = h.payments.reconcile(update).await.unwrap();
        assert_eq!(outcome, ReconcileOutcome::MarkedPaid);

        // The default vocabulary no longer applies.
        let other = pending_booking_on_seat(&h, 2).await;
        let mut update = paid_update(&other.id);
        update.status = Some("Success".to_string());
        let outcome = h.payments.reconcile(update).await.unwrap();
        assert_eq!(outcome, ReconcileOutcome::MetadataRecorded);
    }

    async fn pending_booking_on_seat(h: &Harness, seat_number: i32) -> Booking {
        h.bookings
            .attempt_booking(
                1,
                seat_number,
                BookingDetails {
                    full_name: "Kofi Owusu".to_string(),
                    passenger_class: None,
                    email: None,
                    phone: "+233200000002".to_string(),
                    emergency_contact: None,
                    pickup_point_id: 1,
                    destination_id: 1,
                    referral_id: None,
                },
            )
            .await
            .expect("booking")
    }

    #[tokio::test]
    async fn cancelled_booking_never_silently_revives() {
        let h = harness().await;
        let booking = pending_booking(&h).await;
        h.bookings.cancel_booking(&booking.id).await.unwrap();

        let outcome = h.payments.reconcile(paid_update(&booking.id)).await.unwrap();
        assert_eq!(outcome, ReconcileOutcome::MetadataRecorded);

        let reloaded = h.bookings.get(&booking.id).await.unwrap();
        assert_eq!(reloaded.status, BookingStatus::Cancelled);
        assert_eq!(reloaded.payment_reference.as_deref(), Some("TXN-1"));

        drain_tasks().await;
        assert!(h.sms.sent().is_empty());
    }

    #[tokio::test]
    async fn reference_fallback_when_transaction_id_missing() {
        let h = harness().await;
        let booking = pending_booking(&h).await;

        let mut update = paid_update(&booking.id);
        update.transaction_id = None;
        h.payments.reconcile(update).await.unwrap();

        let reloaded = h.bookings.get(&booking.id).await.unwrap();
        assert_eq!(reloaded.payment_reference.as_deref(), Some(booking.id.as_str()));
    }

    #[tokio::test]
    async fn checkout_requires_configured_gateway() {
        let h = harness_with(
            StubGateway {
                configured: false,
                ..StubGateway::default()
            },
            DEFAULT_PAID_STATUSES.iter().map(|s| s.to_string()).collect(),
        )
        .await;

        let err = h
            .payments
            .create_checkout(CheckoutRequest {
                client_reference: "b-1".to_string(),
                amount: 15000,
                description: "test".to_string(),
                full_name: None,
                email: None,
                phone: None,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Provider(_)));
    }

    #[tokio::test]
    async fn checkout_returns_the_hosted_url() {
        let h = harness().await;
        let session = h
            .payments
            .create_checkout(CheckoutRequest {
                client_reference: "b-1".to_string(),
                amount: 15000,
                description: "test".to_string(),
                full_name: None,
                email: None,
                phone: None,
            })
            .await
            .unwrap();
        assert_eq!(session.url, "https://pay.example/checkout/abc");
    }
}
