//! Booking service: seat allocation, availability view, lifecycle
//! transitions and the paid-confirmation SMS.

use std::collections::HashSet;
use std::sync::Arc;

use log::{info, warn};

use crate::application::ports::SmsSender;
use crate::domain::bus::{SeatAvailability, SeatStatus};
use crate::domain::{
    Booking, BookingDetails, BookingStatus, DomainError, DomainResult, RepositoryProvider,
};

/// Service for booking operations.
///
/// The seat-allocation invariant is NOT checked here with a read: the
/// partial unique index in the bookings table is the arbiter, and the
/// repository maps its violation to `SeatTaken`. Racing callers therefore
/// resolve to exactly one winner regardless of process count.
pub struct BookingService {
    repos: Arc<dyn RepositoryProvider>,
    sms: Arc<dyn SmsSender>,
}

impl BookingService {
    pub fn new(repos: Arc<dyn RepositoryProvider>, sms: Arc<dyn SmsSender>) -> Self {
        Self { repos, sms }
    }

    /// Attempt to book a seat.
    ///
    /// Inactive seats are rejected before the uniqueness path is ever
    /// reached. The amount is captured from the destination price at this
    /// moment and never recomputed.
    pub async fn attempt_booking(
        &self,
        bus_id: i32,
        seat_number: i32,
        details: BookingDetails,
    ) -> DomainResult<Booking> {
        let seat = self
            .repos
            .buses()
            .find_seat(bus_id, seat_number)
            .await?
            .ok_or(DomainError::NotFound {
                entity: "Seat",
                field: "seat_number",
                value: format!("{} (bus {})", seat_number, bus_id),
            })?;

        if !seat.is_active {
            return Err(DomainError::SeatInactive { bus_id, seat_number });
        }

        let destination = self
            .repos
            .catalog()
            .find_destination(details.destination_id)
            .await?
            .ok_or(DomainError::NotFound {
                entity: "Destination",
                field: "id",
                value: details.destination_id.to_string(),
            })?;

        if self
            .repos
            .catalog()
            .find_pickup_point(details.pickup_point_id)
            .await?
            .is_none()
        {
            return Err(DomainError::NotFound {
                entity: "PickupPoint",
                field: "id",
                value: details.pickup_point_id.to_string(),
            });
        }

        if let Some(referral_id) = details.referral_id {
            if self.repos.catalog().find_referral(referral_id).await?.is_none() {
                return Err(DomainError::NotFound {
                    entity: "Referral",
                    field: "id",
                    value: referral_id.to_string(),
                });
            }
        }

        let booking = Booking::new(bus_id, seat_number, details, destination.price);

        match self.repos.bookings().insert(booking).await {
            Ok(saved) => {
                info!(
                    "Booking {} created: bus {} seat {} amount {}",
                    saved.id, saved.bus_id, saved.seat_number, saved.amount
                );
                metrics::counter!("bookings_created_total").increment(1);
                Ok(saved)
            }
            Err(e @ DomainError::SeatTaken { .. }) => {
                metrics::counter!("seat_conflicts_total").increment(1);
                Err(e)
            }
            Err(e) => Err(e),
        }
    }

    /// Per-seat status for a bus, ordered by seat number ascending.
    ///
    /// `taken` iff a live (pending or paid) booking holds the seat;
    /// computed from ledger + registry at query time. Contains no
    /// passenger data.
    pub async fn seat_status(&self, bus_id: i32) -> DomainResult<Vec<SeatStatus>> {
        if self.repos.buses().find_by_id(bus_id).await?.is_none() {
            return Err(DomainError::NotFound {
                entity: "Bus",
                field: "id",
                value: bus_id.to_string(),
            });
        }

        let seats = self.repos.buses().seats_for_bus(bus_id).await?;
        let taken: HashSet<i32> = self
            .repos
            .bookings()
            .find_live_for_bus(bus_id)
            .await?
            .into_iter()
            .map(|b| b.seat_number)
            .collect();

        Ok(seats
            .into_iter()
            .map(|seat| SeatStatus {
                seat_number: seat.seat_number,
                is_active: seat.is_active,
                status: if taken.contains(&seat.seat_number) {
                    SeatAvailability::Taken
                } else {
                    SeatAvailability::Available
                },
            })
            .collect())
    }

    pub async fn get(&self, id: &str) -> DomainResult<Booking> {
        self.repos
            .bookings()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound {
                entity: "Booking",
                field: "id",
                value: id.to_string(),
            })
    }

    pub async fn list(&self, page: u64, limit: u64) -> DomainResult<(Vec<Booking>, u64)> {
        self.repos.bookings().list(page, limit).await
    }

    /// Operator status transition.
    ///
    /// Writing the current status again is a no-op. `paid -> pending` is
    /// rejected; entering `paid` dispatches the confirmation SMS.
    pub async fn set_status(&self, id: &str, target: BookingStatus) -> DomainResult<Booking> {
        let mut booking = self.get(id).await?;

        if booking.status == target {
            return Ok(booking);
        }

        if !booking.status.can_transition_to(target) {
            return Err(DomainError::Validation(format!(
                "cannot move booking {} from {} to {}",
                id, booking.status, target
            )));
        }

        match target {
            BookingStatus::Paid => booking.confirm_paid(),
            BookingStatus::Cancelled => booking.cancel(),
            BookingStatus::Pending => booking.restore(),
        }

        self.repos.bookings().update(booking.clone()).await?;
        info!("Booking {} moved to {}", booking.id, booking.status);

        if booking.status == BookingStatus::Paid {
            self.dispatch_paid_sms(&booking);
        }

        Ok(booking)
    }

    /// Cancel a booking, releasing its seat in the same write.
    pub async fn cancel_booking(&self, id: &str) -> DomainResult<Booking> {
        self.set_status(id, BookingStatus::Cancelled).await
    }

    /// Confirm payment from the gateway webhook, recording its metadata.
    pub async fn confirm_payment(
        &self,
        id: &str,
        payment_reference: String,
        receipt_url: Option<String>,
    ) -> DomainResult<Booking> {
        let mut booking = self.get(id).await?;
        booking.mark_paid(payment_reference, receipt_url);
        self.repos.bookings().update(booking.clone()).await?;
        info!("Booking {} confirmed paid", booking.id);
        self.dispatch_paid_sms(&booking);
        Ok(booking)
    }

    /// Fire-and-forget confirmation SMS: one attempt per transition into
    /// `paid`, detached from the request path. The status change is already
    /// durable before this runs, so delivery failure only gets logged.
    pub fn dispatch_paid_sms(&self, booking: &Booking) {
        let sms = Arc::clone(&self.sms);
        let repos = Arc::clone(&self.repos);
        let booking = booking.clone();

        tokio::spawn(async move {
            let route = match repos.catalog().find_destination(booking.destination_id).await {
                Ok(Some(destination)) => destination.name,
                _ => "your trip".to_string(),
            };
            let message = format!(
                "Payment received for {}: seat {}, amount {:.2}. Ref {}.",
                route,
                booking.seat_number,
                booking.amount as f64 / 100.0,
                booking.short_reference()
            );

            match sms.send(&booking.phone, &message).await {
                Ok(()) => {
                    metrics::counter!("sms_sent_total").increment(1);
                }
                Err(e) => {
                    warn!("SMS delivery failed for booking {}: {}", booking.id, e);
                    metrics::counter!("sms_failed_total").increment(1);
                }
            }
        });
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::testutil::{
        drain_tasks, seed, test_repos, Fixture, RecordingSms,
    };
    use crate::domain::bus::SeatAvailability;

    fn details(fx: &Fixture) -> BookingDetails {
        BookingDetails {
            full_name: "Ama Mensah".to_string(),
            passenger_class: None,
            email: Some("ama@example.com".to_string()),
            phone: "+233200000001".to_string(),
            emergency_contact: None,
            pickup_point_id: fx.pickup_point_id,
            destination_id: fx.destination_id,
            referral_id: None,
        }
    }

    async fn setup() -> (Arc<dyn RepositoryProvider>, Arc<RecordingSms>, BookingService, Fixture)
    {
        let repos = test_repos().await;
        let fx = seed(&repos).await;
        let sms = Arc::new(RecordingSms::default());
        let service = BookingService::new(Arc::clone(&repos), sms.clone());
        (repos, sms, service, fx)
    }

    #[tokio::test]
    async fn booking_captures_destination_price() {
        let (_, _, service, fx) = setup().await;

        let booking = service
            .attempt_booking(fx.bus_id, 1, details(&fx))
            .await
            .unwrap();

        assert_eq!(booking.status, BookingStatus::Pending);
        assert_eq!(booking.amount, 15000);
        assert_eq!(booking.bus_id, fx.bus_id);
    }

    #[tokio::test]
    async fn second_booking_for_live_seat_is_rejected() {
        let (_, _, service, fx) = setup().await;

        service
            .attempt_booking(fx.bus_id, 2, details(&fx))
            .await
            .unwrap();

        let err = service
            .attempt_booking(fx.bus_id, 2, details(&fx))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            DomainError::SeatTaken { seat_number: 2, .. }
        ));
    }

    #[tokio::test]
    async fn concurrent_attempts_for_one_seat_have_exactly_one_winner() {
        let (repos, _, service, fx) = setup().await;
        let service = Arc::new(service);

        let a = tokio::spawn({
            let service = Arc::clone(&service);
            let details = details(&fx);
            let bus_id = fx.bus_id;
            async move { service.attempt_booking(bus_id, 2, details).await }
        });
        let b = tokio::spawn({
            let service = Arc::clone(&service);
            let details = details(&fx);
            let bus_id = fx.bus_id;
            async move { service.attempt_booking(bus_id, 2, details).await }
        });

        let results = [a.await.unwrap(), b.await.unwrap()];
        let winners = results.iter().filter(|r| r.is_ok()).count();
        assert_eq!(winners, 1);
        assert!(results.iter().any(|r| matches!(
            r,
            Err(DomainError::SeatTaken { seat_number: 2, .. })
        )));

        let live = repos.bookings().find_live_for_bus(fx.bus_id).await.unwrap();
        assert_eq!(live.len(), 1);
    }

    #[tokio::test]
    async fn inactive_seat_is_rejected_without_touching_the_ledger() {
        let (repos, _, service, fx) = setup().await;

        repos
            .buses()
            .set_seat_active(fx.bus_id, 1, false)
            .await
            .unwrap();

        let err = service
            .attempt_booking(fx.bus_id, 1, details(&fx))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::SeatInactive { .. }));

        let live = repos.bookings().find_live_for_bus(fx.bus_id).await.unwrap();
        assert!(live.is_empty());
    }

    #[tokio::test]
    async fn unknown_seat_and_destination_are_not_found() {
        let (_, _, service, fx) = setup().await;

        let err = service
            .attempt_booking(fx.bus_id, 99, details(&fx))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound { entity: "Seat", .. }));

        let mut bad = details(&fx);
        bad.destination_id = 999;
        let err = service
            .attempt_booking(fx.bus_id, 1, bad)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            DomainError::NotFound {
                entity: "Destination",
                ..
            }
        ));
    }

    #[tokio::test]
    async fn seat_status_derives_from_ledger_and_registry() {
        let (repos, _, service, fx) = setup().await;

        let booking = service
            .attempt_booking(fx.bus_id, 1, details(&fx))
            .await
            .unwrap();
        service
            .set_status(&booking.id, BookingStatus::Paid)
            .await
            .unwrap();
        repos
            .buses()
            .set_seat_active(fx.bus_id, 3, false)
            .await
            .unwrap();

        let seats = service.seat_status(fx.bus_id).await.unwrap();
        assert_eq!(seats.len(), 3);

        assert_eq!(seats[0].seat_number, 1);
        assert!(seats[0].is_active);
        assert_eq!(seats[0].status, SeatAvailability::Taken);

        assert_eq!(seats[1].seat_number, 2);
        assert!(seats[1].is_active);
        assert_eq!(seats[1].status, SeatAvailability::Available);

        // Inactive seats report real availability; bookability is the
        // caller's combination of both fields.
        assert_eq!(seats[2].seat_number, 3);
        assert!(!seats[2].is_active);
        assert_eq!(seats[2].status, SeatAvailability::Available);
    }

    #[tokio::test]
    async fn cancelling_releases_the_seat_for_rebooking() {
        let (_, _, service, fx) = setup().await;

        let first = service
            .attempt_booking(fx.bus_id, 1, details(&fx))
            .await
            .unwrap();
        service.cancel_booking(&first.id).await.unwrap();

        let second = service
            .attempt_booking(fx.bus_id, 1, details(&fx))
            .await
            .unwrap();
        assert_ne!(first.id, second.id);
        assert_eq!(second.status, BookingStatus::Pending);
    }

    #[tokio::test]
    async fn restore_collides_with_a_live_booking() {
        let (_, _, service, fx) = setup().await;

        let first = service
            .attempt_booking(fx.bus_id, 1, details(&fx))
            .await
            .unwrap();
        service.cancel_booking(&first.id).await.unwrap();
        service
            .attempt_booking(fx.bus_id, 1, details(&fx))
            .await
            .unwrap();

        let err = service
            .set_status(&first.id, BookingStatus::Pending)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::SeatTaken { .. }));
    }

    #[tokio::test]
    async fn paid_never_returns_to_pending() {
        let (_, _, service, fx) = setup().await;

        let booking = service
            .attempt_booking(fx.bus_id, 1, details(&fx))
            .await
            .unwrap();
        service
            .set_status(&booking.id, BookingStatus::Paid)
            .await
            .unwrap();

        let err = service
            .set_status(&booking.id, BookingStatus::Pending)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[tokio::test]
    async fn same_status_write_is_a_noop() {
        let (_, sms, service, fx) = setup().await;

        let booking = service
            .attempt_booking(fx.bus_id, 1, details(&fx))
            .await
            .unwrap();
        let unchanged = service
            .set_status(&booking.id, BookingStatus::Pending)
            .await
            .unwrap();

        assert_eq!(unchanged.updated_at, booking.updated_at);
        drain_tasks().await;
        assert!(sms.sent().is_empty());
    }

    #[tokio::test]
    async fn entering_paid_sends_one_sms() {
        let (_, sms, service, fx) = setup().await;

        let booking = service
            .attempt_booking(fx.bus_id, 2, details(&fx))
            .await
            .unwrap();
        service
            .set_status(&booking.id, BookingStatus::Paid)
            .await
            .unwrap();
        drain_tasks().await;

        let sent = sms.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, "+233200000001");
        assert!(sent[0].1.contains("Kumasi"));
        assert!(sent[0].1.contains("seat 2"));
    }

    #[tokio::test]
    async fn sms_failure_does_not_affect_the_transition() {
        let repos = test_repos().await;
        let fx = seed(&repos).await;
        let sms = Arc::new(RecordingSms::failing());
        let service = BookingService::new(Arc::clone(&repos), sms);

        let booking = service
            .attempt_booking(fx.bus_id, 1, details(&fx))
            .await
            .unwrap();
        service
            .set_status(&booking.id, BookingStatus::Paid)
            .await
            .unwrap();
        drain_tasks().await;

        let reloaded = service.get(&booking.id).await.unwrap();
        assert_eq!(reloaded.status, BookingStatus::Paid);
    }
}
