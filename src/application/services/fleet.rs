//! Fleet and reference-data service: bus provisioning, seat toggling,
//! and deletion guards for rows the booking ledger references.

use std::sync::Arc;

use log::info;

use crate::domain::{Bus, DomainError, DomainResult, RepositoryProvider};

pub struct FleetService {
    repos: Arc<dyn RepositoryProvider>,
}

impl FleetService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    /// Create a bus, provisioning one seat row per seat number up to the
    /// bus type's seat count, all in one transaction.
    pub async fn create_bus(&self, name: &str, bus_type_id: i32) -> DomainResult<Bus> {
        let bus_type = self
            .repos
            .catalog()
            .find_bus_type(bus_type_id)
            .await?
            .ok_or(DomainError::NotFound {
                entity: "BusType",
                field: "id",
                value: bus_type_id.to_string(),
            })?;

        let bus = self
            .repos
            .buses()
            .create_with_seats(name, bus_type_id, bus_type.seat_count)
            .await?;

        info!(
            "Bus {} '{}' created with {} seats",
            bus.id, bus.name, bus_type.seat_count
        );
        Ok(bus)
    }

    /// Delete a bus and its seats. Rejected while any booking (in any
    /// status, history included) references the bus.
    pub async fn delete_bus(&self, id: i32) -> DomainResult<()> {
        if self.repos.bookings().exists_for_bus(id).await? {
            return Err(DomainError::DependencyInUse {
                entity: "Bus",
                id: id.to_string(),
            });
        }
        self.repos.buses().delete(id).await
    }

    /// Toggle a seat's operator-controlled active flag. Independent of the
    /// booking ledger: deactivating a taken seat keeps the booking.
    pub async fn set_seat_active(
        &self,
        bus_id: i32,
        seat_number: i32,
        active: bool,
    ) -> DomainResult<()> {
        self.repos
            .buses()
            .set_seat_active(bus_id, seat_number, active)
            .await?;
        info!(
            "Seat {} on bus {} set {}",
            seat_number,
            bus_id,
            if active { "active" } else { "inactive" }
        );
        Ok(())
    }

    /// Delete a bus type. Rejected while any bus is provisioned from it.
    pub async fn delete_bus_type(&self, id: i32) -> DomainResult<()> {
        if self.repos.buses().exists_with_bus_type(id).await? {
            return Err(DomainError::DependencyInUse {
                entity: "BusType",
                id: id.to_string(),
            });
        }
        self.repos.catalog().delete_bus_type(id).await
    }

    pub async fn delete_destination(&self, id: i32) -> DomainResult<()> {
        if self.repos.bookings().exists_for_destination(id).await? {
            return Err(DomainError::DependencyInUse {
                entity: "Destination",
                id: id.to_string(),
            });
        }
        self.repos.catalog().delete_destination(id).await
    }

    pub async fn delete_pickup_point(&self, id: i32) -> DomainResult<()> {
        if self.repos.bookings().exists_for_pickup_point(id).await? {
            return Err(DomainError::DependencyInUse {
                entity: "PickupPoint",
                id: id.to_string(),
            });
        }
        self.repos.catalog().delete_pickup_point(id).await
    }

    pub async fn delete_referral(&self, id: i32) -> DomainResult<()> {
        if self.repos.bookings().exists_for_referral(id).await? {
            return Err(DomainError::DependencyInUse {
                entity: "Referral",
                id: id.to_string(),
            });
        }
        self.repos.catalog().delete_referral(id).await
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::testutil::{seed, test_repos, RecordingSms};
    use crate::application::BookingService;
    use crate::domain::BookingDetails;

    async fn setup() -> (Arc<dyn RepositoryProvider>, FleetService) {
        let repos = test_repos().await;
        (Arc::clone(&repos), FleetService::new(repos))
    }

    #[tokio::test]
    async fn create_bus_provisions_seats_from_its_type() {
        let (repos, fleet) = setup().await;
        let bus_type = repos.catalog().create_bus_type("Coach", 45).await.unwrap();

        let bus = fleet.create_bus("Bus B", bus_type.id).await.unwrap();

        let seats = repos.buses().seats_for_bus(bus.id).await.unwrap();
        assert_eq!(seats.len(), 45);
        assert_eq!(seats.first().map(|s| s.seat_number), Some(1));
        assert_eq!(seats.last().map(|s| s.seat_number), Some(45));
        assert!(seats.iter().all(|s| s.is_active));
    }

    #[tokio::test]
    async fn create_bus_with_unknown_type_fails() {
        let (_, fleet) = setup().await;
        let err = fleet.create_bus("Bus C", 42).await.unwrap_err();
        assert!(matches!(
            err,
            DomainError::NotFound {
                entity: "BusType",
                ..
            }
        ));
    }

    #[tokio::test]
    async fn deleting_a_referenced_bus_is_blocked() {
        let repos = test_repos().await;
        let fx = seed(&repos).await;
        let fleet = FleetService::new(Arc::clone(&repos));
        let bookings = BookingService::new(
            Arc::clone(&repos),
            Arc::new(RecordingSms::default()),
        );

        let booking = bookings
            .attempt_booking(
                fx.bus_id,
                1,
                BookingDetails {
                    full_name: "Ama Mensah".to_string(),
                    passenger_class: None,
                    email: None,
                    phone: "+233200000001".to_string(),
                    emergency_contact: None,
                    pickup_point_id: fx.pickup_point_id,
                    destination_id: fx.destination_id,
                    referral_id: Some(fx.referral_id),
                },
            )
            .await
            .unwrap();

        let err = fleet.delete_bus(fx.bus_id).await.unwrap_err();
        assert!(matches!(
            err,
            DomainError::DependencyInUse { entity: "Bus", .. }
        ));

        let err = fleet.delete_destination(fx.destination_id).await.unwrap_err();
        assert!(matches!(err, DomainError::DependencyInUse { .. }));

        let err = fleet.delete_referral(fx.referral_id).await.unwrap_err();
        assert!(matches!(err, DomainError::DependencyInUse { .. }));

        // History still counts: a cancelled booking keeps the guard up.
        bookings.cancel_booking(&booking.id).await.unwrap();
        let err = fleet.delete_bus(fx.bus_id).await.unwrap_err();
        assert!(matches!(err, DomainError::DependencyInUse { .. }));
    }

    #[tokio::test]
    async fn deleting_an_unreferenced_bus_succeeds() {
        let repos = test_repos().await;
        let fx = seed(&repos).await;
        let fleet = FleetService::new(Arc::clone(&repos));

        fleet.delete_bus(fx.bus_id).await.unwrap();
        assert!(repos.buses().find_by_id(fx.bus_id).await.unwrap().is_none());
        // Seats cascade with their bus
        assert!(repos.buses().seats_for_bus(fx.bus_id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn bus_type_in_use_cannot_be_deleted() {
        let repos = test_repos().await;
        let fleet = FleetService::new(Arc::clone(&repos));
        let bus_type = repos.catalog().create_bus_type("Coach", 10).await.unwrap();
        fleet.create_bus("Bus D", bus_type.id).await.unwrap();

        let err = fleet.delete_bus_type(bus_type.id).await.unwrap_err();
        assert!(matches!(
            err,
            DomainError::DependencyInUse {
                entity: "BusType",
                ..
            }
        ));
    }

    #[tokio::test]
    async fn toggling_an_unknown_seat_is_not_found() {
        let repos = test_repos().await;
        let fx = seed(&repos).await;
        let fleet = FleetService::new(repos);

        fleet.set_seat_active(fx.bus_id, 1, false).await.unwrap();
        let err = fleet.set_seat_active(fx.bus_id, 99, false).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { entity: "Seat", .. }));
    }
}
