//! SeaORM implementation of BookingRepository

use async_trait::async_trait;
use log::debug;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Set, SqlErr,
};

use crate::domain::booking::{Booking, BookingRepository, BookingStatus};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::booking;

pub struct SeaOrmBookingRepository {
    db: DatabaseConnection,
}

impl SeaOrmBookingRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn model_to_domain(m: booking::Model) -> Booking {
    Booking {
        id: m.id,
        full_name: m.full_name,
        passenger_class: m.passenger_class,
        email: m.email,
        phone: m.phone,
        emergency_contact: m.emergency_contact,
        bus_id: m.bus_id,
        seat_number: m.seat_number,
        destination_id: m.destination_id,
        pickup_point_id: m.pickup_point_id,
        referral_id: m.referral_id,
        amount: m.amount,
        status: BookingStatus::from_str(&m.status),
        payment_reference: m.payment_reference,
        receipt_url: m.receipt_url,
        created_at: m.created_at,
        updated_at: m.updated_at,
    }
}

fn domain_to_active(b: &Booking) -> booking::ActiveModel {
    booking::ActiveModel {
        id: Set(b.id.clone()),
        full_name: Set(b.full_name.clone()),
        passenger_class: Set(b.passenger_class.clone()),
        email: Set(b.email.clone()),
        phone: Set(b.phone.clone()),
        emergency_contact: Set(b.emergency_contact.clone()),
        bus_id: Set(b.bus_id),
        seat_number: Set(b.seat_number),
        destination_id: Set(b.destination_id),
        pickup_point_id: Set(b.pickup_point_id),
        referral_id: Set(b.referral_id),
        amount: Set(b.amount),
        status: Set(b.status.as_str().to_string()),
        payment_reference: Set(b.payment_reference.clone()),
        receipt_url: Set(b.receipt_url.clone()),
        created_at: Set(b.created_at),
        updated_at: Set(b.updated_at),
    }
}

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Storage(e.to_string())
}

fn live_condition() -> Condition {
    Condition::any()
        .add(booking::Column::Status.eq(BookingStatus::Pending.as_str()))
        .add(booking::Column::Status.eq(BookingStatus::Paid.as_str()))
}

// ── BookingRepository impl ──────────────────────────────────────

#[async_trait]
impl BookingRepository for SeaOrmBookingRepository {
    async fn insert(&self, b: Booking) -> DomainResult<Booking> {
        debug!("Inserting booking {} for bus {} seat {}", b.id, b.bus_id, b.seat_number);

        let bus_id = b.bus_id;
        let seat_number = b.seat_number;
        let model = domain_to_active(&b);

        match model.insert(&self.db).await {
            Ok(saved) => Ok(model_to_domain(saved)),
            // The partial unique index over live rows is the allocation
            // invariant; a violation means the seat is held.
            Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                Err(DomainError::SeatTaken { bus_id, seat_number })
            }
            Err(e) => Err(db_err(e)),
        }
    }

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Booking>> {
        let model = booking::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn update(&self, b: Booking) -> DomainResult<()> {
        debug!("Updating booking {} (status={})", b.id, b.status);

        let existing = booking::Entity::find_by_id(&b.id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        if existing.is_none() {
            return Err(DomainError::NotFound {
                entity: "Booking",
                field: "id",
                value: b.id.clone(),
            });
        }

        let model = domain_to_active(&b);
        match model.update(&self.db).await {
            Ok(_) => Ok(()),
            // Restoring a cancelled booking can collide with a live one
            Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                Err(DomainError::SeatTaken {
                    bus_id: b.bus_id,
                    seat_number: b.seat_number,
                })
            }
            Err(e) => Err(db_err(e)),
        }
    }

    async fn find_live_for_bus(&self, bus_id: i32) -> DomainResult<Vec<Booking>> {
        let models = booking::Entity::find()
            .filter(booking::Column::BusId.eq(bus_id))
            .filter(live_condition())
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }

    async fn list(&self, page: u64, limit: u64) -> DomainResult<(Vec<Booking>, u64)> {
        let paginator = booking::Entity::find()
            .order_by_desc(booking::Column::CreatedAt)
            .paginate(&self.db, limit.max(1));

        let total = paginator.num_items().await.map_err(db_err)?;
        let models = paginator
            .fetch_page(page.saturating_sub(1))
            .await
            .map_err(db_err)?;

        Ok((models.into_iter().map(model_to_domain).collect(), total))
    }

    async fn exists_for_bus(&self, bus_id: i32) -> DomainResult<bool> {
        let count = booking::Entity::find()
            .filter(booking::Column::BusId.eq(bus_id))
            .count(&self.db)
            .await
            .map_err(db_err)?;
        Ok(count > 0)
    }

    async fn exists_for_destination(&self, destination_id: i32) -> DomainResult<bool> {
        let count = booking::Entity::find()
            .filter(booking::Column::DestinationId.eq(destination_id))
            .count(&self.db)
            .await
            .map_err(db_err)?;
        Ok(count > 0)
    }

    async fn exists_for_pickup_point(&self, pickup_point_id: i32) -> DomainResult<bool> {
        let count = booking::Entity::find()
            .filter(booking::Column::PickupPointId.eq(pickup_point_id))
            .count(&self.db)
            .await
            .map_err(db_err)?;
        Ok(count > 0)
    }

    async fn exists_for_referral(&self, referral_id: i32) -> DomainResult<bool> {
        let count = booking::Entity::find()
            .filter(booking::Column::ReferralId.eq(referral_id))
            .count(&self.db)
            .await
            .map_err(db_err)?;
        Ok(count > 0)
    }
}
