//! SeaORM implementation of BusRepository

use async_trait::async_trait;
use log::debug;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, PaginatorTrait,
    QueryFilter, QueryOrder, Set, TransactionTrait,
};

use crate::domain::bus::{Bus, BusRepository, Seat};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::{bus, seat};

pub struct SeaOrmBusRepository {
    db: DatabaseConnection,
}

impl SeaOrmBusRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn bus_to_domain(m: bus::Model) -> Bus {
    Bus {
        id: m.id,
        name: m.name,
        bus_type_id: m.bus_type_id,
        is_active: m.is_active,
        created_at: m.created_at,
    }
}

fn seat_to_domain(m: seat::Model) -> Seat {
    Seat {
        id: m.id,
        bus_id: m.bus_id,
        seat_number: m.seat_number,
        is_active: m.is_active,
    }
}

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Storage(e.to_string())
}

// ── BusRepository impl ──────────────────────────────────────────

#[async_trait]
impl BusRepository for SeaOrmBusRepository {
    async fn create_with_seats(
        &self,
        name: &str,
        bus_type_id: i32,
        seat_count: i32,
    ) -> DomainResult<Bus> {
        debug!("Creating bus '{}' with {} seats", name, seat_count);

        let txn = self.db.begin().await.map_err(db_err)?;

        let model = bus::ActiveModel {
            id: NotSet,
            name: Set(name.to_string()),
            bus_type_id: Set(bus_type_id),
            is_active: Set(true),
            created_at: Set(chrono::Utc::now()),
        };
        let saved = model.insert(&txn).await.map_err(db_err)?;

        let seats = (1..=seat_count).map(|n| seat::ActiveModel {
            id: NotSet,
            bus_id: Set(saved.id),
            seat_number: Set(n),
            is_active: Set(true),
        });
        seat::Entity::insert_many(seats)
            .exec(&txn)
            .await
            .map_err(db_err)?;

        txn.commit().await.map_err(db_err)?;
        Ok(bus_to_domain(saved))
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Bus>> {
        let model = bus::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(bus_to_domain))
    }

    async fn find_all(&self) -> DomainResult<Vec<Bus>> {
        let models = bus::Entity::find()
            .order_by_desc(bus::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(bus_to_domain).collect())
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        let res = bus::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;

        if res.rows_affected == 0 {
            return Err(DomainError::NotFound {
                entity: "Bus",
                field: "id",
                value: id.to_string(),
            });
        }
        Ok(())
    }

    async fn exists_with_bus_type(&self, bus_type_id: i32) -> DomainResult<bool> {
        let count = bus::Entity::find()
            .filter(bus::Column::BusTypeId.eq(bus_type_id))
            .count(&self.db)
            .await
            .map_err(db_err)?;
        Ok(count > 0)
    }

    async fn seats_for_bus(&self, bus_id: i32) -> DomainResult<Vec<Seat>> {
        let models = seat::Entity::find()
            .filter(seat::Column::BusId.eq(bus_id))
            .order_by_asc(seat::Column::SeatNumber)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(seat_to_domain).collect())
    }

    async fn find_seat(&self, bus_id: i32, seat_number: i32) -> DomainResult<Option<Seat>> {
        let model = seat::Entity::find()
            .filter(seat::Column::BusId.eq(bus_id))
            .filter(seat::Column::SeatNumber.eq(seat_number))
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(seat_to_domain))
    }

    async fn set_seat_active(
        &self,
        bus_id: i32,
        seat_number: i32,
        active: bool,
    ) -> DomainResult<()> {
        let existing = seat::Entity::find()
            .filter(seat::Column::BusId.eq(bus_id))
            .filter(seat::Column::SeatNumber.eq(seat_number))
            .one(&self.db)
            .await
            .map_err(db_err)?;

        let Some(existing) = existing else {
            return Err(DomainError::NotFound {
                entity: "Seat",
                field: "seat_number",
                value: format!("{} (bus {})", seat_number, bus_id),
            });
        };

        let mut active_model: seat::ActiveModel = existing.into();
        active_model.is_active = Set(active);
        active_model.update(&self.db).await.map_err(db_err)?;
        Ok(())
    }
}
