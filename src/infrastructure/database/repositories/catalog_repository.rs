//! SeaORM implementation of CatalogRepository

use async_trait::async_trait;
use log::debug;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, NotSet, QueryOrder, Set,
};

use crate::domain::catalog::{BusType, CatalogRepository, Destination, PickupPoint, Referral};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::{bus_type, destination, pickup_point, referral};

pub struct SeaOrmCatalogRepository {
    db: DatabaseConnection,
}

impl SeaOrmCatalogRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn bus_type_to_domain(m: bus_type::Model) -> BusType {
    BusType {
        id: m.id,
        name: m.name,
        seat_count: m.seat_count,
        created_at: m.created_at,
    }
}

fn destination_to_domain(m: destination::Model) -> Destination {
    Destination {
        id: m.id,
        name: m.name,
        price: m.price,
        created_at: m.created_at,
    }
}

fn pickup_point_to_domain(m: pickup_point::Model) -> PickupPoint {
    PickupPoint {
        id: m.id,
        name: m.name,
        created_at: m.created_at,
    }
}

fn referral_to_domain(m: referral::Model) -> Referral {
    Referral {
        id: m.id,
        name: m.name,
        phone: m.phone,
        created_at: m.created_at,
    }
}

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Storage(e.to_string())
}

fn not_found(entity: &'static str, id: i32) -> DomainError {
    DomainError::NotFound {
        entity,
        field: "id",
        value: id.to_string(),
    }
}

// ── CatalogRepository impl ──────────────────────────────────────

#[async_trait]
impl CatalogRepository for SeaOrmCatalogRepository {
    // ── Bus types ──────────────────────────────────────────────

    async fn create_bus_type(&self, name: &str, seat_count: i32) -> DomainResult<BusType> {
        debug!("Creating bus type '{}' ({} seats)", name, seat_count);
        let model = bus_type::ActiveModel {
            id: NotSet,
            name: Set(name.to_string()),
            seat_count: Set(seat_count),
            created_at: Set(chrono::Utc::now()),
        };
        let saved = model.insert(&self.db).await.map_err(db_err)?;
        Ok(bus_type_to_domain(saved))
    }

    async fn find_bus_type(&self, id: i32) -> DomainResult<Option<BusType>> {
        let model = bus_type::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(bus_type_to_domain))
    }

    async fn list_bus_types(&self) -> DomainResult<Vec<BusType>> {
        let models = bus_type::Entity::find()
            .order_by_asc(bus_type::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(bus_type_to_domain).collect())
    }

    async fn delete_bus_type(&self, id: i32) -> DomainResult<()> {
        let res = bus_type::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        if res.rows_affected == 0 {
            return Err(not_found("BusType", id));
        }
        Ok(())
    }

    // ── Destinations ───────────────────────────────────────────

    async fn create_destination(&self, name: &str, price: i64) -> DomainResult<Destination> {
        debug!("Creating destination '{}' (price {})", name, price);
        let model = destination::ActiveModel {
            id: NotSet,
            name: Set(name.to_string()),
            price: Set(price),
            created_at: Set(chrono::Utc::now()),
        };
        let saved = model.insert(&self.db).await.map_err(db_err)?;
        Ok(destination_to_domain(saved))
    }

    async fn find_destination(&self, id: i32) -> DomainResult<Option<Destination>> {
        let model = destination::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(destination_to_domain))
    }

    async fn list_destinations(&self) -> DomainResult<Vec<Destination>> {
        let models = destination::Entity::find()
            .order_by_asc(destination::Column::Name)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(destination_to_domain).collect())
    }

    async fn update_destination_price(&self, id: i32, price: i64) -> DomainResult<()> {
        let existing = destination::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?
            .ok_or_else(|| not_found("Destination", id))?;

        let mut active: destination::ActiveModel = existing.into();
        active.price = Set(price);
        active.update(&self.db).await.map_err(db_err)?;
        Ok(())
    }

    async fn delete_destination(&self, id: i32) -> DomainResult<()> {
        let res = destination::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        if res.rows_affected == 0 {
            return Err(not_found("Destination", id));
        }
        Ok(())
    }

    // ── Pickup points ──────────────────────────────────────────

    async fn create_pickup_point(&self, name: &str) -> DomainResult<PickupPoint> {
        let model = pickup_point::ActiveModel {
            id: NotSet,
            name: Set(name.to_string()),
            created_at: Set(chrono::Utc::now()),
        };
        let saved = model.insert(&self.db).await.map_err(db_err)?;
        Ok(pickup_point_to_domain(saved))
    }

    async fn find_pickup_point(&self, id: i32) -> DomainResult<Option<PickupPoint>> {
        let model = pickup_point::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(pickup_point_to_domain))
    }

    async fn list_pickup_points(&self) -> DomainResult<Vec<PickupPoint>> {
        let models = pickup_point::Entity::find()
            .order_by_asc(pickup_point::Column::Name)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(pickup_point_to_domain).collect())
    }

    async fn delete_pickup_point(&self, id: i32) -> DomainResult<()> {
        let res = pickup_point::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        if res.rows_affected == 0 {
            return Err(not_found("PickupPoint", id));
        }
        Ok(())
    }

    // ── Referrals ──────────────────────────────────────────────

    async fn create_referral(&self, name: &str, phone: Option<&str>) -> DomainResult<Referral> {
        let model = referral::ActiveModel {
            id: NotSet,
            name: Set(name.to_string()),
            phone: Set(phone.map(str::to_string)),
            created_at: Set(chrono::Utc::now()),
        };
        let saved = model.insert(&self.db).await.map_err(db_err)?;
        Ok(referral_to_domain(saved))
    }

    async fn find_referral(&self, id: i32) -> DomainResult<Option<Referral>> {
        let model = referral::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(referral_to_domain))
    }

    async fn list_referrals(&self) -> DomainResult<Vec<Referral>> {
        let models = referral::Entity::find()
            .order_by_asc(referral::Column::Name)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(referral_to_domain).collect())
    }

    async fn delete_referral(&self, id: i32) -> DomainResult<()> {
        let res = referral::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        if res.rows_affected == 0 {
            return Err(not_found("Referral", id));
        }
        Ok(())
    }
}
