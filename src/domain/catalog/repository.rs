//! Reference-data repository interface

use async_trait::async_trait;

use super::model::{BusType, Destination, PickupPoint, Referral};
use crate::domain::DomainResult;

#[async_trait]
pub trait CatalogRepository: Send + Sync {
    // ── Bus types ──────────────────────────────────────────────
    async fn create_bus_type(&self, name: &str, seat_count: i32) -> DomainResult<BusType>;
    async fn find_bus_type(&self, id: i32) -> DomainResult<Option<BusType>>;
    async fn list_bus_types(&self) -> DomainResult<Vec<BusType>>;
    async fn delete_bus_type(&self, id: i32) -> DomainResult<()>;

    // ── Destinations ───────────────────────────────────────────
    async fn create_destination(&self, name: &str, price: i64) -> DomainResult<Destination>;
    async fn find_destination(&self, id: i32) -> DomainResult<Option<Destination>>;
    async fn list_destinations(&self) -> DomainResult<Vec<Destination>>;
    /// Update the fare; already-created bookings keep their captured amount
    async fn update_destination_price(&self, id: i32, price: i64) -> DomainResult<()>;
    async fn delete_destination(&self, id: i32) -> DomainResult<()>;

    // ── Pickup points ──────────────────────────────────────────
    async fn create_pickup_point(&self, name: &str) -> DomainResult<PickupPoint>;
    async fn find_pickup_point(&self, id: i32) -> DomainResult<Option<PickupPoint>>;
    async fn list_pickup_points(&self) -> DomainResult<Vec<PickupPoint>>;
    async fn delete_pickup_point(&self, id: i32) -> DomainResult<()>;

    // ── Referrals ──────────────────────────────────────────────
    async fn create_referral(&self, name: &str, phone: Option<&str>) -> DomainResult<Referral>;
    async fn find_referral(&self, id: i32) -> DomainResult<Option<Referral>>;
    async fn list_referrals(&self) -> DomainResult<Vec<Referral>>;
    async fn delete_referral(&self, id: i32) -> DomainResult<()>;
}
