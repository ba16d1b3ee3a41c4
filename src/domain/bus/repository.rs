//! Bus and seat registry interface

use async_trait::async_trait;

use super::model::{Bus, Seat};
use crate::domain::DomainResult;

#[async_trait]
pub trait BusRepository: Send + Sync {
    /// Create a bus and provision its seats (1..=seat_count) in one
    /// transaction.
    async fn create_with_seats(&self, name: &str, bus_type_id: i32, seat_count: i32)
        -> DomainResult<Bus>;

    /// Find bus by ID
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Bus>>;

    /// All buses, newest first
    async fn find_all(&self) -> DomainResult<Vec<Bus>>;

    /// Delete a bus; its seats cascade. Callers must have verified no
    /// bookings reference the bus.
    async fn delete(&self, id: i32) -> DomainResult<()>;

    /// Whether any bus uses the given bus type
    async fn exists_with_bus_type(&self, bus_type_id: i32) -> DomainResult<bool>;

    /// All seats for a bus, ordered by seat number ascending
    async fn seats_for_bus(&self, bus_id: i32) -> DomainResult<Vec<Seat>>;

    /// A single seat by (bus, seat number)
    async fn find_seat(&self, bus_id: i32, seat_number: i32) -> DomainResult<Option<Seat>>;

    /// Toggle a seat's operator-controlled active flag
    async fn set_seat_active(&self, bus_id: i32, seat_number: i32, active: bool)
        -> DomainResult<()>;
}
