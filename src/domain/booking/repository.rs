//! Booking repository interface

use async_trait::async_trait;

use super::model::Booking;
use crate::domain::DomainResult;

#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Insert a new booking.
    ///
    /// The storage layer enforces the partial uniqueness constraint over
    /// (bus_id, seat_number) scoped to live statuses; a violation must be
    /// reported as `DomainError::SeatTaken`, never swallowed.
    async fn insert(&self, booking: Booking) -> DomainResult<Booking>;

    /// Find booking by ID
    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Booking>>;

    /// Persist an updated booking
    async fn update(&self, booking: Booking) -> DomainResult<()>;

    /// All live (pending or paid) bookings for a bus
    async fn find_live_for_bus(&self, bus_id: i32) -> DomainResult<Vec<Booking>>;

    /// Paginated listing, newest first; returns (page, total count)
    async fn list(&self, page: u64, limit: u64) -> DomainResult<(Vec<Booking>, u64)>;

    /// Whether any booking references the given bus
    async fn exists_for_bus(&self, bus_id: i32) -> DomainResult<bool>;

    /// Whether any booking references the given destination
    async fn exists_for_destination(&self, destination_id: i32) -> DomainResult<bool>;

    /// Whether any booking references the given pickup point
    async fn exists_for_pickup_point(&self, pickup_point_id: i32) -> DomainResult<bool>;

    /// Whether any booking references the given referral
    async fn exists_for_referral(&self, referral_id: i32) -> DomainResult<bool>;
}
