//! Reference-data entities: bus types, destinations, pickup points, referrals

use chrono::{DateTime, Utc};

/// Bus type; fixes the seat count for buses of this type
#[derive(Debug, Clone)]
pub struct BusType {
    pub id: i32,
    pub name: String,
    pub seat_count: i32,
    pub created_at: DateTime<Utc>,
}

/// Travel destination; its price is copied onto bookings at creation time
#[derive(Debug, Clone)]
pub struct Destination {
    pub id: i32,
    pub name: String,
    /// Fare in minor currency units
    pub price: i64,
    pub created_at: DateTime<Utc>,
}

/// Boarding location
#[derive(Debug, Clone)]
pub struct PickupPoint {
    pub id: i32,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// Referral source credited on a booking
#[derive(Debug, Clone)]
pub struct Referral {
    pub id: i32,
    pub name: String,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
}
