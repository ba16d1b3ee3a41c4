//! Bus and seat domain entities

use chrono::{DateTime, Utc};

/// A bus in the fleet
#[derive(Debug, Clone)]
pub struct Bus {
    pub id: i32,
    pub name: String,
    /// Bus type fixes the total seat count at provisioning time
    pub bus_type_id: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// One seat on a bus. Seats are provisioned in bulk when the bus is
/// created and only ever toggled active/inactive afterwards.
#[derive(Debug, Clone)]
pub struct Seat {
    pub id: i32,
    pub bus_id: i32,
    /// Unique within the bus
    pub seat_number: i32,
    /// Operator-controlled flag, independent of booking state
    pub is_active: bool,
}

/// Derived availability of a seat, from the booking ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeatAvailability {
    Available,
    Taken,
}

impl SeatAvailability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Taken => "taken",
        }
    }
}

impl std::fmt::Display for SeatAvailability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One row of the per-bus seat status view.
///
/// Carries no passenger data, so it is safe to expose to unauthenticated
/// callers. An inactive seat still reports its real availability; callers
/// combine the two fields (inactive seats are never bookable).
#[derive(Debug, Clone)]
pub struct SeatStatus {
    pub seat_number: i32,
    pub is_active: bool,
    pub status: SeatAvailability,
}
