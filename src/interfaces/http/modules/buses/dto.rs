//! Bus API data transfer objects

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::bus::SeatStatus;
use crate::domain::Bus;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateBusRequest {
    #[validate(length(min = 1, max = 80, message = "must be 1-80 characters"))]
    pub name: String,
    #[validate(range(min = 1))]
    pub bus_type_id: i32,
}

/// Operator toggle for a seat's active flag.
#[derive(Debug, Deserialize, ToSchema)]
pub struct SetSeatActiveRequest {
    pub is_active: bool,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BusDto {
    pub id: i32,
    pub name: String,
    pub bus_type_id: i32,
    pub is_active: bool,
    pub created_at: String,
}

impl From<Bus> for BusDto {
    fn from(b: Bus) -> Self {
        Self {
            id: b.id,
            name: b.name,
            bus_type_id: b.bus_type_id,
            is_active: b.is_active,
            created_at: b.created_at.to_rfc3339(),
        }
    }
}

/// One row of the public availability view. Carries no passenger data.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SeatStatusDto {
    pub seat_number: i32,
    pub is_active: bool,
    /// "available" or "taken", derived from the booking ledger
    pub status: String,
}

impl From<SeatStatus> for SeatStatusDto {
    fn from(s: SeatStatus) -> Self {
        Self {
            seat_number: s.seat_number,
            is_active: s.is_active,
            status: s.status.to_string(),
        }
    }
}
