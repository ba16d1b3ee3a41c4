//! Reference-data API data transfer objects

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::catalog::{BusType, Destination, PickupPoint, Referral};

// ── Bus types ──────────────────────────────────────────────────

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateBusTypeRequest {
    #[validate(length(min = 1, max = 80))]
    pub name: String,
    #[validate(range(min = 1, max = 200, message = "must be 1-200"))]
    pub seat_count: i32,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BusTypeDto {
    pub id: i32,
    pub name: String,
    pub seat_count: i32,
    pub created_at: String,
}

impl From<BusType> for BusTypeDto {
    fn from(t: BusType) -> Self {
        Self {
            id: t.id,
            name: t.name,
            seat_count: t.seat_count,
            created_at: t.created_at.to_rfc3339(),
        }
    }
}

// ── Destinations ───────────────────────────────────────────────

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateDestinationRequest {
    #[validate(length(min = 1, max = 120))]
    pub name: String,
    /// Fare in minor currency units
    #[validate(range(min = 1))]
    pub price: i64,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateDestinationPriceRequest {
    /// New fare in minor currency units. Existing bookings keep the amount
    /// captured at creation time.
    #[validate(range(min = 1))]
    pub price: i64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DestinationDto {
    pub id: i32,
    pub name: String,
    pub price: i64,
    pub created_at: String,
}

impl From<Destination> for DestinationDto {
    fn from(d: Destination) -> Self {
        Self {
            id: d.id,
            name: d.name,
            price: d.price,
            created_at: d.created_at.to_rfc3339(),
        }
    }
}

// ── Pickup points ──────────────────────────────────────────────

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreatePickupPointRequest {
    #[validate(length(min = 1, max = 120))]
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PickupPointDto {
    pub id: i32,
    pub name: String,
    pub created_at: String,
}

impl From<PickupPoint> for PickupPointDto {
    fn from(p: PickupPoint) -> Self {
        Self {
            id: p.id,
            name: p.name,
            created_at: p.created_at.to_rfc3339(),
        }
    }
}

// ── Referrals ──────────────────────────────────────────────────

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateReferralRequest {
    #[validate(length(min = 1, max = 120))]
    pub name: String,
    #[validate(length(max = 20))]
    pub phone: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ReferralDto {
    pub id: i32,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub created_at: String,
}

impl From<Referral> for ReferralDto {
    fn from(r: Referral) -> Self {
        Self {
            id: r.id,
            name: r.name,
            phone: r.phone,
            created_at: r.created_at.to_rfc3339(),
        }
    }
}
