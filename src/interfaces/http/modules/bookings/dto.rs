//! Booking API data transfer objects

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::Booking;

/// Request to reserve a seat.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateBookingRequest {
    #[validate(length(min = 1, max = 120, message = "must be 1-120 characters"))]
    pub full_name: String,
    /// Free-form passenger class/level label
    #[validate(length(max = 60))]
    pub passenger_class: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    #[validate(length(min = 7, max = 20, message = "must be 7-20 characters"))]
    pub phone: String,
    #[validate(length(max = 20))]
    pub emergency_contact: Option<String>,
    #[validate(range(min = 1))]
    pub bus_id: i32,
    #[validate(range(min = 1))]
    pub seat_number: i32,
    #[validate(range(min = 1))]
    pub destination_id: i32,
    #[validate(range(min = 1))]
    pub pickup_point_id: i32,
    pub referral_id: Option<i32>,
}

/// Admin status transition request.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateStatusRequest {
    /// Target status: "pending", "paid" or "cancelled"
    pub status: String,
}

/// One booking, as exposed over the API.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BookingDto {
    pub id: String,
    pub full_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passenger_class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emergency_contact: Option<String>,
    pub bus_id: i32,
    pub seat_number: i32,
    pub destination_id: i32,
    pub pickup_point_id: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referral_id: Option<i32>,
    /// Amount in minor currency units
    pub amount: i64,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt_url: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Booking> for BookingDto {
    fn from(b: Booking) -> Self {
        Self {
            id: b.id,
            full_name: b.full_name,
            passenger_class: b.passenger_class,
            email: b.email,
            phone: b.phone,
            emergency_contact: b.emergency_contact,
            bus_id: b.bus_id,
            seat_number: b.seat_number,
            destination_id: b.destination_id,
            pickup_point_id: b.pickup_point_id,
            referral_id: b.referral_id,
            amount: b.amount,
            status: b.status.to_string(),
            payment_reference: b.payment_reference,
            receipt_url: b.receipt_url,
            created_at: b.created_at.to_rfc3339(),
            updated_at: b.updated_at.to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::BookingDetails;

    #[test]
    fn dto_carries_status_as_lowercase_string() {
        let booking = Booking::new(
            1,
            7,
            BookingDetails {
                full_name: "Kofi Owusu".to_string(),
                passenger_class: None,
                email: None,
                phone: "+233200000002".to_string(),
                emergency_contact: None,
                pickup_point_id: 1,
                destination_id: 2,
                referral_id: None,
            },
            25000,
        );
        let dto = BookingDto::from(booking);
        assert_eq!(dto.status, "pending");
        assert_eq!(dto.seat_number, 7);
        let json = serde_json::to_string(&dto).unwrap();
        assert!(json.contains("\"status\":\"pending\""));
        // unset optionals are omitted entirely
        assert!(!json.contains("payment_reference"));
    }
}
