//! Booking entity
//!
//! The migrator adds a partial unique index on (bus_id, seat_number)
//! restricted to status IN ('pending', 'paid'); that index is the
//! seat-allocation invariant.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "bookings")]
pub struct Model {
    /// UUIDv4, also the payment gateway client reference
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    pub full_name: String,

    #[sea_orm(nullable)]
    pub passenger_class: Option<String>,

    #[sea_orm(nullable)]
    pub email: Option<String>,

    pub phone: String,

    #[sea_orm(nullable)]
    pub emergency_contact: Option<String>,

    pub bus_id: i32,
    pub seat_number: i32,
    pub destination_id: i32,
    pub pickup_point_id: i32,

    #[sea_orm(nullable)]
    pub referral_id: Option<i32>,

    /// Amount charged, minor currency units
    pub amount: i64,

    /// Booking status: pending, paid, cancelled
    pub status: String,

    #[sea_orm(nullable)]
    pub payment_reference: Option<String>,

    #[sea_orm(nullable)]
    pub receipt_url: Option<String>,

    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::bus::Entity",
        from = "Column::BusId",
        to = "super::bus::Column::Id"
    )]
    Bus,
    #[sea_orm(
        belongs_to = "super::destination::Entity",
        from = "Column::DestinationId",
        to = "super::destination::Column::Id"
    )]
    Destination,
    #[sea_orm(
        belongs_to = "super::pickup_point::Entity",
        from = "Column::PickupPointId",
        to = "super::pickup_point::Column::Id"
    )]
    PickupPoint,
    #[sea_orm(
        belongs_to = "super::referral::Entity",
        from = "Column::ReferralId",
        to = "super::referral::Column::Id"
    )]
    Referral,
}

impl Related<super::bus::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Bus.def()
    }
}

impl Related<super::destination::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Destination.def()
    }
}

impl Related<super::pickup_point::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PickupPoint.def()
    }
}

impl Related<super::referral::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Referral.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
