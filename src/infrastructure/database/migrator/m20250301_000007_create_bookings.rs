//! Create bookings table
//!
//! The partial unique index `uniq_bookings_live_seat` is the seat-allocation
//! invariant: at most one booking per (bus_id, seat_number) among live
//! (pending or paid) rows. Cancelled rows fall outside the index, so a
//! cancelled seat is immediately rebookable. sea-query has no builder for
//! partial indexes, so it is created with raw SQL (valid on SQLite and
//! PostgreSQL).

use sea_orm_migration::prelude::*;

use super::m20250301_000002_create_buses::Buses;
use super::m20250301_000004_create_destinations::Destinations;
use super::m20250301_000005_create_pickup_points::PickupPoints;
use super::m20250301_000006_create_referrals::Referrals;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Bookings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Bookings::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Bookings::FullName).string().not_null())
                    .col(ColumnDef::new(Bookings::PassengerClass).string())
                    .col(ColumnDef::new(Bookings::Email).string())
                    .col(ColumnDef::new(Bookings::Phone).string().not_null())
                    .col(ColumnDef::new(Bookings::EmergencyContact).string())
                    .col(ColumnDef::new(Bookings::BusId).integer().not_null())
                    .col(ColumnDef::new(Bookings::SeatNumber).integer().not_null())
                    .col(
                        ColumnDef::new(Bookings::DestinationId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Bookings::PickupPointId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Bookings::ReferralId).integer())
                    .col(ColumnDef::new(Bookings::Amount).big_integer().not_null())
                    .col(
                        ColumnDef::new(Bookings::Status)
                            .string()
                            .not_null()
                            .default("pending"),
                    )
                    .col(ColumnDef::new(Bookings::PaymentReference).string())
                    .col(ColumnDef::new(Bookings::ReceiptUrl).string())
                    .col(
                        ColumnDef::new(Bookings::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Bookings::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bookings_bus")
                            .from(Bookings::Table, Bookings::BusId)
                            .to(Buses::Table, Buses::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bookings_destination")
                            .from(Bookings::Table, Bookings::DestinationId)
                            .to(Destinations::Table, Destinations::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bookings_pickup_point")
                            .from(Bookings::Table, Bookings::PickupPointId)
                            .to(PickupPoints::Table, PickupPoints::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bookings_referral")
                            .from(Bookings::Table, Bookings::ReferralId)
                            .to(Referrals::Table, Referrals::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // Partial unique index: the seat-allocation invariant
        manager
            .get_connection()
            .execute_unprepared(
                "CREATE UNIQUE INDEX IF NOT EXISTS uniq_bookings_live_seat \
                 ON bookings (bus_id, seat_number) \
                 WHERE status IN ('pending', 'paid')",
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_bookings_bus")
                    .table(Bookings::Table)
                    .col(Bookings::BusId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_bookings_status")
                    .table(Bookings::Table)
                    .col(Bookings::Status)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Bookings::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Bookings {
    Table,
    Id,
    FullName,
    PassengerClass,
    Email,
    Phone,
    EmergencyContact,
    BusId,
    SeatNumber,
    DestinationId,
    PickupPointId,
    ReferralId,
    Amount,
    Status,
    PaymentReference,
    ReceiptUrl,
    CreatedAt,
    UpdatedAt,
}
