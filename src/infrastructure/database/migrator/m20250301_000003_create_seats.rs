//! Create seats table
//!
//! Seats are owned by their bus (cascade delete) and uniquely numbered
//! within it.

use sea_orm_migration::prelude::*;

use super::m20250301_000002_create_buses::Buses;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Seats::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Seats::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Seats::BusId).integer().not_null())
                    .col(ColumnDef::new(Seats::SeatNumber).integer().not_null())
                    .col(
                        ColumnDef::new(Seats::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_seats_bus")
                            .from(Seats::Table, Seats::BusId)
                            .to(Buses::Table, Buses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uniq_seats_bus_seat_number")
                    .table(Seats::Table)
                    .col(Seats::BusId)
                    .col(Seats::SeatNumber)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Seats::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Seats {
    Table,
    Id,
    BusId,
    SeatNumber,
    IsActive,
}
