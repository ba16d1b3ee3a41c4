//! Create bus_types table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BusTypes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(BusTypes::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(BusTypes::Name).string().not_null())
                    .col(ColumnDef::new(BusTypes::SeatCount).integer().not_null())
                    .col(
                        ColumnDef::new(BusTypes::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BusTypes::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum BusTypes {
    Table,
    Id,
    Name,
    SeatCount,
    CreatedAt,
}
