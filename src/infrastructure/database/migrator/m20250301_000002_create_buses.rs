//! Create buses table

use sea_orm_migration::prelude::*;

use super::m20250301_000001_create_bus_types::BusTypes;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Buses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Buses::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Buses::Name).string().not_null())
                    .col(ColumnDef::new(Buses::BusTypeId).integer().not_null())
                    .col(
                        ColumnDef::new(Buses::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Buses::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_buses_bus_type")
                            .from(Buses::Table, Buses::BusTypeId)
                            .to(BusTypes::Table, BusTypes::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Buses::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Buses {
    Table,
    Id,
    Name,
    BusTypeId,
    IsActive,
    CreatedAt,
}
