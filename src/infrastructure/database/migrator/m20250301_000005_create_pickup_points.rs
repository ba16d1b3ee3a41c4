//! Create pickup_points table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PickupPoints::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PickupPoints::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(PickupPoints::Name).string().not_null())
                    .col(
                        ColumnDef::new(PickupPoints::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PickupPoints::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum PickupPoints {
    Table,
    Id,
    Name,
    CreatedAt,
}
