//! Create `table_group` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TableGroup::Table)
                    .if_not_exists()
                    .col(pk_auto(TableGroup::Id))
                    .col(timestamp_with_time_zone(TableGroup::CreatedDate).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(TableGroup::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum TableGroup { Table, Id, CreatedDate }
