//! Create `menu_group` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MenuGroup::Table)
                    .if_not_exists()
                    .col(pk_auto(MenuGroup::Id))
                    .col(string_len(MenuGroup::Name, 255).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(MenuGroup::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum MenuGroup { Table, Id, Name }
