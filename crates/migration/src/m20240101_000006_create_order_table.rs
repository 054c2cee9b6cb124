//! Create `order_table` table with nullable FK to `table_group`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OrderTable::Table)
                    .if_not_exists()
                    .col(pk_auto(OrderTable::Id))
                    // Explicitly nullable: a table outside any group has no group id
                    .col(ColumnDef::new(OrderTable::TableGroupId).integer().null())
                    .col(integer(OrderTable::NumberOfGuests).not_null())
                    .col(boolean(OrderTable::Empty).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_table_table_group")
                            .from(OrderTable::Table, OrderTable::TableGroupId)
                            .to(TableGroup::Table, TableGroup::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(OrderTable::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum OrderTable { Table, Id, TableGroupId, NumberOfGuests, Empty }

#[derive(DeriveIden)]
enum TableGroup { Table, Id }
