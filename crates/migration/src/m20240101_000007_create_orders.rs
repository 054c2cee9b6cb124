//! Create `orders` table (`order` is reserved in SQL) with FK to `order_table`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Orders::Table)
                    .if_not_exists()
                    .col(pk_auto(Orders::Id))
                    .col(integer(Orders::OrderTableId).not_null())
                    .col(string_len(Orders::OrderStatus, 16).not_null())
                    .col(timestamp_with_time_zone(Orders::OrderedTime).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_orders_order_table")
                            .from(Orders::Table, Orders::OrderTableId)
                            .to(OrderTable::Table, OrderTable::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Orders::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Orders { Table, Id, OrderTableId, OrderStatus, OrderedTime }

#[derive(DeriveIden)]
enum OrderTable { Table, Id }
