//! Create `order_line_item` table.
//!
//! One row per menu ordered; removed together with its order.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OrderLineItem::Table)
                    .if_not_exists()
                    .col(pk_auto(OrderLineItem::Seq))
                    .col(integer(OrderLineItem::OrderId).not_null())
                    .col(integer(OrderLineItem::MenuId).not_null())
                    .col(big_integer(OrderLineItem::Quantity).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_line_item_orders")
                            .from(OrderLineItem::Table, OrderLineItem::OrderId)
                            .to(Orders::Table, Orders::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_line_item_menu")
                            .from(OrderLineItem::Table, OrderLineItem::MenuId)
                            .to(Menu::Table, Menu::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(OrderLineItem::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum OrderLineItem { Table, Seq, OrderId, MenuId, Quantity }

#[derive(DeriveIden)]
enum Orders { Table, Id }

#[derive(DeriveIden)]
enum Menu { Table, Id }
