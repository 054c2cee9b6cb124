use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // MenuProduct: menus load their products by menu_id
        manager
            .create_index(
                Index::create()
                    .name("idx_menu_product_menu")
                    .table(MenuProduct::Table)
                    .col(MenuProduct::MenuId)
                    .to_owned(),
            )
            .await?;

        // OrderLineItem: index on order_id
        manager
            .create_index(
                Index::create()
                    .name("idx_order_line_item_order")
                    .table(OrderLineItem::Table)
                    .col(OrderLineItem::OrderId)
                    .to_owned(),
            )
            .await?;

        // Orders: table emptiness checks filter by (order_table_id, order_status)
        manager
            .create_index(
                Index::create()
                    .name("idx_orders_table_status")
                    .table(Orders::Table)
                    .col(Orders::OrderTableId)
                    .col(Orders::OrderStatus)
                    .to_owned(),
            )
            .await?;

        // OrderTable: ungroup looks tables up by table_group_id
        manager
            .create_index(
                Index::create()
                    .name("idx_order_table_group")
                    .table(OrderTable::Table)
                    .col(OrderTable::TableGroupId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_menu_product_menu").table(MenuProduct::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_order_line_item_order").table(OrderLineItem::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_orders_table_status").table(Orders::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_order_table_group").table(OrderTable::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum MenuProduct { Table, MenuId }

#[derive(DeriveIden)]
enum OrderLineItem { Table, OrderId }

#[derive(DeriveIden)]
enum Orders { Table, OrderTableId, OrderStatus }

#[derive(DeriveIden)]
enum OrderTable { Table, TableGroupId }
