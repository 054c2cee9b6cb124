//! Create `menu_product` table.
//!
//! Join rows between `menu` and `product` carrying a quantity. Removing a
//! menu removes its rows.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MenuProduct::Table)
                    .if_not_exists()
                    .col(pk_auto(MenuProduct::Seq))
                    .col(integer(MenuProduct::MenuId).not_null())
                    .col(integer(MenuProduct::ProductId).not_null())
                    .col(big_integer(MenuProduct::Quantity).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_menu_product_menu")
                            .from(MenuProduct::Table, MenuProduct::MenuId)
                            .to(Menu::Table, Menu::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_menu_product_product")
                            .from(MenuProduct::Table, MenuProduct::ProductId)
                            .to(Product::Table, Product::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(MenuProduct::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum MenuProduct { Table, Seq, MenuId, ProductId, Quantity }

#[derive(DeriveIden)]
enum Menu { Table, Id }

#[derive(DeriveIden)]
enum Product { Table, Id }
