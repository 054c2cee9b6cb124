//! Migrator registering entity-specific migrations in dependency order.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;
use sea_orm_migration::{schema::decimal_len, sea_orm::DatabaseBackend};

mod m20240101_000001_create_product;
mod m20240101_000002_create_menu_group;
mod m20240101_000003_create_menu;
mod m20240101_000004_create_menu_product;
mod m20240101_000005_create_table_group;
mod m20240101_000006_create_order_table;
mod m20240101_000007_create_orders;
mod m20240101_000008_create_order_line_item;
mod m20240101_000009_add_indexes;

pub struct Migrator;

/// Money column: `DECIMAL(19, 2)`. SQLite caps decimal precision at 16.
pub(crate) fn money<T: IntoIden>(manager: &SchemaManager, col: T) -> ColumnDef {
    let precision = match manager.get_database_backend() {
        DatabaseBackend::Sqlite => 16,
        _ => 19,
    };
    decimal_len(col, precision, 2)
}

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_product::Migration),
            Box::new(m20240101_000002_create_menu_group::Migration),
            Box::new(m20240101_000003_create_menu::Migration),
            Box::new(m20240101_000004_create_menu_product::Migration),
            Box::new(m20240101_000005_create_table_group::Migration),
            Box::new(m20240101_000006_create_order_table::Migration),
            Box::new(m20240101_000007_create_orders::Migration),
            Box::new(m20240101_000008_create_order_line_item::Migration),
            // Indexes should always be applied last
            Box::new(m20240101_000009_add_indexes::Migration),
        ]
    }
}
