//! Persistence layer: sea-orm entities for the point-of-sale schema plus the
//! field-level checks that belong to a single row.

pub mod errors;
pub mod db;
pub mod price;
pub mod product;
pub mod menu_group;
pub mod menu;
pub mod menu_product;
pub mod table_group;
pub mod order_table;
pub mod order;
pub mod order_line_item;

#[cfg(test)]
mod tests;
