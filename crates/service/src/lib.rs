//! Service layer providing the point-of-sale business operations on top of models.
//! - Each module owns one aggregate: products, menu groups, menus, orders,
//!   order tables and table groups.
//! - Multi-row writes run inside a single database transaction.
//! - Request inputs and response views live in `domain`.

pub mod errors;
pub mod domain;
pub mod product_service;
pub mod menu_group_service;
pub mod menu_service;
pub mod order_service;
pub mod table_service;
pub mod table_group_service;
#[cfg(test)]
pub mod test_support;
