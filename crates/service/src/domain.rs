//! Request inputs and response views exchanged with the HTTP layer.
//!
//! Field names serialize in camelCase (`menuGroupId`, `numberOfGuests`, ...).

use models::{menu, menu_product, order, order_line_item, order_table, table_group};
use rust_decimal::Decimal;
use sea_orm::prelude::DateTimeWithTimeZone;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCreate {
    pub name: String,
    pub price: Option<Decimal>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuGroupCreate {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuProductInput {
    pub product_id: i32,
    pub quantity: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuCreate {
    pub name: String,
    pub price: Option<Decimal>,
    pub menu_group_id: i32,
    #[serde(default)]
    pub menu_products: Vec<MenuProductInput>,
}

/// A menu together with the products it is made of.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuView {
    pub id: i32,
    pub name: String,
    pub price: Decimal,
    pub menu_group_id: i32,
    pub menu_products: Vec<menu_product::Model>,
}

impl MenuView {
    pub fn of(m: menu::Model, menu_products: Vec<menu_product::Model>) -> Self {
        Self { id: m.id, name: m.name, price: m.price, menu_group_id: m.menu_group_id, menu_products }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineItemInput {
    pub menu_id: i32,
    pub quantity: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreate {
    pub order_table_id: i32,
    #[serde(default)]
    pub order_line_items: Vec<OrderLineItemInput>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderStatusChange {
    pub order_status: order::OrderStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderView {
    pub id: i32,
    pub order_table_id: i32,
    pub order_status: order::OrderStatus,
    pub ordered_time: DateTimeWithTimeZone,
    pub order_line_items: Vec<order_line_item::Model>,
}

impl OrderView {
    pub fn of(o: order::Model, order_line_items: Vec<order_line_item::Model>) -> Self {
        Self {
            id: o.id,
            order_table_id: o.order_table_id,
            order_status: o.order_status,
            ordered_time: o.ordered_time,
            order_line_items,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderTableCreate {
    #[serde(default)]
    pub number_of_guests: i32,
    #[serde(default)]
    pub empty: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmptyChange {
    pub empty: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumberOfGuestsChange {
    pub number_of_guests: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderTableRef {
    pub id: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableGroupCreate {
    #[serde(default)]
    pub order_tables: Vec<OrderTableRef>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableGroupView {
    pub id: i32,
    pub created_date: DateTimeWithTimeZone,
    pub order_tables: Vec<order_table::Model>,
}

impl TableGroupView {
    pub fn of(g: table_group::Model, order_tables: Vec<order_table::Model>) -> Self {
        Self { id: g.id, created_date: g.created_date, order_tables }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_create_reads_camel_case() {
        let input: MenuCreate = serde_json::from_str(
            r#"{"name":"two fried","price":19000,"menuGroupId":1,"menuProducts":[{"productId":1,"quantity":2}]}"#,
        )
        .unwrap();
        assert_eq!(input.price, Some(Decimal::from(19000)));
        assert_eq!(input.menu_products[0].product_id, 1);
        assert_eq!(input.menu_products[0].quantity, 2);
    }

    #[test]
    fn missing_price_and_items_default() {
        let input: MenuCreate = serde_json::from_str(r#"{"name":"x","menuGroupId":1}"#).unwrap();
        assert!(input.price.is_none());
        assert!(input.menu_products.is_empty());

        let order: OrderCreate = serde_json::from_str(r#"{"orderTableId":3}"#).unwrap();
        assert!(order.order_line_items.is_empty());
    }

    #[test]
    fn status_change_reads_upper_case() {
        let c: OrderStatusChange = serde_json::from_str(r#"{"orderStatus":"MEAL"}"#).unwrap();
        assert_eq!(c.order_status, order::OrderStatus::Meal);
    }
}
