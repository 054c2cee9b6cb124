use std::collections::{BTreeSet, HashMap};

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};
use tracing::{info, instrument};

use models::{menu, order, order::OrderStatus, order_line_item, order_table};
use crate::{
    domain::{OrderCreate, OrderStatusChange, OrderView},
    errors::ServiceError,
};

/// Place an order for a seated table. The order starts in `COOKING`.
#[instrument(name = "order_create", skip(db, input), fields(order_table_id = input.order_table_id))]
pub async fn create_order(db: &DatabaseConnection, input: OrderCreate) -> Result<OrderView, ServiceError> {
    if input.order_line_items.is_empty() {
        return Err(ServiceError::validation("order must contain at least one line item"));
    }

    let txn = db.begin().await?;

    let menu_ids: BTreeSet<i32> = input.order_line_items.iter().map(|li| li.menu_id).collect();
    let found = menu::Entity::find()
        .filter(menu::Column::Id.is_in(menu_ids.iter().copied()))
        .count(&txn)
        .await?;
    if found != menu_ids.len() as u64 {
        return Err(ServiceError::validation("order references a menu that does not exist"));
    }

    let table = order_table::Entity::find_by_id(input.order_table_id)
        .one(&txn)
        .await?
        .ok_or_else(|| ServiceError::not_found("order_table", input.order_table_id))?;
    if table.empty {
        return Err(ServiceError::validation(format!("order_table {} is empty", table.id)));
    }

    let saved = order::ActiveModel {
        order_table_id: Set(table.id),
        order_status: Set(OrderStatus::Cooking),
        ordered_time: Set(Utc::now().into()),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    let mut items = Vec::with_capacity(input.order_line_items.len());
    for li in &input.order_line_items {
        let row = order_line_item::ActiveModel {
            order_id: Set(saved.id),
            menu_id: Set(li.menu_id),
            quantity: Set(li.quantity),
            ..Default::default()
        }
        .insert(&txn)
        .await?;
        items.push(row);
    }

    txn.commit().await?;
    info!(order_id = saved.id, line_items = items.len(), "order_created");
    Ok(OrderView::of(saved, items))
}

async fn line_items_by_order<C: ConnectionTrait>(
    db: &C,
    order_ids: Vec<i32>,
) -> Result<HashMap<i32, Vec<order_line_item::Model>>, ServiceError> {
    let mut by_order: HashMap<i32, Vec<order_line_item::Model>> = HashMap::new();
    if order_ids.is_empty() {
        return Ok(by_order);
    }
    for row in order_line_item::Entity::find()
        .filter(order_line_item::Column::OrderId.is_in(order_ids))
        .order_by_asc(order_line_item::Column::Seq)
        .all(db)
        .await?
    {
        by_order.entry(row.order_id).or_default().push(row);
    }
    Ok(by_order)
}

/// All orders with their line items, ordered by id.
pub async fn list_orders(db: &DatabaseConnection) -> Result<Vec<OrderView>, ServiceError> {
    let orders = order::Entity::find().order_by_asc(order::Column::Id).all(db).await?;
    let mut items = line_items_by_order(db, orders.iter().map(|o| o.id).collect()).await?;
    Ok(orders
        .into_iter()
        .map(|o| {
            let rows = items.remove(&o.id).unwrap_or_default();
            OrderView::of(o, rows)
        })
        .collect())
}

/// Move an order to another status. Completed orders are final.
#[instrument(name = "order_change_status", skip(db, change), fields(to = ?change.order_status))]
pub async fn change_order_status(
    db: &DatabaseConnection,
    order_id: i32,
    change: OrderStatusChange,
) -> Result<OrderView, ServiceError> {
    let txn = db.begin().await?;

    let found = order::Entity::find_by_id(order_id)
        .one(&txn)
        .await?
        .ok_or_else(|| ServiceError::not_found("order", order_id))?;
    if found.order_status.is_completed() {
        return Err(ServiceError::validation(format!("order {} is already completed", order_id)));
    }

    let from = found.order_status;
    let mut am: order::ActiveModel = found.into();
    am.order_status = Set(change.order_status);
    let updated = am.update(&txn).await?;

    let mut items = line_items_by_order(&txn, vec![updated.id]).await?;
    txn.commit().await?;

    info!(order_id, from = ?from, to = ?updated.order_status, "order_status_changed");
    let rows = items.remove(&updated.id).unwrap_or_default();
    Ok(OrderView::of(updated, rows))
}
