use std::collections::BTreeSet;

use sea_orm::{
    sea_query::Expr, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, TransactionTrait,
};
use tracing::{info, instrument, warn};

use models::{order, order_table, table_group};
use crate::{
    domain::{TableGroupCreate, TableGroupView},
    errors::ServiceError,
};

/// Minimum number of distinct tables a group must join.
pub const MIN_GROUP_TABLES: usize = 2;

/// Join empty, ungrouped tables into a new group. Members become occupied.
#[instrument(name = "table_group_create", skip(db, input), fields(tables = input.order_tables.len()))]
pub async fn create_table_group(db: &DatabaseConnection, input: TableGroupCreate) -> Result<TableGroupView, ServiceError> {
    let ids: BTreeSet<i32> = input.order_tables.iter().map(|t| t.id).collect();
    if ids.len() < MIN_GROUP_TABLES {
        return Err(ServiceError::validation(format!(
            "a table group needs at least {} distinct tables",
            MIN_GROUP_TABLES
        )));
    }

    let txn = db.begin().await?;

    let tables = order_table::Entity::find()
        .filter(order_table::Column::Id.is_in(ids.iter().copied()))
        .all(&txn)
        .await?;
    if tables.len() != ids.len() {
        return Err(ServiceError::validation("table group references a table that does not exist"));
    }
    if let Some(t) = tables.iter().find(|t| !t.empty || t.is_grouped()) {
        return Err(ServiceError::validation(format!(
            "order_table {} must be empty and not in another group",
            t.id
        )));
    }

    let group = table_group::create(&txn).await?;
    order_table::Entity::update_many()
        .col_expr(order_table::Column::TableGroupId, Expr::value(group.id))
        .col_expr(order_table::Column::Empty, Expr::value(false))
        .filter(order_table::Column::Id.is_in(ids.iter().copied()))
        .exec(&txn)
        .await?;

    let members = order_table::Entity::find()
        .filter(order_table::Column::TableGroupId.eq(group.id))
        .order_by_asc(order_table::Column::Id)
        .all(&txn)
        .await?;
    txn.commit().await?;

    info!(table_group_id = group.id, members = members.len(), "table_group_created");
    Ok(TableGroupView::of(group, members))
}

/// Release every table of a group. Refused while any member has an unfinished order.
#[instrument(name = "table_group_ungroup", skip(db))]
pub async fn ungroup(db: &DatabaseConnection, table_group_id: i32) -> Result<(), ServiceError> {
    let txn = db.begin().await?;

    let member_ids: Vec<i32> = order_table::Entity::find()
        .filter(order_table::Column::TableGroupId.eq(table_group_id))
        .all(&txn)
        .await?
        .into_iter()
        .map(|t| t.id)
        .collect();
    if member_ids.is_empty() {
        warn!(table_group_id, "table_group_has_no_members");
        return Ok(());
    }
    if order::exists_in_progress_for_tables(&txn, &member_ids).await? {
        return Err(ServiceError::validation(format!(
            "table group {} has orders in progress",
            table_group_id
        )));
    }

    order_table::Entity::update_many()
        .col_expr(order_table::Column::TableGroupId, Expr::value(Option::<i32>::None))
        .col_expr(order_table::Column::Empty, Expr::value(false))
        .filter(order_table::Column::Id.is_in(member_ids.iter().copied()))
        .exec(&txn)
        .await?;
    txn.commit().await?;

    info!(table_group_id, released = member_ids.len(), "table_group_ungrouped");
    Ok(())
}
