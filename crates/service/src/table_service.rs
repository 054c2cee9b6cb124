use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set, TransactionTrait};
use tracing::{info, instrument};

use models::{order, order_table};
use crate::{
    domain::{EmptyChange, NumberOfGuestsChange, OrderTableCreate},
    errors::ServiceError,
};

#[instrument(name = "order_table_create", skip(db, input), fields(number_of_guests = input.number_of_guests, empty = input.empty))]
pub async fn create_table(db: &DatabaseConnection, input: OrderTableCreate) -> Result<order_table::Model, ServiceError> {
    let table = order_table::create(db, input.number_of_guests, input.empty).await?;
    info!(order_table_id = table.id, "order_table_created");
    Ok(table)
}

pub async fn list_tables(db: &DatabaseConnection) -> Result<Vec<order_table::Model>, ServiceError> {
    Ok(order_table::Entity::find().order_by_asc(order_table::Column::Id).all(db).await?)
}

/// Seat or clear a table.
///
/// Grouped tables and tables with unfinished orders keep their state.
#[instrument(name = "order_table_change_empty", skip(db, change), fields(empty = change.empty))]
pub async fn change_empty(
    db: &DatabaseConnection,
    order_table_id: i32,
    change: EmptyChange,
) -> Result<order_table::Model, ServiceError> {
    let txn = db.begin().await?;

    let table = order_table::Entity::find_by_id(order_table_id)
        .one(&txn)
        .await?
        .ok_or_else(|| ServiceError::not_found("order_table", order_table_id))?;
    if table.is_grouped() {
        return Err(ServiceError::validation(format!("order_table {} belongs to a table group", order_table_id)));
    }
    if order::exists_in_progress_for_tables(&txn, &[order_table_id]).await? {
        return Err(ServiceError::validation(format!("order_table {} has orders in progress", order_table_id)));
    }

    let mut am: order_table::ActiveModel = table.into();
    am.empty = Set(change.empty);
    let updated = am.update(&txn).await?;
    txn.commit().await?;

    info!(order_table_id, empty = updated.empty, "order_table_empty_changed");
    Ok(updated)
}

#[instrument(name = "order_table_change_guests", skip(db, change), fields(number_of_guests = change.number_of_guests))]
pub async fn change_number_of_guests(
    db: &DatabaseConnection,
    order_table_id: i32,
    change: NumberOfGuestsChange,
) -> Result<order_table::Model, ServiceError> {
    order_table::validate_number_of_guests(change.number_of_guests)?;

    let table = order_table::Entity::find_by_id(order_table_id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found("order_table", order_table_id))?;
    if table.empty {
        return Err(ServiceError::validation(format!("order_table {} is empty", order_table_id)));
    }

    let mut am: order_table::ActiveModel = table.into();
    am.number_of_guests = Set(change.number_of_guests);
    let updated = am.update(db).await?;

    info!(order_table_id, number_of_guests = updated.number_of_guests, "order_table_guests_changed");
    Ok(updated)
}
