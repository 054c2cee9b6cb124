use sea_orm::{entity::prelude::*, ConnectionTrait, PaginatorTrait};
use serde::{Deserialize, Serialize};

use crate::order_table;

/// Kitchen progress of an order. `Completion` is terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    #[sea_orm(string_value = "COOKING")]
    Cooking,
    #[sea_orm(string_value = "MEAL")]
    Meal,
    #[sea_orm(string_value = "COMPLETION")]
    Completion,
}

impl OrderStatus {
    /// Statuses that keep a table occupied.
    pub const IN_PROGRESS: [OrderStatus; 2] = [OrderStatus::Cooking, OrderStatus::Meal];

    pub fn is_completed(self) -> bool { self == OrderStatus::Completion }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "orders")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub order_table_id: i32,
    pub order_status: OrderStatus,
    pub ordered_time: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { OrderTable }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::OrderTable => Entity::belongs_to(order_table::Entity)
                .from(Column::OrderTableId)
                .to(order_table::Column::Id)
                .into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Whether any of the given tables still has an order that is not completed.
pub async fn exists_in_progress_for_tables<C: ConnectionTrait>(db: &C, order_table_ids: &[i32]) -> Result<bool, DbErr> {
    if order_table_ids.is_empty() {
        return Ok(false);
    }
    let count = Entity::find()
        .filter(Column::OrderTableId.is_in(order_table_ids.iter().copied()))
        .filter(Column::OrderStatus.is_in(OrderStatus::IN_PROGRESS))
        .count(db)
        .await?;
    Ok(count > 0)
}
