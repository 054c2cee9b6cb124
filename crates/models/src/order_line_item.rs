use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{menu, order};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "order_line_item")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub seq: i32,
    pub order_id: i32,
    pub menu_id: i32,
    pub quantity: i64,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Order, Menu }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Order => Entity::belongs_to(order::Entity).from(Column::OrderId).to(order::Column::Id).into(),
            Relation::Menu => Entity::belongs_to(menu::Entity).from(Column::MenuId).to(menu::Column::Id).into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}
