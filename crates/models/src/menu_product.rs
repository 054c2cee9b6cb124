use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{errors, menu, product};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "menu_product")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub seq: i32,
    pub menu_id: i32,
    pub product_id: i32,
    pub quantity: i64,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Menu, Product }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Menu => Entity::belongs_to(menu::Entity).from(Column::MenuId).to(menu::Column::Id).into(),
            Relation::Product => Entity::belongs_to(product::Entity).from(Column::ProductId).to(product::Column::Id).into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_quantity(quantity: i64) -> Result<(), errors::ModelError> {
    if quantity < 1 {
        return Err(errors::ModelError::Validation(format!("quantity must be >= 1, got {quantity}")));
    }
    Ok(())
}
