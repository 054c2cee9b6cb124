use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::menu_group;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "menu")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    // DECIMAL(16, 2) on SQLite, see `migration::money`
    #[sea_orm(column_type = "Decimal(Some((19, 2)))")]
    pub price: Decimal,
    pub menu_group_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { MenuGroup }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::MenuGroup => Entity::belongs_to(menu_group::Entity)
                .from(Column::MenuGroupId)
                .to(menu_group::Column::Id)
                .into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}
