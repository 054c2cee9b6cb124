use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};

use crate::{errors, table_group};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "order_table")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub table_group_id: Option<i32>,
    pub number_of_guests: i32,
    pub empty: bool,
}

impl Model {
    pub fn is_grouped(&self) -> bool { self.table_group_id.is_some() }
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { TableGroup }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::TableGroup => Entity::belongs_to(table_group::Entity)
                .from(Column::TableGroupId)
                .to(table_group::Column::Id)
                .into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_number_of_guests(number_of_guests: i32) -> Result<(), errors::ModelError> {
    if number_of_guests < 0 {
        return Err(errors::ModelError::Validation(format!(
            "number_of_guests must be >= 0, got {number_of_guests}"
        )));
    }
    Ok(())
}

pub async fn create<C: ConnectionTrait>(db: &C, number_of_guests: i32, empty: bool) -> Result<Model, errors::ModelError> {
    validate_number_of_guests(number_of_guests)?;
    let am = ActiveModel {
        table_group_id: Set(None),
        number_of_guests: Set(number_of_guests),
        empty: Set(empty),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}
