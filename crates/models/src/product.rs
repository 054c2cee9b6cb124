use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};

use crate::{errors, price};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "product")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    // DECIMAL(16, 2) on SQLite, see `migration::money`
    #[sea_orm(column_type = "Decimal(Some((19, 2)))")]
    pub price: Decimal,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub async fn create<C: ConnectionTrait>(db: &C, name: &str, price: Option<Decimal>) -> Result<Model, errors::ModelError> {
    price::validate_name(name)?;
    let price = price::validate_price(price)?;
    let am = ActiveModel {
        name: Set(name.to_string()),
        price: Set(price),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}
