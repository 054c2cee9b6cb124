use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};
use tracing::{info, instrument};

use models::product;
use crate::{domain::ProductCreate, errors::ServiceError};

/// Register a product. Price must be present and `>= 0`.
#[instrument(name = "product_create", skip(db, input), fields(name = %input.name))]
pub async fn create_product(db: &DatabaseConnection, input: ProductCreate) -> Result<product::Model, ServiceError> {
    let created = product::create(db, &input.name, input.price).await?;
    info!(product_id = created.id, price = %created.price, "product_created");
    Ok(created)
}

/// All products ordered by id.
pub async fn list_products(db: &DatabaseConnection) -> Result<Vec<product::Model>, ServiceError> {
    Ok(product::Entity::find().order_by_asc(product::Column::Id).all(db).await?)
}
