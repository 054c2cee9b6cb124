use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};
use tracing::{info, instrument};

use models::menu_group;
use crate::{domain::MenuGroupCreate, errors::ServiceError};

/// Create a menu group.
#[instrument(name = "menu_group_create", skip(db, input), fields(name = %input.name))]
pub async fn create_menu_group(db: &DatabaseConnection, input: MenuGroupCreate) -> Result<menu_group::Model, ServiceError> {
    let created = menu_group::create(db, &input.name).await?;
    info!(menu_group_id = created.id, "menu_group_created");
    Ok(created)
}

/// All menu groups ordered by id.
pub async fn list_menu_groups(db: &DatabaseConnection) -> Result<Vec<menu_group::Model>, ServiceError> {
    Ok(menu_group::Entity::find().order_by_asc(menu_group::Column::Id).all(db).await?)
}
