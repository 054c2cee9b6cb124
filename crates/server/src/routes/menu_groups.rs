use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use service::{domain::MenuGroupCreate, menu_group_service};

use crate::{errors::JsonApiError, extract::ApiJson, routes::{location, AppState}};

#[utoipa::path(
    post, path = "/api/menu-groups", tag = "menu-groups",
    request_body = crate::openapi::MenuGroupCreateDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::MenuGroupDoc),
        (status = 400, description = "Validation Error")
    )
)]
pub async fn create(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<MenuGroupCreate>,
) -> Result<impl IntoResponse, JsonApiError> {
    let g = menu_group_service::create_menu_group(&state.db, input).await?;
    Ok((StatusCode::CREATED, location("/api/menu-groups", g.id), Json(g)))
}

#[utoipa::path(get, path = "/api/menu-groups", tag = "menu-groups", responses((status = 200, description = "List OK", body = [crate::openapi::MenuGroupDoc])))]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<models::menu_group::Model>>, JsonApiError> {
    Ok(Json(menu_group_service::list_menu_groups(&state.db).await?))
}
