use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use service::{domain::{MenuCreate, MenuView}, menu_service};
use tracing::info;

use crate::{errors::JsonApiError, extract::ApiJson, routes::{location, AppState}};

#[utoipa::path(
    post, path = "/api/menus", tag = "menus",
    request_body = crate::openapi::MenuCreateDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::MenuDoc),
        (status = 400, description = "Validation Error"),
        (status = 404, description = "Menu group or product not found")
    )
)]
pub async fn create(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<MenuCreate>,
) -> Result<impl IntoResponse, JsonApiError> {
    let m = menu_service::create_menu(&state.db, input).await?;
    Ok((StatusCode::CREATED, location("/api/menus", m.id), Json(m)))
}

#[utoipa::path(get, path = "/api/menus", tag = "menus", responses((status = 200, description = "List OK", body = [crate::openapi::MenuDoc])))]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<MenuView>>, JsonApiError> {
    let menus = menu_service::list_menus(&state.db).await?;
    info!(count = menus.len(), "list menus");
    Ok(Json(menus))
}
