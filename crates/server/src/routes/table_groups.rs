use axum::{extract::{Path, State}, http::StatusCode, response::IntoResponse, Json};
use service::{domain::TableGroupCreate, table_group_service};

use crate::{errors::JsonApiError, extract::ApiJson, routes::{location, AppState}};

#[utoipa::path(
    post, path = "/api/table-groups", tag = "table-groups",
    request_body = crate::openapi::TableGroupCreateDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::TableGroupDoc),
        (status = 400, description = "Validation Error")
    )
)]
pub async fn create(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<TableGroupCreate>,
) -> Result<impl IntoResponse, JsonApiError> {
    let g = table_group_service::create_table_group(&state.db, input).await?;
    Ok((StatusCode::CREATED, location("/api/table-groups", g.id), Json(g)))
}

#[utoipa::path(
    delete, path = "/api/table-groups/{tableGroupId}", tag = "table-groups",
    params(("tableGroupId" = i32, Path, description = "Table group ID")),
    responses(
        (status = 204, description = "Ungrouped"),
        (status = 400, description = "Orders in progress")
    )
)]
pub async fn ungroup(
    State(state): State<AppState>,
    Path(table_group_id): Path<i32>,
) -> Result<StatusCode, JsonApiError> {
    table_group_service::ungroup(&state.db, table_group_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
