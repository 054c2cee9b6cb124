use axum::{extract::{Path, State}, http::StatusCode, response::IntoResponse, Json};
use models::order_table;
use service::{
    domain::{EmptyChange, NumberOfGuestsChange, OrderTableCreate},
    table_service,
};

use crate::{errors::JsonApiError, extract::ApiJson, routes::{location, AppState}};

#[utoipa::path(
    post, path = "/api/tables", tag = "tables",
    request_body = crate::openapi::OrderTableCreateDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::OrderTableDoc),
        (status = 400, description = "Validation Error")
    )
)]
pub async fn create(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<OrderTableCreate>,
) -> Result<impl IntoResponse, JsonApiError> {
    let t = table_service::create_table(&state.db, input).await?;
    Ok((StatusCode::CREATED, location("/api/tables", t.id), Json(t)))
}

#[utoipa::path(get, path = "/api/tables", tag = "tables", responses((status = 200, description = "List OK", body = [crate::openapi::OrderTableDoc])))]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<order_table::Model>>, JsonApiError> {
    Ok(Json(table_service::list_tables(&state.db).await?))
}

#[utoipa::path(
    put, path = "/api/tables/{orderTableId}/empty", tag = "tables",
    params(("orderTableId" = i32, Path, description = "Order table ID")),
    request_body = crate::openapi::EmptyChangeDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::OrderTableDoc),
        (status = 400, description = "Table is grouped or has orders in progress"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn change_empty(
    State(state): State<AppState>,
    Path(order_table_id): Path<i32>,
    ApiJson(change): ApiJson<EmptyChange>,
) -> Result<Json<order_table::Model>, JsonApiError> {
    Ok(Json(table_service::change_empty(&state.db, order_table_id, change).await?))
}

#[utoipa::path(
    put, path = "/api/tables/{orderTableId}/number-of-guests", tag = "tables",
    params(("orderTableId" = i32, Path, description = "Order table ID")),
    request_body = crate::openapi::NumberOfGuestsChangeDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::OrderTableDoc),
        (status = 400, description = "Negative guests or empty table"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn change_number_of_guests(
    State(state): State<AppState>,
    Path(order_table_id): Path<i32>,
    ApiJson(change): ApiJson<NumberOfGuestsChange>,
) -> Result<Json<order_table::Model>, JsonApiError> {
    Ok(Json(table_service::change_number_of_guests(&state.db, order_table_id, change).await?))
}
