use axum::{extract::{Path, State}, http::StatusCode, response::IntoResponse, Json};
use service::{domain::{OrderCreate, OrderStatusChange, OrderView}, order_service};

use crate::{errors::JsonApiError, extract::ApiJson, routes::{location, AppState}};

#[utoipa::path(
    post, path = "/api/orders", tag = "orders",
    request_body = crate::openapi::OrderCreateDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::OrderDoc),
        (status = 400, description = "Validation Error"),
        (status = 404, description = "Order table not found")
    )
)]
pub async fn create(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<OrderCreate>,
) -> Result<impl IntoResponse, JsonApiError> {
    let o = order_service::create_order(&state.db, input).await?;
    Ok((StatusCode::CREATED, location("/api/orders", o.id), Json(o)))
}

#[utoipa::path(get, path = "/api/orders", tag = "orders", responses((status = 200, description = "List OK", body = [crate::openapi::OrderDoc])))]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<OrderView>>, JsonApiError> {
    Ok(Json(order_service::list_orders(&state.db).await?))
}

#[utoipa::path(
    put, path = "/api/orders/{orderId}/order-status", tag = "orders",
    params(("orderId" = i32, Path, description = "Order ID")),
    request_body = crate::openapi::OrderStatusChangeDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::OrderDoc),
        (status = 400, description = "Order already completed"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn change_status(
    State(state): State<AppState>,
    Path(order_id): Path<i32>,
    ApiJson(change): ApiJson<OrderStatusChange>,
) -> Result<Json<OrderView>, JsonApiError> {
    Ok(Json(order_service::change_order_status(&state.db, order_id, change).await?))
}
