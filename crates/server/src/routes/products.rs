use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use service::{domain::ProductCreate, product_service};

use crate::{errors::JsonApiError, extract::ApiJson, routes::{location, AppState}};

#[utoipa::path(
    post, path = "/api/products", tag = "products",
    request_body = crate::openapi::ProductCreateDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::ProductDoc),
        (status = 400, description = "Validation Error")
    )
)]
pub async fn create(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<ProductCreate>,
) -> Result<impl IntoResponse, JsonApiError> {
    let p = product_service::create_product(&state.db, input).await?;
    Ok((StatusCode::CREATED, location("/api/products", p.id), Json(p)))
}

#[utoipa::path(get, path = "/api/products", tag = "products", responses((status = 200, description = "List OK", body = [crate::openapi::ProductDoc])))]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<models::product::Model>>, JsonApiError> {
    Ok(Json(product_service::list_products(&state.db).await?))
}
