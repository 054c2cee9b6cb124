use axum::{
    http::{header, HeaderMap, HeaderValue},
    routing::{delete, get, post, put},
    Json, Router,
};
use sea_orm::DatabaseConnection;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;

use crate::openapi::ApiDoc;

pub mod menu_groups;
pub mod menus;
pub mod orders;
pub mod products;
pub mod table_groups;
pub mod tables;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "Service is up", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// `Location` header for a newly created resource.
pub(crate) fn location(collection: &str, id: i32) -> HeaderMap {
    let mut headers = HeaderMap::new();
    if let Ok(v) = HeaderValue::from_str(&format!("{}/{}", collection, id)) {
        headers.insert(header::LOCATION, v);
    }
    headers
}

/// Build the application router: health, the `/api` resources and the OpenAPI docs.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    let api = Router::new()
        .route("/api/products", get(products::list).post(products::create))
        .route("/api/menu-groups", get(menu_groups::list).post(menu_groups::create))
        .route("/api/menus", get(menus::list).post(menus::create))
        .route("/api/orders", get(orders::list).post(orders::create))
        .route("/api/orders/:order_id/order-status", put(orders::change_status))
        .route("/api/tables", get(tables::list).post(tables::create))
        .route("/api/tables/:order_table_id/empty", put(tables::change_empty))
        .route("/api/tables/:order_table_id/number-of-guests", put(tables::change_number_of_guests))
        .route("/api/table-groups", post(table_groups::create))
        .route("/api/table-groups/:table_group_id", delete(table_groups::ungroup));

    Router::new()
        .route("/health", get(health))
        .merge(api)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                        .on_request(DefaultOnRequest::new().level(Level::INFO))
                        .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                        .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
                )
                .layer(cors),
        )
}
