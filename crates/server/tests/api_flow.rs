use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use migration::{Migrator, MigratorTrait};
use models::db::DatabaseConfig;
use serde_json::{json, Value};
use tower::ServiceExt;
use tower_http::cors::CorsLayer;

use server::{build_router, AppState};

async fn app() -> anyhow::Result<Router> {
    let cfg = DatabaseConfig { url: "sqlite::memory:".into(), ..DatabaseConfig::default() };
    let db = models::db::connect_with_config(&cfg).await?;
    Migrator::up(&db, None).await?;
    Ok(build_router(AppState::new(db), CorsLayer::very_permissive()))
}

struct Reply {
    status: StatusCode,
    location: Option<String>,
    body: Value,
}

async fn call(app: &Router, method: Method, uri: &str, body: Option<Value>) -> anyhow::Result<Reply> {
    let mut req = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(v) => {
            req = req.header(header::CONTENT_TYPE, "application/json");
            Body::from(serde_json::to_vec(&v)?)
        }
        None => Body::empty(),
    };
    let res = app.clone().oneshot(req.body(body)?).await?;
    let status = res.status();
    let location = res
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);
    let bytes = to_bytes(res.into_body(), usize::MAX).await?;
    let body = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes)? };
    Ok(Reply { status, location, body })
}

fn id(v: &Value) -> i64 {
    v["id"].as_i64().unwrap_or_default()
}

#[tokio::test]
async fn health_is_ok() -> anyhow::Result<()> {
    let app = app().await?;
    let r = call(&app, Method::GET, "/health", None).await?;
    assert_eq!(r.status, StatusCode::OK);
    assert_eq!(r.body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn openapi_document_is_served() -> anyhow::Result<()> {
    let app = app().await?;
    let r = call(&app, Method::GET, "/api-docs/openapi.json", None).await?;
    assert_eq!(r.status, StatusCode::OK);
    assert!(r.body["paths"]["/api/menus"].is_object());
    Ok(())
}

#[tokio::test]
async fn product_create_returns_location() -> anyhow::Result<()> {
    let app = app().await?;
    let r = call(&app, Method::POST, "/api/products", Some(json!({"name": "fried", "price": 16000}))).await?;
    assert_eq!(r.status, StatusCode::CREATED);
    assert_eq!(r.location.as_deref(), Some(format!("/api/products/{}", id(&r.body)).as_str()));
    assert_eq!(r.body["name"], "fried");

    let r = call(&app, Method::POST, "/api/products", Some(json!({"name": "free"}))).await?;
    assert_eq!(r.status, StatusCode::BAD_REQUEST);
    assert_eq!(r.body["error"], "Validation Error");

    let r = call(&app, Method::GET, "/api/products", None).await?;
    assert_eq!(r.status, StatusCode::OK);
    assert_eq!(r.body.as_array().map(Vec::len), Some(1));
    Ok(())
}

#[tokio::test]
async fn malformed_bodies_are_validation_errors() -> anyhow::Result<()> {
    let app = app().await?;

    let r = call(&app, Method::POST, "/api/products", Some(json!({"price": 100}))).await?;
    assert_eq!(r.status, StatusCode::BAD_REQUEST);
    assert_eq!(r.body["error"], "Validation Error");
    assert!(r.body["detail"].as_str().is_some_and(|d| d.contains("name")));

    let table = call(&app, Method::POST, "/api/tables", Some(json!({"numberOfGuests": 2, "empty": false}))).await?;
    let r = call(
        &app,
        Method::PUT,
        &format!("/api/tables/{}/number-of-guests", id(&table.body)),
        Some(json!({"numberOfGuests": "many"})),
    )
    .await?;
    assert_eq!(r.status, StatusCode::BAD_REQUEST);
    assert_eq!(r.body["error"], "Validation Error");

    let r = call(&app, Method::PUT, "/api/orders/1/order-status", Some(json!({"orderStatus": "DONE"}))).await?;
    assert_eq!(r.status, StatusCode::BAD_REQUEST);
    assert_eq!(r.body["error"], "Validation Error");
    Ok(())
}

#[tokio::test]
async fn menu_for_unknown_group_is_not_found() -> anyhow::Result<()> {
    let app = app().await?;
    let r = call(
        &app,
        Method::POST,
        "/api/menus",
        Some(json!({"name": "x", "price": 0, "menuGroupId": 42, "menuProducts": []})),
    )
    .await?;
    assert_eq!(r.status, StatusCode::NOT_FOUND);
    assert_eq!(r.body["error"], "Not Found");
    Ok(())
}

#[tokio::test]
async fn order_lifecycle_over_http() -> anyhow::Result<()> {
    let app = app().await?;

    let group = call(&app, Method::POST, "/api/menu-groups", Some(json!({"name": "singles"}))).await?;
    assert_eq!(group.status, StatusCode::CREATED);
    let product = call(&app, Method::POST, "/api/products", Some(json!({"name": "fried", "price": 16000}))).await?;
    let menu = call(
        &app,
        Method::POST,
        "/api/menus",
        Some(json!({
            "name": "fried",
            "price": 16000,
            "menuGroupId": id(&group.body),
            "menuProducts": [{"productId": id(&product.body), "quantity": 1}]
        })),
    )
    .await?;
    assert_eq!(menu.status, StatusCode::CREATED);
    assert_eq!(menu.body["menuProducts"].as_array().map(Vec::len), Some(1));

    let table = call(&app, Method::POST, "/api/tables", Some(json!({"numberOfGuests": 2, "empty": false}))).await?;
    assert_eq!(table.status, StatusCode::CREATED);
    let table_id = id(&table.body);

    let order = call(
        &app,
        Method::POST,
        "/api/orders",
        Some(json!({"orderTableId": table_id, "orderLineItems": [{"menuId": id(&menu.body), "quantity": 2}]})),
    )
    .await?;
    assert_eq!(order.status, StatusCode::CREATED);
    assert_eq!(order.body["orderStatus"], "COOKING");
    let order_id = id(&order.body);

    // a table with an open order cannot be cleared
    let r = call(&app, Method::PUT, &format!("/api/tables/{}/empty", table_id), Some(json!({"empty": true}))).await?;
    assert_eq!(r.status, StatusCode::BAD_REQUEST);

    let r = call(
        &app,
        Method::PUT,
        &format!("/api/orders/{}/order-status", order_id),
        Some(json!({"orderStatus": "COMPLETION"})),
    )
    .await?;
    assert_eq!(r.status, StatusCode::OK);
    assert_eq!(r.body["orderStatus"], "COMPLETION");

    let r = call(
        &app,
        Method::PUT,
        &format!("/api/orders/{}/order-status", order_id),
        Some(json!({"orderStatus": "MEAL"})),
    )
    .await?;
    assert_eq!(r.status, StatusCode::BAD_REQUEST);

    let r = call(&app, Method::PUT, &format!("/api/tables/{}/empty", table_id), Some(json!({"empty": true}))).await?;
    assert_eq!(r.status, StatusCode::OK);
    assert_eq!(r.body["empty"], true);

    let r = call(&app, Method::GET, "/api/orders", None).await?;
    assert_eq!(r.body[0]["orderLineItems"][0]["quantity"], 2);
    Ok(())
}

#[tokio::test]
async fn table_group_and_ungroup() -> anyhow::Result<()> {
    let app = app().await?;
    let mut ids = Vec::new();
    for _ in 0..2 {
        let t = call(&app, Method::POST, "/api/tables", Some(json!({"numberOfGuests": 0, "empty": true}))).await?;
        ids.push(id(&t.body));
    }

    let r = call(
        &app,
        Method::POST,
        "/api/table-groups",
        Some(json!({"orderTables": [{"id": ids[0]}]})),
    )
    .await?;
    assert_eq!(r.status, StatusCode::BAD_REQUEST);

    let group = call(
        &app,
        Method::POST,
        "/api/table-groups",
        Some(json!({"orderTables": [{"id": ids[0]}, {"id": ids[1]}]})),
    )
    .await?;
    assert_eq!(group.status, StatusCode::CREATED);
    let group_id = id(&group.body);
    assert_eq!(group.location.as_deref(), Some(format!("/api/table-groups/{}", group_id).as_str()));
    for t in group.body["orderTables"].as_array().into_iter().flatten() {
        assert_eq!(t["tableGroupId"].as_i64(), Some(group_id));
        assert_eq!(t["empty"], false);
    }

    let r = call(
        &app,
        Method::PUT,
        &format!("/api/tables/{}/number-of-guests", ids[0]),
        Some(json!({"numberOfGuests": 4})),
    )
    .await?;
    assert_eq!(r.status, StatusCode::OK);
    assert_eq!(r.body["numberOfGuests"], 4);

    let r = call(&app, Method::DELETE, &format!("/api/table-groups/{}", group_id), None).await?;
    assert_eq!(r.status, StatusCode::NO_CONTENT);

    let r = call(&app, Method::GET, "/api/tables", None).await?;
    for t in r.body.as_array().into_iter().flatten() {
        assert!(t["tableGroupId"].is_null());
    }
    Ok(())
}
