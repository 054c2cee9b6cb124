use axum::extract::FromRequest;

use crate::errors::JsonApiError;

/// JSON request body. Malformed or mistyped bodies are answered with a
/// `400` [`JsonApiError`] instead of axum's plain-text rejection.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(JsonApiError))]
pub struct ApiJson<T>(pub T);
