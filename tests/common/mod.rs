//! Shared utilities for integration testing.

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use product_service::config::ServiceConfig;
use product_service::product::{InMemoryProductStore, SqliteProductStore};
use product_service::HttpServer;
use serde_json::Value;
use sqlx::sqlite::SqlitePoolOptions;
use tower::ServiceExt;

pub const DESCRIPTION: &str = "A twenty-plus character description text";

/// Router over an empty in-memory store.
#[allow(dead_code)]
pub fn memory_app() -> Router {
    HttpServer::new(ServiceConfig::default(), InMemoryProductStore::new()).router()
}

/// Router over an empty SQLite memory database.
#[allow(dead_code)]
pub async fn sqlite_app() -> Router {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    let store = SqliteProductStore::new(pool);
    store.ensure_schema().await.unwrap();
    HttpServer::new(ServiceConfig::default(), store).router()
}

/// Send one request through the router and decode the JSON body (Null when empty).
#[allow(dead_code)]
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}
