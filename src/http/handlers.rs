//! Product routes.
//!
//! Each handler decodes its inputs, calls the service, and picks the success
//! status. Failures are returned as [`ApiError`] and rendered by its
//! `IntoResponse` impl.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::{StatusCode, Uri},
    Json,
};
use serde::Serialize;

use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::product::model::ProductId;
use crate::product::{ProductDto, ProductStore};

/// `GET /product`
pub async fn list_products<S: ProductStore>(
    State(state): State<AppState<S>>,
) -> Result<Json<Vec<ProductDto>>, ApiError> {
    let products = state.products.list_products().await?;
    Ok(Json(products))
}

/// `GET /product/{id}`
pub async fn get_product<S: ProductStore>(
    State(state): State<AppState<S>>,
    id: Result<Path<ProductId>, PathRejection>,
) -> Result<Json<ProductDto>, ApiError> {
    let Path(id) = id?;
    let product = state.products.get_product(id).await?;
    Ok(Json(product))
}

/// `POST /product`
pub async fn add_product<S: ProductStore>(
    State(state): State<AppState<S>>,
    payload: Result<Json<ProductDto>, JsonRejection>,
) -> Result<(StatusCode, Json<ProductDto>), ApiError> {
    let Json(product) = payload?;
    let created = state.products.add_product(product).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// `PUT /product/{id}`
pub async fn update_product<S: ProductStore>(
    State(state): State<AppState<S>>,
    id: Result<Path<ProductId>, PathRejection>,
    payload: Result<Json<ProductDto>, JsonRejection>,
) -> Result<Json<ProductDto>, ApiError> {
    let Path(id) = id?;
    let Json(product) = payload?;
    let updated = state.products.update_product_by_id(product, id).await?;
    Ok(Json(updated))
}

/// `DELETE /product/{id}`
pub async fn delete_product<S: ProductStore>(
    State(state): State<AppState<S>>,
    id: Result<Path<ProductId>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = id?;
    state.products.delete_product_by_id(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[derive(Serialize)]
pub struct HealthStatus {
    pub version: &'static str,
    pub status: &'static str,
}

/// `GET /health`
pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        version: env!("CARGO_PKG_VERSION"),
        status: "ok",
    })
}

/// Unknown routes get the same error body as everything else.
pub async fn fallback(uri: Uri) -> ApiError {
    ApiError::Rejection {
        status: StatusCode::NOT_FOUND,
        message: format!("No route for {}", uri.path()),
    }
}
