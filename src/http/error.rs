//! Error translation.
//!
//! # Responsibilities
//! - Turn domain errors and extractor rejections into HTTP responses
//! - Fill the error body's `path` from the request context
//!
//! # Status mapping
//! - `ProductError::Validation` → 400, one violation per broken rule
//! - `ProductError::NotFound` → 404
//! - Malformed or mistyped body → 400; oversized body or wrong content type
//!   keep the rejection's status (413, 415)
//! - Malformed path → the rejection's status (400)
//! - Anything else → 500 with a generic message; details only go to the log

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::http::context::RequestContext;
use crate::http::response::{ErrorResponse, Violation};
use crate::product::ProductError;

const INTERNAL_MESSAGE: &str = "Internal server error";

/// Errors surfaced by the HTTP handlers.
#[derive(Debug)]
pub enum ApiError {
    Product(ProductError),
    /// The request could not be decoded.
    Rejection { status: StatusCode, message: String },
}

impl From<ProductError> for ApiError {
    fn from(err: ProductError) -> Self {
        ApiError::Product(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        // Undecodable or mistyped bodies are plain client errors; size and
        // content-type rejections keep their own status
        let status = match &rejection {
            JsonRejection::JsonDataError(_) | JsonRejection::JsonSyntaxError(_) => {
                StatusCode::BAD_REQUEST
            }
            other => other.status(),
        };
        ApiError::Rejection {
            status,
            message: rejection.body_text(),
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::Rejection {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Product(ProductError::NotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Product(ProductError::Validation(_)) => StatusCode::BAD_REQUEST,
            ApiError::Product(ProductError::Store(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Rejection { status, .. } => *status,
        }
    }

    /// Build the error body for the current request.
    pub fn to_body(&self) -> ErrorResponse {
        let status = self.status();
        let path = RequestContext::path().unwrap_or_default();

        match self {
            ApiError::Product(ProductError::Validation(errors)) => {
                ErrorResponse::new(status, errors.message(), path)
                    .with_violations(errors.violations().iter().map(Violation::from).collect())
            }
            ApiError::Product(err @ ProductError::NotFound(_)) => {
                ErrorResponse::new(status, err.to_string(), path)
            }
            ApiError::Product(ProductError::Store(_)) => {
                ErrorResponse::new(status, INTERNAL_MESSAGE, path)
            }
            ApiError::Rejection { message, .. } => ErrorResponse::new(status, message.clone(), path),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = self.to_body();

        match &self {
            ApiError::Product(ProductError::Store(e)) => {
                tracing::error!(path = %body.path, error = %e, "Store failure");
            }
            ApiError::Product(ProductError::NotFound(id)) => {
                tracing::debug!(path = %body.path, id, "Product not found");
            }
            other => {
                tracing::debug!(path = %body.path, status = body.status, error = ?other, "Request rejected");
            }
        }

        (self.status(), Json(body)).into_response()
    }
}
