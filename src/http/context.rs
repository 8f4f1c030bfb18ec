//! Per-request context.
//!
//! The current request path lives in a task-local slot bound around the
//! handler future. It is only visible while that request is being processed
//! and disappears when the future completes, fails or is dropped, so
//! concurrent requests on the same worker never see each other's value.

use axum::{body::Body, http::Request, middleware::Next, response::Response};
use std::future::Future;

tokio::task_local! {
    static REQUEST_PATH: String;
}

/// Accessor for the per-request values.
pub struct RequestContext;

impl RequestContext {
    /// Run `fut` with `path` as the current request path.
    pub async fn scope<F: Future>(path: String, fut: F) -> F::Output {
        REQUEST_PATH.scope(path, fut).await
    }

    /// Path of the request being processed, `None` outside a request.
    pub fn path() -> Option<String> {
        REQUEST_PATH.try_with(|path| path.clone()).ok()
    }
}

/// Binds the request path for everything downstream of this layer.
pub async fn request_context_middleware(request: Request<Body>, next: Next) -> Response {
    let path = request.uri().path().to_string();
    RequestContext::scope(path, next.run(request)).await
}
