//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (tracing, request ID, metrics, limits, request context)
//! - Bind server to listener
//! - Stop gracefully on signal or trigger

use axum::{
    body::Body,
    http::Request,
    middleware,
    routing::get,
    Router,
};
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{limit::RequestBodyLimitLayer, timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::ServiceConfig;
use crate::http::context::request_context_middleware;
use crate::http::handlers;
use crate::http::request::{propagate_request_id_layer, request_id, set_request_id_layer};
use crate::lifecycle::signals::shutdown_signal;
use crate::observability::metrics;
use crate::product::{ProductService, ProductStore};

/// Application state injected into handlers.
pub struct AppState<S> {
    pub products: ProductService<S>,
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            products: self.products.clone(),
        }
    }
}

/// HTTP server for the product API.
pub struct HttpServer {
    router: Router,
    config: ServiceConfig,
}

impl HttpServer {
    /// Create a new HTTP server backed by `store`.
    pub fn new<S: ProductStore>(config: ServiceConfig, store: S) -> Self {
        let state = AppState {
            products: ProductService::new(store),
        };
        let router = build_router(&config, state);
        Self { router, config }
    }

    /// The assembled router, for in-process use.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server, accepting connections on the given listener until a
    /// signal arrives or `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            request_timeout_secs = self.config.timeouts.request_secs,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal(shutdown))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Build the Axum router with all middleware layers.
///
/// Layers run outermost-last: request ID, tracing, metrics, timeout,
/// body limit, then the request context right around the handlers.
#[allow(deprecated)]
pub fn build_router<S: ProductStore>(config: &ServiceConfig, state: AppState<S>) -> Router {
    Router::new()
        .route(
            "/product",
            get(handlers::list_products::<S>).post(handlers::add_product::<S>),
        )
        .route(
            "/product/{id}",
            get(handlers::get_product::<S>)
                .put(handlers::update_product::<S>)
                .delete(handlers::delete_product::<S>),
        )
        .route("/health", get(handlers::health))
        .fallback(handlers::fallback)
        .with_state(state)
        .layer(middleware::from_fn(request_context_middleware))
        .layer(RequestBodyLimitLayer::new(config.security.max_body_size))
        .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
        .layer(middleware::from_fn(metrics::track_requests))
        .layer(TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "request",
                method = %request.method(),
                path = %request.uri().path(),
                request_id = %request_id(request),
            )
        }))
        .layer(propagate_request_id_layer())
        .layer(set_request_id_layer())
}
