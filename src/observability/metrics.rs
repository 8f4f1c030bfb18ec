//! Metrics collection and exposition.
//!
//! # Metrics
//! - `product_requests_total` (counter): requests by method, status
//! - `product_request_duration_seconds` (histogram): latency by method
//! - `product_store_operations_total` (counter): store calls by operation

use axum::{body::Body, http::Request, middleware::Next, response::Response};
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use std::time::Instant;

/// Start the Prometheus exporter on `addr`.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

/// Record a finished request.
pub fn record_request(method: &str, status: u16, start: Instant) {
    metrics::counter!(
        "product_requests_total",
        "method" => method.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
    metrics::histogram!("product_request_duration_seconds", "method" => method.to_string())
        .record(start.elapsed().as_secs_f64());
}

pub fn record_store_operation(op: &'static str) {
    metrics::counter!("product_store_operations_total", "op" => op).increment(1);
}

/// Middleware timing every request.
pub async fn track_requests(request: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().to_string();

    let response = next.run(request).await;

    record_request(&method, response.status().as_u16(), start);
    response
}
