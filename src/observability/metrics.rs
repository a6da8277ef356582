//! Metrics collection and exposition.
//!
//! # Metrics
//! - `calc_requests_total` (counter): requests by operation, status
//! - `calc_request_duration_seconds` (histogram): latency by operation
//! - `calc_validation_failures_total` (counter): rejected fields by field, kind
//! - `calc_scientific_results_total` (counter): results rendered in scientific notation
//!
//! Without an installed recorder every call is a no-op, so handlers and tests
//! can record unconditionally.

use std::net::SocketAddr;
use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use metrics::{counter, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Start the Prometheus scrape endpoint on `addr`.
///
/// Must be called from inside the Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

/// Label for a matched route.
pub fn operation_label(path: &str) -> &'static str {
    match path {
        "/add/" => "addition",
        "/subtract/" => "subtraction",
        "/health" => "health",
        _ => "other",
    }
}

/// Middleware function counting every routed request with its final status,
/// including extractor rejections.
pub async fn track_requests(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let operation = request
        .extensions()
        .get::<MatchedPath>()
        .map_or("other", |path| operation_label(path.as_str()));

    let response = next.run(request).await;
    record_request(operation, response.status().as_u16(), start);
    response
}

/// Record one completed request.
pub fn record_request(operation: &'static str, status: u16, start: Instant) {
    counter!(
        "calc_requests_total",
        "operation" => operation,
        "status" => status.to_string()
    )
    .increment(1);
    histogram!("calc_request_duration_seconds", "operation" => operation)
        .record(start.elapsed().as_secs_f64());
}

/// Record a rejected input field.
pub fn record_validation_failure(field: &str, kind: &'static str) {
    counter!(
        "calc_validation_failures_total",
        "field" => field.to_string(),
        "kind" => kind
    )
    .increment(1);
}

/// Record a result that left the fixed-point window.
pub fn record_scientific_result(operation: &'static str) {
    counter!("calc_scientific_results_total", "operation" => operation).increment(1);
}
