//! Request concurrency limit.
//!
//! Requests beyond `listener.max_concurrent_requests` wait for a permit;
//! the request timeout still applies while waiting.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use tokio::sync::Semaphore;

/// Shared permit pool for in-flight requests.
#[derive(Debug, Clone)]
pub struct ConcurrencyLimit {
    permits: Arc<Semaphore>,
}

impl ConcurrencyLimit {
    pub fn new(max_concurrent_requests: usize) -> Self {
        Self {
            permits: Arc::new(Semaphore::new(max_concurrent_requests)),
        }
    }

    pub fn available(&self) -> usize {
        self.permits.available_permits()
    }
}

/// Middleware function holding a permit for the lifetime of the request.
pub async fn concurrency_limit_middleware(
    State(limit): State<ConcurrencyLimit>,
    request: Request,
    next: Next,
) -> Response {
    let Ok(_permit) = limit.permits.acquire().await else {
        tracing::warn!("Concurrency limiter closed");
        return (StatusCode::SERVICE_UNAVAILABLE, "Service unavailable").into_response();
    };
    next.run(request).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, middleware, routing::get, Router};
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_permit_released_after_response() {
        let limit = ConcurrencyLimit::new(2);
        let router = Router::new()
            .route("/", get(|| async { "ok" }))
            .layer(middleware::from_fn_with_state(
                limit.clone(),
                concurrency_limit_middleware,
            ));

        let response = router
            .oneshot(axum::http::Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(limit.available(), 2);
    }

    #[tokio::test]
    async fn test_waits_when_saturated() {
        let limit = ConcurrencyLimit::new(1);
        let held = limit.permits.clone().acquire_owned().await.unwrap();
        let router = Router::new()
            .route("/", get(|| async { "ok" }))
            .layer(middleware::from_fn_with_state(
                limit.clone(),
                concurrency_limit_middleware,
            ));

        let pending = tokio::spawn(
            router.oneshot(axum::http::Request::builder().uri("/").body(Body::empty()).unwrap()),
        );
        tokio::task::yield_now().await;
        assert!(!pending.is_finished());

        drop(held);
        let response = pending.await.unwrap().unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
