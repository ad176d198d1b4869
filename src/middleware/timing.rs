use axum::{extract::Request, http::HeaderValue, middleware::Next, response::Response};
use std::time::Instant;

/// Adds two response headers so a client hammering the balancer can see
/// per-instance latency without parsing bodies:
///
///   X-Response-Time-Us  — total handler wall time in microseconds
///   Server-Timing       — same value in the standard Server-Timing format
///
/// Also emits one `tracing` event per `/api/*` request.
pub async fn timing_middleware(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();

    let start = Instant::now();
    let mut response = next.run(req).await;
    let elapsed = start.elapsed();
    let us = elapsed.as_micros();

    // ── Inject response headers ─────────────────────────────────
    if let Ok(val) = HeaderValue::from_str(&us.to_string()) {
        response.headers_mut().insert("X-Response-Time-Us", val);
    }

    let server_timing = format!("total;dur={:.3}", elapsed.as_secs_f64() * 1000.0);
    if let Ok(val) = HeaderValue::from_str(&server_timing) {
        response.headers_mut().insert("Server-Timing", val);
    }

    // ── Log ─────────────────────────────────────────────────────
    // Health checks arrive every few seconds per balancer; keep them quiet
    let status = response.status().as_u16();
    if path.starts_with("/api/") {
        if response.status().is_server_error() {
            tracing::warn!(status, %method, %path, us = %us, "request");
        } else {
            tracing::info!(status, %method, %path, us = %us, "request");
        }
    } else {
        tracing::debug!(status, %method, %path, us = %us, "request");
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http, middleware, routing::get, Router};
    use tower::ServiceExt;

    #[tokio::test]
    async fn adds_timing_headers() {
        let app = Router::new()
            .route("/api/ok", get(|| async { "ok" }))
            .layer(middleware::from_fn(timing_middleware));

        let response = app
            .oneshot(http::Request::builder().uri("/api/ok").body(Body::empty()).unwrap())
            .await
            .unwrap();

        let us = response.headers()["X-Response-Time-Us"].to_str().unwrap();
        assert!(us.parse::<u128>().is_ok());

        let timing = response.headers()["Server-Timing"].to_str().unwrap();
        assert!(timing.starts_with("total;dur="));
    }

    #[tokio::test]
    async fn headers_are_added_to_fallback_responses() {
        let app = Router::new()
            .fallback(|| async { axum::http::StatusCode::NOT_FOUND })
            .layer(middleware::from_fn(timing_middleware));

        let response = app
            .oneshot(http::Request::builder().uri("/missing").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), 404);
        assert!(response.headers().contains_key("X-Response-Time-Us"));
    }
}
