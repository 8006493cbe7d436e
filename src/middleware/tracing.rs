use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::{info, info_span, Instrument};

/// Per-request tracing middleware: wraps every handler in a span carrying
/// the method, matched route and a fresh request id, and logs the outcome
/// with its latency.
pub async fn request_tracing_middleware(
    matched_path: MatchedPath,
    request: Request,
    next: Next,
) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let route = matched_path.as_str().to_string();
    let start_time = Instant::now();

    let span = info_span!(
        "http_request",
        method = %method,
        uri = %uri,
        route = %route,
        request_id = %uuid::Uuid::now_v7(),
    );

    let response = next.run(request).instrument(span).await;

    let status = response.status().as_u16();
    let elapsed_ms = start_time.elapsed().as_millis();
    info!(
        method = %method,
        route = %route,
        status,
        elapsed_ms,
        "request completed"
    );

    response
}
