//! Request tracing middleware.

use std::time::Instant;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use tracing::{debug, Instrument};

/// Wrap each request in an `http.request` span and log its outcome.
pub(crate) async fn request_tracing_middleware(request: Request, next: Next) -> Response {
    let method = request.method().to_string();
    let route = request.uri().path().to_string();
    let span = tracing::info_span!("http.request", method = %method, route = %route);

    let started = Instant::now();
    let response = next.run(request).instrument(span.clone()).await;
    let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

    span.in_scope(|| {
        debug!(
            status = response.status().as_u16(),
            elapsed_ms, "Request completed"
        );
    });
    response
}
