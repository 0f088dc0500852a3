//! Request identification.
//!
//! # Responsibilities
//! - Name the correlation header stamped on every request
//! - Resolve the identifier shown on the error page
//!
//! # Design Decisions
//! - A distributed-trace id from upstream wins over our own correlation id
//! - Resolution never fails; a fresh UUID is the last resort

use axum::http::{Extensions, HeaderMap, HeaderName};
use tower_http::request_id::RequestId;
use uuid::Uuid;

/// Per-request correlation header, set by `SetRequestIdLayer`.
pub const X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

/// Distributed-trace identifier carried by `trace_header`, if non-empty.
pub fn trace_id<'a>(headers: &'a HeaderMap, trace_header: &HeaderName) -> Option<&'a str> {
    headers
        .get(trace_header)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
}

/// Correlation id the request-id middleware attached to this request.
pub fn correlation_id(extensions: &Extensions) -> Option<&str> {
    extensions
        .get::<RequestId>()
        .and_then(|id| id.header_value().to_str().ok())
        .filter(|v| !v.is_empty())
}

/// Identifier for the error page: trace id, else correlation id, else a new UUID.
pub fn resolve_request_id(
    headers: &HeaderMap,
    extensions: &Extensions,
    trace_header: &HeaderName,
) -> String {
    if let Some(id) = trace_id(headers, trace_header) {
        return id.to_string();
    }
    if let Some(id) = correlation_id(extensions) {
        return id.to_string();
    }
    let id = Uuid::new_v4().to_string();
    tracing::debug!(request_id = %id, "No trace or correlation id on request, generated one");
    id
}
