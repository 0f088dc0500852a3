//! Response helpers.

use axum::http::{header, HeaderName, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};

/// Headers that keep the response out of every cache.
pub fn no_store() -> [(HeaderName, HeaderValue); 2] {
    [
        (
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store, no-cache, max-age=0"),
        ),
        (header::PRAGMA, HeaderValue::from_static("no-cache")),
    ]
}

/// `302 Found` to `location`.
pub fn found(location: &'static str) -> Response {
    (
        StatusCode::FOUND,
        [(header::LOCATION, HeaderValue::from_static(location))],
    )
        .into_response()
}
