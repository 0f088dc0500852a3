//! Shared helpers for integration tests.
#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Request, Response},
    Router,
};
use coffee_site::{HttpServer, SiteConfig};
use tower::ServiceExt;

/// Fully layered router with default configuration.
pub fn app() -> Router {
    app_with(SiteConfig::default())
}

pub fn app_with(config: SiteConfig) -> Router {
    HttpServer::new(config).expect("server builds").router()
}

pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    get_with_headers(app, uri, &[]).await
}

pub async fn get_with_headers(app: &Router, uri: &str, headers: &[(&str, &str)]) -> Response<Body> {
    let mut builder = Request::builder().uri(uri);
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }
    app.clone()
        .oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
