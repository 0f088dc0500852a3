//! Route table behaviour through the full middleware stack.

use std::sync::Arc;

use axum::http::{header, HeaderMap, StatusCode};
use coffee_site::identity::{Identity, IdentityResolver};
use coffee_site::{HttpServer, SiteConfig};

mod common;

const GUEST_SCREENS: [&str; 4] = [
    "/Auth/Login",
    "/Auth/Register",
    "/Auth/ForgotPassword",
    "/Auth/VerifyOtp",
];

const SITE_PAGES: [&str; 14] = [
    "/",
    "/Home",
    "/Home/Index",
    "/Home/About",
    "/Home/Blog",
    "/Home/BlogSingle",
    "/Home/Cart",
    "/Home/Checkout",
    "/Home/Contact",
    "/Home/Menu",
    "/Home/Privacy",
    "/Home/ProductSingle",
    "/Home/Services",
    "/Home/Shop",
];

#[tokio::test]
async fn test_guest_screens_render_signed_out() {
    let app = common::app();
    for path in GUEST_SCREENS {
        let res = common::get(&app, path).await;
        assert_eq!(res.status(), StatusCode::OK, "{path}");
        let body = common::body_string(res).await;
        assert!(body.contains(r#"href="/Auth/Login">Login</a>"#), "{path}");
        assert!(!body.contains("/Auth/Logout"), "{path}");
        assert!(!body.contains("Coffee Lover"), "{path}");
    }
}

#[tokio::test]
async fn test_profile_renders_placeholder_user() {
    let app = common::app();
    let res = common::get(&app, "/Auth/Profile").await;
    assert_eq!(res.status(), StatusCode::OK);

    let body = common::body_string(res).await;
    assert!(body.contains(r#"<p class="user-name">Coffee Lover</p>"#));
    assert!(body.contains("/Auth/Logout"));
}

#[tokio::test]
async fn test_profile_ignores_session_cookies() {
    let app = common::app();
    let res = common::get_with_headers(
        &app,
        "/Auth/Profile",
        &[("cookie", "session=abc"), ("authorization", "Bearer someone")],
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    assert!(common::body_string(res).await.contains("Coffee Lover"));
}

#[tokio::test]
async fn test_logout_redirects_to_login() {
    let app = common::app();
    let res = common::get(&app, "/Auth/Logout").await;
    assert_eq!(res.status(), StatusCode::FOUND);
    assert_eq!(res.headers()[header::LOCATION], "/Auth/Login");
}

#[tokio::test]
async fn test_site_pages_render_without_context() {
    let app = common::app();
    for path in SITE_PAGES {
        let res = common::get(&app, path).await;
        assert_eq!(res.status(), StatusCode::OK, "{path}");
        assert!(res.headers().get(header::CACHE_CONTROL).is_none(), "{path}");
        let body = common::body_string(res).await;
        assert!(!body.contains("Request ID"), "{path}");
        assert!(!body.contains("/Auth/Logout"), "{path}");
    }
}

#[tokio::test]
async fn test_error_page_uses_trace_id() {
    let app = common::app();
    let res = common::get_with_headers(&app, "/Home/Error", &[("traceparent", "abc123")]).await;
    assert_eq!(res.status(), StatusCode::OK);

    let cache = res.headers()[header::CACHE_CONTROL].to_str().unwrap().to_string();
    assert!(cache.contains("no-store"));
    assert!(cache.contains("max-age=0"));
    assert_eq!(res.headers()[header::PRAGMA], "no-cache");

    let body = common::body_string(res).await;
    assert!(body.contains(r#"<code class="request-id">abc123</code>"#));
}

#[tokio::test]
async fn test_error_page_falls_back_to_request_id() {
    let app = common::app();
    let res = common::get(&app, "/Home/Error").await;
    assert_eq!(res.status(), StatusCode::OK);
    assert!(res.headers()[header::CACHE_CONTROL]
        .to_str()
        .unwrap()
        .contains("no-store"));

    let request_id = res.headers()["x-request-id"].to_str().unwrap().to_string();
    let body = common::body_string(res).await;
    assert!(body.contains(&format!(r#"<code class="request-id">{request_id}</code>"#)));
}

#[tokio::test]
async fn test_client_request_id_is_kept() {
    let app = common::app();
    let res = common::get_with_headers(&app, "/Home/Error", &[("x-request-id", "client-42")]).await;
    assert_eq!(res.headers()["x-request-id"], "client-42");
    assert!(common::body_string(res).await.contains("client-42"));
}

#[tokio::test]
async fn test_routes_are_idempotent() {
    let app = common::app();
    for path in GUEST_SCREENS.iter().chain(SITE_PAGES.iter()).chain(["/Auth/Profile"].iter()) {
        let first = common::get(&app, path).await;
        let second = common::get(&app, path).await;
        assert_eq!(first.status(), second.status(), "{path}");
        assert_eq!(
            common::body_string(first).await,
            common::body_string(second).await,
            "{path}"
        );
    }

    let mut error_ids = Vec::new();
    for _ in 0..2 {
        let res = common::get(&app, "/Home/Error").await;
        assert_eq!(res.status(), StatusCode::OK);
        assert!(res.headers()[header::CACHE_CONTROL]
            .to_str()
            .unwrap()
            .contains("no-store"));
        let body = common::body_string(res).await;
        let start = body
            .find(r#"<code class="request-id">"#)
            .expect("error page renders a request id");
        error_ids.push(body[start..].split("</code>").next().unwrap().to_string());
    }
    // Same shape both times; the id itself is per request.
    assert_ne!(error_ids[0], error_ids[1]);

    let first = common::get(&app, "/Auth/Logout").await;
    let second = common::get(&app, "/Auth/Logout").await;
    assert_eq!(first.status(), second.status());
    assert_eq!(
        first.headers()[header::LOCATION],
        second.headers()[header::LOCATION]
    );
}

#[tokio::test]
async fn test_unknown_path_is_not_found() {
    let app = common::app();
    let res = common::get(&app, "/Home/Nope").await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_only_get_is_routed() {
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    let res = common::app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/Auth/Login")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_guest_forms_submit_to_routed_method() {
    let app = common::app();
    for path in GUEST_SCREENS {
        let body = common::body_string(common::get(&app, path).await).await;
        assert!(body.contains(r#"<form method="get""#), "{path}");
        assert!(!body.contains(r#"method="post""#), "{path}");
    }
}

#[derive(Debug)]
struct SignedInAs(&'static str);

impl IdentityResolver for SignedInAs {
    fn guest(&self, _headers: &HeaderMap) -> Identity {
        Identity::anonymous()
    }

    fn current(&self, _headers: &HeaderMap) -> Identity {
        Identity::authenticated(self.0)
    }
}

#[tokio::test]
async fn test_custom_identity_resolver_drives_profile() {
    let server = HttpServer::with_identity(SiteConfig::default(), Arc::new(SignedInAs("Alice")))
        .expect("server builds");
    let app = server.router();

    let res = common::get(&app, "/Auth/Profile").await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = common::body_string(res).await;
    assert!(body.contains(r#"<p class="user-name">Alice</p>"#));
    assert!(!body.contains("Coffee Lover"));

    let res = common::get(&app, "/Auth/Login").await;
    assert_eq!(res.status(), StatusCode::OK);
    assert!(!common::body_string(res).await.contains("Alice"));
}

#[tokio::test]
async fn test_paths_match_case_sensitively() {
    let app = common::app();
    assert_eq!(common::get(&app, "/Home/Menu").await.status(), StatusCode::OK);
    assert_eq!(common::get(&app, "/home/menu").await.status(), StatusCode::NOT_FOUND);
}
