//! Marketing and storefront pages.

use axum::{
    extract::{Request, State},
    response::IntoResponse,
    routing::{get, MethodRouter},
    Router,
};

use crate::error::AppError;
use crate::http::request::resolve_request_id;
use crate::http::response::no_store;
use crate::http::AppState;
use crate::views::{Page, View};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", page(View::Index))
        .route("/Home", page(View::Index))
        .route("/Home/Index", page(View::Index))
        .route("/Home/About", page(View::About))
        .route("/Home/Blog", page(View::Blog))
        .route("/Home/BlogSingle", page(View::BlogSingle))
        .route("/Home/Cart", page(View::Cart))
        .route("/Home/Checkout", page(View::Checkout))
        .route("/Home/Contact", page(View::Contact))
        .route("/Home/Menu", page(View::Menu))
        .route("/Home/Privacy", page(View::Privacy))
        .route("/Home/ProductSingle", page(View::ProductSingle))
        .route("/Home/Services", page(View::Services))
        .route("/Home/Shop", page(View::Shop))
        .route("/Home/Error", get(error))
}

/// GET route rendering `view` with no context.
fn page(view: View) -> MethodRouter<AppState> {
    get(move |State(state): State<AppState>| async move { state.render(&Page::new(view)) })
}

/// Page for the error screen of the request with the given id.
pub fn error_page(request_id: impl Into<String>) -> Page {
    Page::with_error(request_id)
}

async fn error(
    State(state): State<AppState>,
    request: Request,
) -> Result<impl IntoResponse, AppError> {
    let request_id = resolve_request_id(request.headers(), request.extensions(), &state.trace_header);
    tracing::debug!(request_id = %request_id, "Rendering error page");
    let body = state.render(&error_page(request_id))?;
    Ok((no_store(), body))
}
