//! Auth screens.
//!
//! Every screen renders with an identity from the configured
//! [`IdentityResolver`]; none of them reads credentials, sessions or cookies.

use axum::{
    extract::State,
    http::HeaderMap,
    response::{Html, Response},
    routing::get,
    Router,
};

use crate::error::AppError;
use crate::http::response::found;
use crate::http::AppState;
use crate::identity::IdentityResolver;
use crate::views::{Page, View};

pub const LOGIN_PATH: &str = "/Auth/Login";

pub fn router() -> Router<AppState> {
    Router::new()
        .route(LOGIN_PATH, get(login))
        .route("/Auth/Register", get(register))
        .route("/Auth/ForgotPassword", get(forgot_password))
        .route("/Auth/VerifyOtp", get(verify_otp))
        .route("/Auth/Profile", get(profile))
        .route("/Auth/Logout", get(logout))
}

/// Page for one of the screens shown before signing in.
pub fn guest_page(identity: &dyn IdentityResolver, headers: &HeaderMap, view: View) -> Page {
    Page::with_auth(view, &identity.guest(headers))
}

pub fn profile_page(identity: &dyn IdentityResolver, headers: &HeaderMap) -> Page {
    Page::with_auth(View::Profile, &identity.current(headers))
}

fn guest_screen(state: &AppState, headers: &HeaderMap, view: View) -> Result<Html<String>, AppError> {
    state.render(&guest_page(state.identity.as_ref(), headers, view))
}

async fn login(State(state): State<AppState>, headers: HeaderMap) -> Result<Html<String>, AppError> {
    guest_screen(&state, &headers, View::Login)
}

async fn register(State(state): State<AppState>, headers: HeaderMap) -> Result<Html<String>, AppError> {
    guest_screen(&state, &headers, View::Register)
}

async fn forgot_password(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Html<String>, AppError> {
    guest_screen(&state, &headers, View::ForgotPassword)
}

async fn verify_otp(State(state): State<AppState>, headers: HeaderMap) -> Result<Html<String>, AppError> {
    guest_screen(&state, &headers, View::VerifyOtp)
}

async fn profile(State(state): State<AppState>, headers: HeaderMap) -> Result<Html<String>, AppError> {
    state.render(&profile_page(state.identity.as_ref(), &headers))
}

// Nothing to tear down yet, so logging out is only a redirect.
async fn logout() -> Response {
    found(LOGIN_PATH)
}
