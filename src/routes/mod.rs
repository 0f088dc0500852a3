//! Route table.
//!
//! # Design Decisions
//! - Paths follow the `/{Controller}/{Action}` scheme, matched case-sensitively:
//!   `/Home/Menu` renders, `/home/menu` is a 404. Conventional MVC routing
//!   ignores case; links in the templates always use the canonical casing
//! - Every route is a GET; unknown paths fall through to static assets or 404
//! - Actions are stateless and build a fresh `Page` per request

pub mod auth;
pub mod site;

use axum::Router;

use crate::http::AppState;

pub fn router() -> Router<AppState> {
    Router::new().merge(site::router()).merge(auth::router())
}
