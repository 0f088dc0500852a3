//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → request.rs (request ID, trace id resolution)
//!     → routes (auth / site actions build a Page)
//!     → views (render Page to HTML)
//!     → response.rs (cache headers, redirects)
//!     → Send to client
//! ```

pub mod request;
pub mod response;
pub mod server;

pub use request::{resolve_request_id, X_REQUEST_ID};
pub use server::{AppState, HttpServer, ServerError};
