//! Coffee shop storefront site.
//!
//! Serves the marketing, storefront and auth screens as server-rendered
//! pages. Routes pick a view and a small context; `views` renders it.

pub mod config;
pub mod error;
pub mod http;
pub mod identity;
pub mod lifecycle;
pub mod observability;
pub mod routes;
pub mod views;

pub use config::SiteConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
