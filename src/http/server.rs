//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all page routes
//! - Wire up middleware (request ID, tracing, timeout)
//! - Serve static assets for paths no route claims
//! - Bind server to listener and shut down gracefully

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    http::{HeaderName, Request, StatusCode},
    response::Html,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    services::ServeDir,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::SiteConfig;
use crate::error::AppError;
use crate::http::request::X_REQUEST_ID;
use crate::identity::{IdentityResolver, PlaceholderIdentity};
use crate::routes;
use crate::views::{Page, ViewEngine, ViewError};

/// Application state injected into handlers.
#[derive(Clone, Debug)]
pub struct AppState {
    pub views: Arc<ViewEngine>,
    pub identity: Arc<dyn IdentityResolver>,
    pub trace_header: HeaderName,
}

impl AppState {
    pub fn new(views: ViewEngine, identity: Arc<dyn IdentityResolver>, trace_header: HeaderName) -> Self {
        Self {
            views: Arc::new(views),
            identity,
            trace_header,
        }
    }

    pub fn render(&self, page: &Page) -> Result<Html<String>, AppError> {
        let body = self.views.render(page)?;
        tracing::debug!(view = ?page.view, "Rendered page");
        Ok(Html(body))
    }
}

/// Error building the server from configuration.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error(transparent)]
    Views(#[from] ViewError),

    #[error("invalid trace header: {0}")]
    TraceHeader(#[from] axum::http::header::InvalidHeaderName),
}

/// HTTP server for the site.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a server with the placeholder identity resolver.
    pub fn new(config: SiteConfig) -> Result<Self, ServerError> {
        Self::with_identity(config, Arc::new(PlaceholderIdentity))
    }

    pub fn with_identity(
        config: SiteConfig,
        identity: Arc<dyn IdentityResolver>,
    ) -> Result<Self, ServerError> {
        let views = ViewEngine::from_config(&config.templates)?;
        let trace_header = HeaderName::try_from(config.observability.trace_header.as_str())?;
        let state = AppState::new(views, identity, trace_header);

        let router = Self::build_router(&config, state);
        Ok(Self { router })
    }

    /// Build the Axum router with all middleware layers.
    ///
    /// Layers run outermost first: request ID, trace, timeout, propagate ID.
    pub fn build_router(config: &SiteConfig, state: AppState) -> Router {
        let router = routes::router();
        let router = match &config.assets.directory {
            Some(dir) => router.fallback_service(ServeDir::new(dir)),
            None => router.fallback(not_found),
        };

        router.with_state(state).layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::new(X_REQUEST_ID, MakeRequestUuid))
                .layer(TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                    let request_id = request
                        .headers()
                        .get(X_REQUEST_ID)
                        .and_then(|v| v.to_str().ok())
                        .unwrap_or("unknown");
                    tracing::info_span!(
                        "request",
                        method = %request.method(),
                        path = %request.uri().path(),
                        request_id = %request_id,
                    )
                }))
                .layer(TimeoutLayer::with_status_code(
                    StatusCode::REQUEST_TIMEOUT,
                    Duration::from_secs(config.timeouts.request_secs),
                ))
                .layer(PropagateRequestIdLayer::new(X_REQUEST_ID)),
        )
    }

    /// Run the server until `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("HTTP server draining connections");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// The fully layered router, for driving requests without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }
}

async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not Found")
}
