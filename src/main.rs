//! Coffee storefront site.
//!
//! ```text
//!     Client Request
//!     ──────────────▶ listener ──▶ middleware ──▶ routes ──▶ views
//!                                  (request id,   (auth,     (minijinja)
//!                                   trace,         site)
//!                                   timeout)
//!     ◀──────────────────────────────────────────── HTML / redirect
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use coffee_site::config::resolve_config;
use coffee_site::lifecycle::{wait_for_signal, Shutdown};
use coffee_site::observability::init_logging;
use coffee_site::HttpServer;

#[derive(Parser)]
#[command(name = "coffee-site")]
#[command(about = "Coffee shop storefront web server", long_about = None)]
struct Cli {
    /// Path to a TOML config file. Defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override `listener.bind_address`.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = resolve_config(cli.config.as_deref(), cli.bind)?;

    init_logging(&config.observability);
    tracing::info!("coffee-site v{} starting", env!("CARGO_PKG_VERSION"));

    tracing::info!(
        config_file = ?cli.config,
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        templates = ?config.templates.directory,
        assets = ?config.assets.directory,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let server = HttpServer::new(config)?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn({
        let shutdown = shutdown.clone();
        async move { wait_for_signal(&shutdown).await }
    });

    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
