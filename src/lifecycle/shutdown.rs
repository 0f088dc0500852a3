//! Stopping the site.
//!
//! `main` hands one subscription to [`HttpServer::run`](crate::HttpServer::run)
//! and the signal task holds the coordinator; tests trigger it directly to
//! stop a server they spawned.

use tokio::sync::broadcast;

/// Fan-out stop signal for the page server.
///
/// Once triggered, `HttpServer::run` stops accepting, lets in-flight page
/// renders finish and returns.
#[derive(Debug, Clone)]
pub struct Shutdown {
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Stop every subscribed server. A no-op when nobody is listening.
    pub fn trigger(&self) {
        let _ = self.tx.send(());
    }

    /// Number of servers still waiting on the signal.
    pub fn receiver_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}
