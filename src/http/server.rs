//! HTTP server for one listener.
//!
//! # Responsibilities
//! - Build the listener's own Axum Router
//! - Wire up request tracing
//! - Run the accept/serve loop on a bound listener

use std::future::Future;

use axum::{routing::any, Router};
use tower_http::trace::TraceLayer;

use crate::http::handler::hello;
use crate::net::{ListenError, Listener, ServerIndex};

/// One listener's HTTP server. Owns its router exclusively.
pub struct HttpServer {
    index: ServerIndex,
    router: Router,
}

impl HttpServer {
    /// Create the server for listener `index`.
    pub fn new(index: ServerIndex) -> Self {
        Self {
            index,
            router: Self::build_router(index),
        }
    }

    /// Build the Axum router: `/` and everything below it answer with the greeting.
    pub fn build_router(index: ServerIndex) -> Router {
        Router::new()
            .route("/{*path}", any(hello))
            .route("/", any(hello))
            .with_state(index)
            .layer(TraceLayer::new_for_http())
    }

    /// Serve on `listener` until the loop fails or `shutdown` resolves.
    ///
    /// Pass `std::future::pending()` to serve forever.
    pub async fn run<F>(self, listener: Listener, shutdown: F) -> Result<(), ListenError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let address = listener.address().clone();
        tracing::debug!(
            address = %address,
            local_addr = %listener.local_addr(),
            index = %self.index,
            "HTTP server accepting connections"
        );

        axum::serve(listener.into_inner(), self.router)
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|source| ListenError::Serve { address, source })
    }
}
