//! Structured logging.
//!
//! # Responsibilities
//! - Install the global tracing subscriber
//! - Honour `RUST_LOG`, falling back to `DEFAULT_FILTER`
//!
//! # Design Decisions
//! - Logs go to stderr; stdout stays empty
//! - Per-request spans from TraceLayer only show at debug level

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "multiserv=info";

/// Initialize the tracing subscriber. Call once, before starting listeners.
pub fn init() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
