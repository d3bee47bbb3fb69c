//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Bootstrapper, listeners, TraceLayer
//!     → tracing events with structured fields
//!     → logging.rs (fmt subscriber on stderr, filtered by RUST_LOG)
//! ```

pub mod logging;
