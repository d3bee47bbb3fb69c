//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! bound Listener
//!     → server.rs (per-listener Axum router, serve loop)
//!     → handler.rs (greeting carrying the ServerIndex)
//!     → Send to client
//! ```

pub mod handler;
pub mod server;

pub use server::HttpServer;
