//! Network layer subsystem.
//!
//! # Data Flow
//! ```text
//! ServerIndex
//!     → address.rs (host + base_port + index)
//!     → listener.rs (bind TCP socket)
//!     → Hand off to HTTP layer
//! ```
//!
//! # Design Decisions
//! - Addresses are derived, never stored or configured per listener
//! - Bind failures are per listener and never fatal to siblings

pub mod address;
pub mod listener;

pub use address::{ListenAddress, ServerIndex};
pub use listener::{ListenError, Listener};
