//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Validate layout → Derive addresses → Spawn one task per listener
//!     → Join all tasks → Report outcomes
//!
//! Shutdown (shutdown.rs):
//!     trigger() → every subscribed listener stops accepting → task returns
//! ```
//!
//! # Design Decisions
//! - No signal handling: the binary serves until every listener fails
//! - Shutdown exists for embedding and tests, never for the binary

pub mod shutdown;
pub mod startup;

pub use shutdown::Shutdown;
pub use startup::{Bootstrapper, ListenerOutcome};
