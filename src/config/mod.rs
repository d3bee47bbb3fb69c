//! Configuration subsystem.
//!
//! # Data Flow
//! ```text
//! argv
//!     → cli.rs (exactly one token, parsed as an integer)
//!     → MultiservConfig + ServerCount (immutable)
//!     → handed to the Bootstrapper
//! ```
//!
//! # Design Decisions
//! - The count is the only user input; everything else is a default
//! - Counts <= 0 are valid and mean "start nothing"
//! - Only the argument itself can be a usage error; a bad port is the
//!   listener's problem, not the process's

pub mod cli;
pub mod schema;

pub use cli::{Cli, ServerCount, UsageError};
pub use schema::MultiservConfig;
