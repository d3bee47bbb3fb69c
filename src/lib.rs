//! multiserv: N independent HTTP servers on consecutive local ports.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod net;
pub mod observability;

pub use config::{Cli, MultiservConfig, ServerCount, UsageError};
pub use http::HttpServer;
pub use lifecycle::{Bootstrapper, ListenerOutcome, Shutdown};
