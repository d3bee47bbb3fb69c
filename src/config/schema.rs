//! Listener layout settings.
//!
//! The binary never changes these. They exist so that library callers can
//! move the port range (tests run on high ports) or pin the host.

/// Host every listener binds to.
pub const DEFAULT_HOST: &str = "localhost";

/// Port of the listener with index 0.
pub const DEFAULT_BASE_PORT: u16 = 1024;

/// Where the listeners live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiservConfig {
    /// Host part of every listen address (e.g., "localhost").
    pub host: String,

    /// Port of listener 0; listener `i` binds `base_port + i`.
    pub base_port: u16,
}

impl Default for MultiservConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            base_port: DEFAULT_BASE_PORT,
        }
    }
}

impl MultiservConfig {
    /// Same layout, different starting port.
    pub fn with_base_port(mut self, base_port: u16) -> Self {
        self.base_port = base_port;
        self
    }

    /// Same layout, different host.
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }
}
