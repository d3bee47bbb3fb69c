//! Listener identities and the addresses derived from them.

use std::fmt;

use crate::config::MultiservConfig;

/// Identity of one listener, in `[0, n)`.
///
/// Shows up both in the port offset and in the response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ServerIndex(u16);

impl ServerIndex {
    pub fn new(index: u16) -> Self {
        Self(index)
    }

    pub fn get(self) -> u16 {
        self.0
    }
}

impl fmt::Display for ServerIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// `host:port` a listener binds to.
///
/// The port is `base_port + index` and may lie past 65535; such an address
/// exists only to be reported, binding it fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListenAddress {
    host: String,
    port: u32,
}

impl ListenAddress {
    /// Address of listener `index` under `config`.
    pub fn for_index(config: &MultiservConfig, index: ServerIndex) -> Self {
        Self {
            host: config.host.clone(),
            port: u32::from(config.base_port) + u32::from(index.get()),
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u32 {
        self.port
    }

    /// The port as a real TCP port, if it is one.
    pub fn tcp_port(&self) -> Option<u16> {
        u16::try_from(self.port).ok()
    }
}

impl fmt::Display for ListenAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}
