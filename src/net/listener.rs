//! TCP listener for one server.
//!
//! # Responsibilities
//! - Resolve the listener's host and pick one socket address
//! - Bind exactly that address
//! - Report failures with the address that failed
//!
//! # Design Decisions
//! - The first IPv4 address a host resolves to wins, else the first address;
//!   there is no fallback to the other addresses, so a taken port is an error
//! - No connection limit: each listener serves whatever arrives

use std::io;
use std::net::SocketAddr;

use thiserror::Error;
use tokio::net::TcpListener;

use crate::net::ListenAddress;

/// Ways a listener can stop.
#[derive(Debug, Error)]
pub enum ListenError {
    /// The derived port does not exist (past 65535).
    #[error("failed to bind {address}: invalid port")]
    InvalidPort { address: ListenAddress },

    /// Failed to resolve or bind the address (port in use, permission denied...).
    #[error("failed to bind {address}: {source}")]
    Bind {
        address: ListenAddress,
        #[source]
        source: io::Error,
    },

    /// The accept/serve loop returned an error.
    #[error("server at {address} failed: {source}")]
    Serve {
        address: ListenAddress,
        #[source]
        source: io::Error,
    },

    /// The task serving the listener panicked or was cancelled.
    #[error("server at {address} crashed: {reason}")]
    Crashed {
        address: ListenAddress,
        reason: String,
    },
}

impl ListenError {
    /// Address of the listener that failed.
    pub fn address(&self) -> &ListenAddress {
        match self {
            ListenError::InvalidPort { address }
            | ListenError::Bind { address, .. }
            | ListenError::Serve { address, .. }
            | ListenError::Crashed { address, .. } => address,
        }
    }
}

/// A bound, not yet serving, TCP listener.
pub struct Listener {
    inner: TcpListener,
    address: ListenAddress,
    local_addr: SocketAddr,
}

impl Listener {
    /// Bind to `address`.
    pub async fn bind(address: &ListenAddress) -> Result<Self, ListenError> {
        let bind_error = |source| ListenError::Bind {
            address: address.clone(),
            source,
        };

        let port = address.tcp_port().ok_or_else(|| ListenError::InvalidPort {
            address: address.clone(),
        })?;
        let socket_addr = resolve(address.host(), port).await.map_err(bind_error)?;

        let inner = TcpListener::bind(socket_addr).await.map_err(bind_error)?;
        let local_addr = inner.local_addr().map_err(bind_error)?;

        tracing::debug!(
            address = %address,
            local_addr = %local_addr,
            "Listener bound"
        );

        Ok(Self {
            inner,
            address: address.clone(),
            local_addr,
        })
    }

    /// Address this listener was asked to bind.
    pub fn address(&self) -> &ListenAddress {
        &self.address
    }

    /// Socket address the OS actually bound.
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Hand the socket to the HTTP layer.
    pub fn into_inner(self) -> TcpListener {
        self.inner
    }
}

/// First IPv4 address of `host`, or its first address if it has no IPv4 one.
async fn resolve(host: &str, port: u16) -> io::Result<SocketAddr> {
    let candidates: Vec<SocketAddr> = tokio::net::lookup_host((host, port)).await?.collect();
    candidates
        .iter()
        .find(|addr| addr.is_ipv4())
        .or_else(|| candidates.first())
        .copied()
        .ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::AddrNotAvailable,
                format!("{} resolved to no address", host),
            )
        })
}
