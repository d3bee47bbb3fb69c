//! Optional stop switch for a running Bootstrapper.
//!
//! The binary never triggers it: listeners there run until they fail.

use std::future::Future;

use tokio::sync::broadcast;

/// Broadcasts a single "stop serving" event to every listener subscribed to it.
pub struct Shutdown {
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    /// Future that resolves once `trigger` is called (or the coordinator is dropped).
    ///
    /// Subscription happens here, not when the future is first polled, so a
    /// trigger that races with listener startup is not lost.
    pub fn signal(&self) -> impl Future<Output = ()> + Send + 'static {
        let mut rx = self.tx.subscribe();
        async move {
            let _ = rx.recv().await;
        }
    }

    /// Ask every subscribed listener to stop accepting.
    pub fn trigger(&self) {
        let _ = self.tx.send(());
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}
