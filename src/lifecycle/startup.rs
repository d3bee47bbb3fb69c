//! Startup orchestration: the Bootstrapper.
//!
//! # Responsibilities
//! - Derive one (index, address) pair per server
//! - Spawn one serving task per listener
//! - Join every task, logging each one as it stops
//!
//! # Design Decisions
//! - Listeners are fully independent: a bad or taken port only ends that listener
//! - The JoinSet is the only synchronization; nothing else is shared
//! - Returning at all is abnormal for the binary, so callers get the outcomes
//!   and decide the exit status themselves

use std::collections::HashMap;
use std::future::Future;

use tokio::task::{self, JoinSet};

use crate::config::{MultiservConfig, ServerCount};
use crate::http::HttpServer;
use crate::lifecycle::Shutdown;
use crate::net::{ListenAddress, ListenError, Listener, ServerIndex};

/// Most listeners one Bootstrapper starts: one per possible index.
pub const MAX_LISTENERS: u64 = 1 << 16;

/// How one listener ended.
#[derive(Debug)]
pub struct ListenerOutcome {
    pub index: ServerIndex,
    pub address: ListenAddress,
    pub result: Result<(), ListenError>,
}

/// Which listener each running task serves.
type Started = HashMap<task::Id, (ServerIndex, ListenAddress)>;

/// Starts `n` HTTP servers on consecutive ports and waits for all of them.
#[derive(Debug, Clone)]
pub struct Bootstrapper {
    config: MultiservConfig,
    count: ServerCount,
}

impl Bootstrapper {
    pub fn new(config: MultiservConfig, count: ServerCount) -> Self {
        Self { config, count }
    }

    /// Every listener this Bootstrapper will start, in index order.
    ///
    /// Ports past 65535 are included; those listeners fail at bind time.
    pub fn addresses(&self) -> Vec<(ServerIndex, ListenAddress)> {
        let listeners = self.count.listeners().min(MAX_LISTENERS);
        (0..=u16::MAX)
            .take(usize::try_from(listeners).unwrap_or(usize::MAX))
            .map(ServerIndex::new)
            .map(|index| (index, ListenAddress::for_index(&self.config, index)))
            .collect()
    }

    /// Serve until every listener has failed. There is no way to stop it
    /// short of dropping the future.
    pub async fn run(self) -> Vec<ListenerOutcome> {
        self.launch(std::future::pending::<()>).await
    }

    /// Like [`run`](Self::run), but every listener also stops cleanly once
    /// `shutdown` is triggered.
    pub async fn run_until(self, shutdown: &Shutdown) -> Vec<ListenerOutcome> {
        self.launch(|| shutdown.signal()).await
    }

    async fn launch<S, F>(self, mut signal: S) -> Vec<ListenerOutcome>
    where
        S: FnMut() -> F,
        F: Future<Output = ()> + Send + 'static,
    {
        let mut listeners = JoinSet::new();
        let mut started = Started::new();

        for (index, address) in self.addresses() {
            tracing::info!(
                address = %address,
                index = %index,
                "Starting HTTP server"
            );
            let task = listeners.spawn(serve(index, address.clone(), signal()));
            started.insert(task.id(), (index, address));
        }

        let skipped = self.count.listeners().saturating_sub(MAX_LISTENERS);
        if skipped > 0 {
            tracing::error!(skipped, "Not starting servers past index 65535");
        }

        join_listeners(listeners, started).await
    }
}

/// Bind and serve one listener, then log how it ended.
async fn serve<F>(index: ServerIndex, address: ListenAddress, shutdown: F) -> ListenerOutcome
where
    F: Future<Output = ()> + Send + 'static,
{
    let result = match Listener::bind(&address).await {
        Ok(listener) => HttpServer::new(index).run(listener, shutdown).await,
        Err(e) => Err(e),
    };

    match &result {
        Ok(()) => tracing::warn!(address = %address, "HTTP server exited"),
        Err(e) => log_failure(e),
    }

    ListenerOutcome {
        index,
        address,
        result,
    }
}

/// Wait for every listener task. A task that panicked still counts, as a
/// `Crashed` outcome for the listener it was serving.
async fn join_listeners(
    mut listeners: JoinSet<ListenerOutcome>,
    mut started: Started,
) -> Vec<ListenerOutcome> {
    let mut outcomes = Vec::with_capacity(listeners.len());

    while let Some(joined) = listeners.join_next_with_id().await {
        match joined {
            Ok((_, outcome)) => outcomes.push(outcome),
            Err(e) => {
                if let Some((index, address)) = started.remove(&e.id()) {
                    let error = ListenError::Crashed {
                        address: address.clone(),
                        reason: e.to_string(),
                    };
                    log_failure(&error);
                    outcomes.push(ListenerOutcome {
                        index,
                        address,
                        result: Err(error),
                    });
                }
            }
        }
    }

    outcomes.sort_by_key(|outcome| outcome.index);
    outcomes
}

fn log_failure(error: &ListenError) {
    tracing::error!(
        address = %error.address(),
        error = %error,
        "HTTP server exited with error"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn addresses_follow_index_order() {
        let bootstrapper = Bootstrapper::new(MultiservConfig::default(), ServerCount::new(3));
        let addresses: Vec<String> = bootstrapper
            .addresses()
            .into_iter()
            .map(|(index, address)| format!("{index}@{address}"))
            .collect();
        assert_eq!(
            addresses,
            ["0@localhost:1024", "1@localhost:1025", "2@localhost:1026"]
        );
    }

    #[test]
    fn noop_count_has_no_addresses() {
        for count in [0, -3] {
            let bootstrapper =
                Bootstrapper::new(MultiservConfig::default(), ServerCount::new(count));
            assert!(bootstrapper.addresses().is_empty());
        }
    }

    #[test]
    fn addresses_keep_ports_past_65535_and_stop_at_last_index() {
        let bootstrapper =
            Bootstrapper::new(MultiservConfig::default(), ServerCount::new(70_000));
        let addresses = bootstrapper.addresses();
        assert_eq!(addresses.len(), 65_536);

        let (index, address) = addresses.last().unwrap();
        assert_eq!(index.get(), u16::MAX);
        assert_eq!(address.port(), 1024 + 65_535);
        assert_eq!(address.tcp_port(), None);
    }

    #[tokio::test]
    async fn noop_run_returns_immediately() {
        let bootstrapper = Bootstrapper::new(MultiservConfig::default(), ServerCount::new(0));
        assert!(bootstrapper.run().await.is_empty());
    }

    #[tokio::test]
    async fn run_until_stops_every_listener_cleanly() {
        let config = MultiservConfig::default().with_base_port(39021);
        let bootstrapper = Bootstrapper::new(config, ServerCount::new(2));
        let shutdown = Shutdown::new();

        let stopper = async {
            tokio::time::sleep(Duration::from_millis(200)).await;
            shutdown.trigger();
        };
        let (outcomes, ()) = tokio::join!(bootstrapper.run_until(&shutdown), stopper);

        assert_eq!(outcomes.len(), 2);
        for (i, outcome) in outcomes.iter().enumerate() {
            assert_eq!(usize::from(outcome.index.get()), i);
            assert!(outcome.result.is_ok(), "{:?}", outcome.result);
        }
    }

    #[tokio::test]
    async fn ports_past_65535_fail_alone() {
        let config = MultiservConfig::default().with_base_port(65534);
        let bootstrapper = Bootstrapper::new(config, ServerCount::new(4));
        let shutdown = Shutdown::new();

        let stopper = async {
            tokio::time::sleep(Duration::from_millis(200)).await;
            shutdown.trigger();
        };
        let (outcomes, ()) = tokio::join!(bootstrapper.run_until(&shutdown), stopper);

        assert_eq!(outcomes.len(), 4);
        assert!(outcomes[0].result.is_ok(), "{:?}", outcomes[0].result);
        assert!(outcomes[1].result.is_ok(), "{:?}", outcomes[1].result);
        for outcome in &outcomes[2..] {
            assert!(matches!(outcome.result, Err(ListenError::InvalidPort { .. })));
        }
        assert_eq!(outcomes[3].address.to_string(), "localhost:65537");
    }

    async fn crash() -> ListenerOutcome {
        panic!("listener blew up")
    }

    #[tokio::test]
    async fn panicked_task_is_reported_with_its_address() {
        let config = MultiservConfig::default();
        let mut listeners = JoinSet::new();
        let mut started = Started::new();

        let crashing = ListenAddress::for_index(&config, ServerIndex::new(0));
        let task = listeners.spawn(crash());
        started.insert(task.id(), (ServerIndex::new(0), crashing.clone()));

        let healthy = ListenAddress::for_index(&config, ServerIndex::new(1));
        let outcome = ListenerOutcome {
            index: ServerIndex::new(1),
            address: healthy.clone(),
            result: Ok(()),
        };
        let task = listeners.spawn(async move { outcome });
        started.insert(task.id(), (ServerIndex::new(1), healthy));

        let outcomes = join_listeners(listeners, started).await;

        assert_eq!(outcomes.len(), 2);
        match &outcomes[0].result {
            Err(ListenError::Crashed { address, reason }) => {
                assert_eq!(address, &crashing);
                assert!(reason.contains("panic"), "{reason}");
            }
            other => panic!("expected a crash for listener 0, got {other:?}"),
        }
        assert!(outcomes[1].result.is_ok());
    }
}
