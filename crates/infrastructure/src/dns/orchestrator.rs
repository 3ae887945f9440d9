use crate::dns::listener::Listener;
use crate::dns::server::RecordTableHandler;
use crate::dns::signal::TerminationSignals;
use static_dns_domain::{DomainError, Endpoint};
use std::io;
use std::time::Duration;
use tokio::task::{AbortHandle, JoinSet};
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

const DEFAULT_TCP_TIMEOUT: Duration = Duration::from_secs(10);

/// How one listener ended.
#[derive(Debug)]
pub struct ListenerOutcome {
    pub index: usize,
    pub endpoint: Endpoint,
    pub result: Result<(), DomainError>,
}

/// Tracks one spawned listener so shutdown can be requested on it.
struct ListenerHandle {
    index: usize,
    endpoint: Endpoint,
    shutdown: CancellationToken,
    task: AbortHandle,
}

impl ListenerHandle {
    fn request_shutdown(&self) {
        if self.task.is_finished() {
            return;
        }
        info!(listener = self.index, endpoint = %self.endpoint, "Requesting listener shutdown");
        self.shutdown.cancel();
    }

    fn abort(&self) {
        if self.task.is_finished() {
            return;
        }
        warn!(listener = self.index, endpoint = %self.endpoint, "Aborting listener");
        self.task.abort();
    }
}

/// Runs one listener per endpoint and shuts them all down together.
///
/// Shutdown starts on SIGINT/SIGTERM or when the token passed to
/// [`with_shutdown_token`](Self::with_shutdown_token) is cancelled.
/// A second signal while listeners are draining aborts them.
/// A listener that fails does not affect the others.
pub struct ListenerOrchestrator {
    endpoints: Vec<Endpoint>,
    handler: RecordTableHandler,
    tcp_timeout: Duration,
    shutdown: CancellationToken,
}

impl ListenerOrchestrator {
    pub fn new(endpoints: Vec<Endpoint>, handler: RecordTableHandler) -> Self {
        Self {
            endpoints,
            handler,
            tcp_timeout: DEFAULT_TCP_TIMEOUT,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_tcp_timeout(mut self, tcp_timeout: Duration) -> Self {
        self.tcp_timeout = tcp_timeout;
        self
    }

    pub fn with_shutdown_token(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    /// Returns once every listener has terminated, by error or by shutdown.
    pub async fn run(self) -> Vec<ListenerOutcome> {
        info!(listeners = self.endpoints.len(), "Starting listeners");

        let signals = TerminationSignals::install();

        let mut join_set: JoinSet<ListenerOutcome> = JoinSet::new();
        let mut handles = Vec::with_capacity(self.endpoints.len());

        for (index, endpoint) in self.endpoints.into_iter().enumerate() {
            let shutdown = CancellationToken::new();
            let task = join_set.spawn(run_listener(
                index,
                endpoint.clone(),
                self.handler.clone(),
                self.tcp_timeout,
                shutdown.clone(),
            ));
            handles.push(ListenerHandle {
                index,
                endpoint,
                shutdown,
                task,
            });
        }

        let watcher = tokio::spawn(watch_for_shutdown(self.shutdown, signals, handles));

        let mut outcomes = Vec::new();
        while let Some(joined) = join_set.join_next().await {
            match joined {
                Ok(outcome) => outcomes.push(outcome),
                Err(e) if e.is_cancelled() => warn!("Listener task aborted"),
                Err(e) => error!(error = %e, "Listener task panicked"),
            }
        }

        watcher.abort();
        outcomes.sort_by_key(|outcome| outcome.index);
        info!("All listeners terminated");
        outcomes
    }
}

async fn run_listener(
    index: usize,
    endpoint: Endpoint,
    handler: RecordTableHandler,
    tcp_timeout: Duration,
    shutdown: CancellationToken,
) -> ListenerOutcome {
    let result = match Listener::bind(&endpoint).await {
        Ok(listener) => {
            match listener.local_addr() {
                Ok(addr) => info!(
                    listener = index,
                    endpoint = %endpoint,
                    transport = %listener.transport(),
                    local_addr = %addr,
                    "DNS listener ready"
                ),
                Err(_) => info!(listener = index, endpoint = %endpoint, "DNS listener ready"),
            }
            listener.serve(handler, tcp_timeout, shutdown).await
        }
        Err(e) => Err(e),
    };

    match &result {
        Ok(()) => info!(listener = index, endpoint = %endpoint, "Listener terminated"),
        Err(e @ DomainError::Shutdown { .. }) => {
            warn!(listener = index, endpoint = %endpoint, error = %e, "Listener failed to terminate cleanly")
        }
        Err(e) => error!(listener = index, endpoint = %endpoint, error = %e, "Listener failed"),
    }

    ListenerOutcome {
        index,
        endpoint,
        result,
    }
}

async fn watch_for_shutdown(
    trigger: CancellationToken,
    signals: io::Result<TerminationSignals>,
    handles: Vec<ListenerHandle>,
) {
    let mut signals = match signals {
        Ok(signals) => Some(signals),
        Err(e) => {
            error!(error = %e, "Failed to install signal handlers");
            None
        }
    };

    match signals.as_mut() {
        Some(signals) => tokio::select! {
            Some(name) = signals.recv() => info!(signal = name, "Received {}", name),
            _ = trigger.cancelled() => info!("Shutdown requested"),
        },
        None => {
            trigger.cancelled().await;
            info!("Shutdown requested");
        }
    }

    for handle in &handles {
        handle.request_shutdown();
    }

    if let Some(signals) = signals.as_mut() {
        if let Some(name) = signals.recv().await {
            warn!(signal = name, "Received {} while draining, aborting listeners", name);
            for handle in &handles {
                handle.abort();
            }
        }
    }
}
