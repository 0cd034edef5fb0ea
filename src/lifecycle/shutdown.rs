//! The shutdown notification source consumed by the coordinator.

use tokio::sync::broadcast;
use tokio::sync::broadcast::error::RecvError;

/// Producer side of the shutdown notification.
///
/// Cloneable handle over a broadcast channel; any producer (OS signal task,
/// admin hook, test harness) can trigger it, and every listener observes the
/// request. Dropping the last `Shutdown` handle also counts as a shutdown
/// request, so a listener can never wait on a source that no longer exists.
#[derive(Clone)]
pub struct Shutdown {
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    /// Create a new shutdown source.
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    /// Create a listener for the shutdown notification.
    pub fn listener(&self) -> ShutdownListener {
        ShutdownListener {
            rx: self.tx.subscribe(),
        }
    }

    /// Request shutdown. Idempotent; listeners observe at most one request.
    pub fn trigger(&self) {
        let _ = self.tx.send(());
    }

    /// Number of listeners still attached.
    pub fn listener_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

/// Consumer side of the shutdown notification.
pub struct ShutdownListener {
    rx: broadcast::Receiver<()>,
}

impl ShutdownListener {
    /// Wait for the shutdown request.
    ///
    /// Resolves once a request has been made, or once every [`Shutdown`]
    /// handle has been dropped. Each call consumes at most one notification.
    pub async fn recv(&mut self) {
        match self.rx.recv().await {
            Ok(()) | Err(RecvError::Closed) => {}
            // Missed notifications still mean shutdown was requested.
            Err(RecvError::Lagged(_)) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::time::timeout;

    #[tokio::test]
    async fn trigger_wakes_listener() {
        let shutdown = Shutdown::new();
        let mut listener = shutdown.listener();
        shutdown.trigger();
        timeout(Duration::from_secs(1), listener.recv())
            .await
            .expect("listener should observe the trigger");
    }

    #[tokio::test]
    async fn every_listener_observes_the_request() {
        let shutdown = Shutdown::new();
        let mut a = shutdown.listener();
        let mut b = shutdown.listener();
        assert_eq!(shutdown.listener_count(), 2);

        shutdown.trigger();
        timeout(Duration::from_secs(1), a.recv()).await.unwrap();
        timeout(Duration::from_secs(1), b.recv()).await.unwrap();
    }

    #[tokio::test]
    async fn dropping_the_source_counts_as_a_request() {
        let shutdown = Shutdown::new();
        let mut listener = shutdown.listener();
        drop(shutdown);
        timeout(Duration::from_secs(1), listener.recv())
            .await
            .expect("closed channel should resolve the listener");
    }

    #[tokio::test]
    async fn untriggered_listener_stays_pending() {
        let shutdown = Shutdown::new();
        let mut listener = shutdown.listener();
        let waited = timeout(Duration::from_millis(100), listener.recv()).await;
        assert!(waited.is_err());
        drop(shutdown);
    }
}
