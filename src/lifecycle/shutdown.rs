//! Shutdown coordination.

use tokio::sync::broadcast;

/// Coordinator for graceful shutdown.
///
/// Long-running tasks hold a [`ShutdownSignal`] and stop when it resolves.
#[derive(Debug)]
pub struct Shutdown {
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    /// A signal that resolves on [`Shutdown::trigger`] or when the
    /// coordinator is dropped.
    pub fn subscribe(&self) -> ShutdownSignal {
        ShutdownSignal {
            rx: self.tx.subscribe(),
            ctrl_c: false,
        }
    }

    pub fn trigger(&self) {
        let _ = self.tx.send(());
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

/// Future-like handle given to tasks that must stop on shutdown.
#[derive(Debug)]
pub struct ShutdownSignal {
    rx: broadcast::Receiver<()>,
    ctrl_c: bool,
}

impl ShutdownSignal {
    /// Also resolve on Ctrl+C.
    pub fn with_ctrl_c(mut self) -> Self {
        self.ctrl_c = true;
        self
    }

    pub async fn wait(mut self) {
        let listen = self.ctrl_c;
        let ctrl_c = async move {
            if !listen {
                return std::future::pending::<()>().await;
            }
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to install Ctrl+C handler");
                std::future::pending::<()>().await;
            }
        };

        tokio::select! {
            _ = ctrl_c => {}
            _ = self.rx.recv() => {}
        }
        tracing::info!("Shutdown signal received");
    }
}
