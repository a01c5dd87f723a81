//! Fixed-interval polling task.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinHandle;

use crate::api::client::StatusClient;
use crate::domain::App;

/// Scheduled polling task driving the status fetch loop.
///
/// Runs until [`Poller::stop`] is called; an embedding host owns the
/// handle and tears the task down with it.
pub struct Poller {
    shutdown_tx: mpsc::Sender<()>,
    handle: JoinHandle<()>,
}

impl Poller {
    /// Spawn the polling task. The first tick fires immediately; each tick
    /// issues one fetch and applies the outcome to the shared app state.
    pub fn spawn(client: StatusClient, app: Arc<Mutex<App>>, period: Duration) -> Self {
        let (shutdown_tx, mut shutdown_rx) = mpsc::channel::<()>(1);

        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            loop {
                tokio::select! {
                    _ = interval.tick() => {
                        let outcome = client.try_fetch().await;
                        app.lock().await.apply_poll(outcome);
                    }
                    _ = shutdown_rx.recv() => break,
                }
            }
        });

        Self {
            shutdown_tx,
            handle,
        }
    }

    /// Stop the polling task and wait for it to wind down.
    pub async fn stop(self) {
        let _ = self.shutdown_tx.send(()).await;
        self.handle.abort();
        let _ = self.handle.await;
    }
}
