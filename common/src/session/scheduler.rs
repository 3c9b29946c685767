use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::interval;

/// Raises a tick signal on a fixed interval, independent of how often
/// the front end renders or polls input. The simulation advances once
/// per signal, so game speed never depends on frame rate.
pub struct TickScheduler {
    handle: JoinHandle<()>,
}

impl TickScheduler {
    pub fn spawn(tick_interval: Duration, tick_tx: mpsc::UnboundedSender<()>) -> Self {
        let handle = tokio::spawn(async move {
            let mut timer = interval(tick_interval);
            loop {
                timer.tick().await;
                if tick_tx.send(()).is_err() {
                    break;
                }
            }
        });
        Self { handle }
    }
}

impl Drop for TickScheduler {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
