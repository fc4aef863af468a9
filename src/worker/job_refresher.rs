use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::time::sleep;
use tracing::{debug, info};

use crate::backend::JobBoardApi;
use crate::board::JobBoard;

/// Background worker keeping the shared job list current
pub struct JobRefresher {
    backend: Arc<dyn JobBoardApi>,
    board: JobBoard,
    interval: Duration,
}

impl JobRefresher {
    pub fn new(backend: Arc<dyn JobBoardApi>, board: JobBoard, interval: Duration) -> Self {
        Self {
            backend,
            board,
            interval,
        }
    }

    /// Reload the job list every `interval` until shutdown is signaled.
    ///
    /// A failed reload is logged by the board and retried on the next tick;
    /// readers keep the previous list meanwhile.
    pub async fn run(&self, mut shutdown_rx: watch::Receiver<bool>) {
        info!("Job refresher started, interval={:?}", self.interval);

        loop {
            tokio::select! {
                _ = sleep(self.interval) => {
                    debug!("Job refresher tick");
                    let _ = self.board.refresh(self.backend.as_ref()).await;
                }
                changed = shutdown_rx.changed() => {
                    if changed.is_err() || *shutdown_rx.borrow() {
                        break;
                    }
                }
            }
        }

        info!("Job refresher stopped");
    }
}
