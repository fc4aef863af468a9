use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::backend::{BackendError, JobBoardApi};
use crate::models::Job;

#[derive(Default)]
struct Snapshot {
    jobs: Arc<Vec<Job>>,
    refreshed_at: Option<DateTime<Utc>>,
}

/// Shared, read-mostly copy of the public job list.
///
/// Readers get an `Arc` to a complete list; a refresh swaps the whole list
/// at once so nobody sees a half-updated one.
#[derive(Clone, Default)]
pub struct JobBoard {
    inner: Arc<RwLock<Snapshot>>,
}

impl JobBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current job list in posting order
    pub async fn jobs(&self) -> Arc<Vec<Job>> {
        self.inner.read().await.jobs.clone()
    }

    /// When the list was last loaded, `None` until the first successful load
    pub async fn refreshed_at(&self) -> Option<DateTime<Utc>> {
        self.inner.read().await.refreshed_at
    }

    pub async fn replace(&self, jobs: Vec<Job>) {
        let mut snapshot = self.inner.write().await;
        snapshot.jobs = Arc::new(jobs);
        snapshot.refreshed_at = Some(Utc::now());
    }

    /// Reload from the remote API. On failure the previous list stays.
    pub async fn refresh(&self, backend: &dyn JobBoardApi) -> Result<usize, BackendError> {
        match backend.list_jobs().await {
            Ok(jobs) => {
                let count = jobs.len();
                self.replace(jobs).await;
                info!("Job board refreshed: {} jobs", count);
                Ok(count)
            }
            Err(e) => {
                warn!("Job board refresh failed, keeping previous list: {}", e);
                Err(e)
            }
        }
    }
}
