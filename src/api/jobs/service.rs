use std::collections::HashSet;
use std::sync::Arc;

use tracing::{info, warn};

use super::dto::{JobDetailResponse, RefreshResponse};
use crate::api::error::ServiceError;
use crate::backend::JobBoardApi;
use crate::board::JobBoard;
use crate::listing::more_jobs_from_company;
use crate::models::Application;

/// Public job pages and the shared job list
pub struct JobService {
    backend: Arc<dyn JobBoardApi>,
    board: JobBoard,
}

impl JobService {
    pub fn new(backend: Arc<dyn JobBoardApi>, board: JobBoard) -> Self {
        Self { backend, board }
    }

    /// Fetch one job plus the "more from this company" sidebar.
    ///
    /// With a bearer token the user's applications are looked up to flag the
    /// job as already applied and to hide applied jobs from the sidebar. If
    /// that lookup fails the page is still served, just without the flags.
    pub async fn job_detail(
        &self,
        id: &str,
        bearer: Option<&str>,
    ) -> Result<JobDetailResponse, ServiceError> {
        let job = self.backend.get_job(id).await?;

        let applications: Vec<Application> = match bearer {
            Some(bearer) => match self.backend.user_applications(bearer).await {
                Ok(applications) => applications,
                Err(e) => {
                    warn!("Service: Could not load applications for job page: {}", e);
                    Vec::new()
                }
            },
            None => Vec::new(),
        };
        let applied: HashSet<&str> = applications
            .iter()
            .filter_map(Application::job_id)
            .collect();

        let jobs = self.board.jobs().await;
        let more_jobs = more_jobs_from_company(&jobs, &job, &applied)
            .into_iter()
            .cloned()
            .collect();

        Ok(JobDetailResponse {
            already_applied: applied.contains(job.id.as_str()),
            job,
            more_jobs,
        })
    }

    pub async fn refresh(&self) -> Result<RefreshResponse, ServiceError> {
        let count = self.board.refresh(self.backend.as_ref()).await?;
        info!("Service: Manual refresh loaded {} jobs", count);
        Ok(RefreshResponse {
            message: "Job list refreshed".to_string(),
            jobs: count,
        })
    }
}
