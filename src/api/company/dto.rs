use serde::Serialize;

use crate::models::{Company, Job};

/// Returned on login and registration
#[derive(Serialize)]
pub struct CompanySessionResponse {
    pub company: Company,
    pub token: String,
}

/// Summary cards on the manage-jobs dashboard
#[derive(Debug, Serialize, PartialEq)]
pub struct JobStats {
    pub total_jobs: usize,
    pub active_listings: usize,
    pub total_applicants: u64,
}

impl JobStats {
    pub fn from_jobs(jobs: &[Job]) -> Self {
        Self {
            total_jobs: jobs.len(),
            active_listings: jobs.iter().filter(|job| job.visible).count(),
            total_applicants: jobs.iter().map(|job| u64::from(job.applicants)).sum(),
        }
    }
}

/// The recruiter's own jobs, newest first
#[derive(Serialize)]
pub struct ManageJobsResponse {
    pub stats: JobStats,
    pub jobs: Vec<Job>,
}
