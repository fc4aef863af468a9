use serde::Serialize;

use crate::models::Job;

/// A single job page with the company sidebar
#[derive(Debug, Serialize)]
pub struct JobDetailResponse {
    pub job: Job,
    /// Disables the apply button
    pub already_applied: bool,
    pub more_jobs: Vec<Job>,
}

#[derive(Debug, Serialize)]
pub struct RefreshResponse {
    pub message: String,
    pub jobs: usize,
}
