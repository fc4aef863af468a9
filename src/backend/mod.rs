//! Port to the remote job-board API that owns jobs, companies, users and
//! applications. This service keeps none of that data itself.

pub mod envelope;
pub mod http;
#[cfg(test)]
pub mod memory;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::api::company::models::{CompanyCredentials, NewJob};
use crate::models::{Application, ApplicationStatus, Company, Job, UserProfile};

pub use envelope::Acknowledgement;
pub use http::HttpBackend;

#[derive(Debug, Error)]
pub enum BackendError {
    /// The remote API answered `success: false`
    #[error("{0}")]
    Rejected(String),

    #[error("job board API unreachable: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("job board API returned status {0}")]
    Status(u16),

    #[error("unexpected job board API response: {0}")]
    Decode(String),

    #[error("invalid job board API URL: {0}")]
    InvalidUrl(String),
}

/// A file forwarded to the remote API as multipart form data
#[derive(Debug, Clone)]
pub struct Upload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Sign-up data for a new recruiting company
#[derive(Debug, Clone)]
pub struct CompanyRegistration {
    pub name: String,
    pub email: String,
    pub password: String,
    pub image: Upload,
}

/// A recruiter session handed out on login or registration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanySession {
    pub company: Company,
    pub token: String,
}

/// Every remote call this service makes.
///
/// `bearer` is the applicant's identity-provider token and `token` the
/// recruiter token; both are passed through as opaque strings.
#[async_trait]
pub trait JobBoardApi: Send + Sync {
    /// Public, visible jobs in posting order
    async fn list_jobs(&self) -> Result<Vec<Job>, BackendError>;

    async fn get_job(&self, id: &str) -> Result<Job, BackendError>;

    async fn company_login(
        &self,
        credentials: &CompanyCredentials,
    ) -> Result<CompanySession, BackendError>;

    async fn company_register(
        &self,
        registration: CompanyRegistration,
    ) -> Result<CompanySession, BackendError>;

    async fn post_job(&self, token: &str, job: &NewJob) -> Result<Acknowledgement, BackendError>;

    /// Every job the company posted, including hidden ones, in posting order
    async fn company_jobs(&self, token: &str) -> Result<Vec<Job>, BackendError>;

    async fn change_visibility(
        &self,
        token: &str,
        job_id: &str,
    ) -> Result<Acknowledgement, BackendError>;

    async fn company_applicants(&self, token: &str) -> Result<Vec<Application>, BackendError>;

    async fn change_status(
        &self,
        token: &str,
        application_id: &str,
        status: ApplicationStatus,
    ) -> Result<Acknowledgement, BackendError>;

    async fn user_data(&self, bearer: &str) -> Result<UserProfile, BackendError>;

    async fn user_applications(&self, bearer: &str) -> Result<Vec<Application>, BackendError>;

    async fn apply(&self, bearer: &str, job_id: &str) -> Result<Acknowledgement, BackendError>;

    async fn update_resume(
        &self,
        bearer: &str,
        resume: Upload,
    ) -> Result<Acknowledgement, BackendError>;
}
