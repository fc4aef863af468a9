use std::sync::Arc;

use futures_util::future::try_join;
use tracing::info;

use super::models::ResumeForm;
use crate::api::error::ServiceError;
use crate::backend::{Acknowledgement, JobBoardApi, Upload};
use crate::models::{Application, UserProfile};

const PDF: &str = "application/pdf";

/// Applicant-side actions
pub struct UserService {
    backend: Arc<dyn JobBoardApi>,
}

impl UserService {
    pub fn new(backend: Arc<dyn JobBoardApi>) -> Self {
        Self { backend }
    }

    pub async fn profile(&self, bearer: &str) -> Result<UserProfile, ServiceError> {
        Ok(self.backend.user_data(bearer).await?)
    }

    pub async fn applications(&self, bearer: &str) -> Result<Vec<Application>, ServiceError> {
        Ok(self.backend.user_applications(bearer).await?)
    }

    /// Apply to `job_id`.
    ///
    /// Refused here when the applicant has no resume on file or already
    /// applied; the remote API still enforces uniqueness on its side.
    pub async fn apply(&self, bearer: &str, job_id: &str) -> Result<Acknowledgement, ServiceError> {
        let (profile, applications) = try_join(
            self.backend.user_data(bearer),
            self.backend.user_applications(bearer),
        )
        .await?;

        if !profile.has_resume() {
            return Err(ServiceError::Conflict("Upload resume to apply".to_string()));
        }
        if applications
            .iter()
            .any(|application| application.job_id() == Some(job_id))
        {
            return Err(ServiceError::Conflict("Already applied".to_string()));
        }

        let ack = self.backend.apply(bearer, job_id).await?;
        info!("Service: User {} applied to job {}", profile.id, job_id);
        Ok(ack)
    }

    pub async fn update_resume(
        &self,
        bearer: &str,
        form: ResumeForm,
    ) -> Result<Acknowledgement, ServiceError> {
        let resume = form.resume;
        let content_type = resume
            .content_type
            .as_ref()
            .map(|mime| mime.essence_str().to_string())
            .unwrap_or_default();
        if content_type != PDF {
            return Err(ServiceError::Validation("Resume must be a PDF".to_string()));
        }
        if resume.data.is_empty() {
            return Err(ServiceError::Validation("Resume file is empty".to_string()));
        }

        let upload = Upload {
            file_name: resume.file_name.unwrap_or_else(|| "resume.pdf".to_string()),
            content_type,
            bytes: resume.data.to_vec(),
        };
        Ok(self.backend.update_resume(bearer, upload).await?)
    }
}
