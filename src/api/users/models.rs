use actix_multipart::form::{bytes::Bytes, MultipartForm};
use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct ApplyRequest {
    #[serde(alias = "jobId")]
    #[validate(length(min = 1, message = "Job id is required"))]
    pub job_id: String,
}

/// Resume upload; only PDFs are forwarded
#[derive(MultipartForm)]
pub struct ResumeForm {
    #[multipart(limit = "5MB")]
    pub resume: Bytes,
}
