use std::time::Duration;

use async_trait::async_trait;
use reqwest::{
    header::{HeaderValue, ACCEPT},
    multipart::{Form, Part},
    Client, RequestBuilder, Url,
};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use tracing::{debug, warn};

use super::envelope::{
    decode, Acknowledgement, ApplicationsPayload, CompanyJobsPayload, JobPayload, JobsPayload,
    UserPayload,
};
use super::{BackendError, CompanyRegistration, CompanySession, JobBoardApi, Upload};
use crate::api::company::models::{CompanyCredentials, NewJob};
use crate::models::{Application, ApplicationStatus, Job, UserProfile};

/// Header the remote API reads the recruiter token from
pub const COMPANY_TOKEN_HEADER: &str = "token";

/// reqwest-backed client for the remote job-board API.
///
/// Every call is sent once; there is no retry.
#[derive(Clone)]
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, BackendError> {
        let client = Client::builder()
            .user_agent(concat!("job-board/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api{}", self.base_url, path)
    }

    /// URL of a single job. The id always lands in exactly one
    /// percent-encoded path segment under `/api/jobs`.
    fn job_url(&self, id: &str) -> Result<Url, BackendError> {
        if matches!(id, "" | "." | "..") {
            return Err(BackendError::Rejected("Job not found".to_string()));
        }

        let mut url =
            Url::parse(&self.url("/jobs")).map_err(|e| BackendError::InvalidUrl(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| BackendError::InvalidUrl(self.base_url.clone()))?
            .push(id);
        Ok(url)
    }

    fn get(&self, path: &str) -> RequestBuilder {
        self.get_url(self.url(path))
    }

    fn get_url(&self, url: impl reqwest::IntoUrl) -> RequestBuilder {
        self.client
            .get(url)
            .header(ACCEPT, HeaderValue::from_static("application/json"))
    }

    fn post(&self, path: &str) -> RequestBuilder {
        self.client
            .post(self.url(path))
            .header(ACCEPT, HeaderValue::from_static("application/json"))
    }

    /// Send `request` and unwrap the response envelope into `T`.
    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, BackendError> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        match serde_json::from_slice::<Value>(&body) {
            Ok(value) => decode(value),
            Err(e) if status.is_success() => {
                warn!("Undecodable body from job board API (status {}): {}", status, e);
                Err(BackendError::Decode(e.to_string()))
            }
            Err(_) => Err(BackendError::Status(status.as_u16())),
        }
    }
}

fn file_part(upload: Upload) -> Result<Part, BackendError> {
    Ok(Part::bytes(upload.bytes)
        .file_name(upload.file_name)
        .mime_str(&upload.content_type)?)
}

#[async_trait]
impl JobBoardApi for HttpBackend {
    async fn list_jobs(&self) -> Result<Vec<Job>, BackendError> {
        let payload: JobsPayload = self.send(self.get("/jobs")).await?;
        debug!("Fetched {} jobs", payload.jobs.len());
        Ok(payload.jobs)
    }

    async fn get_job(&self, id: &str) -> Result<Job, BackendError> {
        let payload: JobPayload = self.send(self.get_url(self.job_url(id)?)).await?;
        Ok(payload.job)
    }

    async fn company_login(
        &self,
        credentials: &CompanyCredentials,
    ) -> Result<CompanySession, BackendError> {
        self.send(self.post("/company/login").json(credentials)).await
    }

    async fn company_register(
        &self,
        registration: CompanyRegistration,
    ) -> Result<CompanySession, BackendError> {
        let form = Form::new()
            .text("name", registration.name)
            .text("email", registration.email)
            .text("password", registration.password)
            .part("image", file_part(registration.image)?);

        self.send(self.post("/company/register").multipart(form)).await
    }

    async fn post_job(&self, token: &str, job: &NewJob) -> Result<Acknowledgement, BackendError> {
        let request = self
            .post("/company/post-job")
            .header(COMPANY_TOKEN_HEADER, token)
            .json(job);
        self.send(request).await
    }

    async fn company_jobs(&self, token: &str) -> Result<Vec<Job>, BackendError> {
        let request = self
            .get("/company/list-jobs")
            .header(COMPANY_TOKEN_HEADER, token);
        let payload: CompanyJobsPayload = self.send(request).await?;
        Ok(payload.jobs)
    }

    async fn change_visibility(
        &self,
        token: &str,
        job_id: &str,
    ) -> Result<Acknowledgement, BackendError> {
        // the remote route really is spelled this way
        let request = self
            .post("/company/change-visiblity")
            .header(COMPANY_TOKEN_HEADER, token)
            .json(&json!({ "id": job_id }));
        self.send(request).await
    }

    async fn company_applicants(&self, token: &str) -> Result<Vec<Application>, BackendError> {
        let request = self
            .get("/company/applicants")
            .header(COMPANY_TOKEN_HEADER, token);
        let payload: ApplicationsPayload = self.send(request).await?;
        Ok(payload.applications)
    }

    async fn change_status(
        &self,
        token: &str,
        application_id: &str,
        status: ApplicationStatus,
    ) -> Result<Acknowledgement, BackendError> {
        let request = self
            .post("/company/change-status")
            .header(COMPANY_TOKEN_HEADER, token)
            .json(&json!({ "id": application_id, "status": status }));
        self.send(request).await
    }

    async fn user_data(&self, bearer: &str) -> Result<UserProfile, BackendError> {
        let payload: UserPayload = self.send(self.get("/users/user").bearer_auth(bearer)).await?;
        Ok(payload.user)
    }

    async fn user_applications(&self, bearer: &str) -> Result<Vec<Application>, BackendError> {
        let request = self.get("/users/applications").bearer_auth(bearer);
        let payload: ApplicationsPayload = self.send(request).await?;
        Ok(payload.applications)
    }

    async fn apply(&self, bearer: &str, job_id: &str) -> Result<Acknowledgement, BackendError> {
        let request = self
            .post("/users/apply")
            .bearer_auth(bearer)
            .json(&json!({ "jobId": job_id }));
        self.send(request).await
    }

    async fn update_resume(
        &self,
        bearer: &str,
        resume: Upload,
    ) -> Result<Acknowledgement, BackendError> {
        let form = Form::new().part("resume", file_part(resume)?);
        let request = self
            .post("/users/update-resume")
            .bearer_auth(bearer)
            .multipart(form);
        self.send(request).await
    }
}
