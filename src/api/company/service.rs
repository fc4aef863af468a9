use std::sync::Arc;

use tracing::{info, warn};
use validator::Validate;

use super::dto::{JobStats, ManageJobsResponse};
use super::models::{CompanyCredentials, NewJob, Registration, RegisterForm};
use crate::api::error::ServiceError;
use crate::backend::{Acknowledgement, CompanyRegistration, CompanySession, JobBoardApi, Upload};
use crate::board::JobBoard;
use crate::models::{Application, ApplicationStatus};

/// Recruiter dashboard: sign-in, posting, visibility and applicant review
pub struct CompanyService {
    backend: Arc<dyn JobBoardApi>,
    board: JobBoard,
}

impl CompanyService {
    pub fn new(backend: Arc<dyn JobBoardApi>, board: JobBoard) -> Self {
        Self { backend, board }
    }

    pub async fn login(&self, credentials: &CompanyCredentials) -> Result<CompanySession, ServiceError> {
        let session = self.backend.company_login(credentials).await?;
        info!("Service: Company {} logged in", session.company.id);
        Ok(session)
    }

    /// Validate the sign-up form, then forward it with the logo.
    pub async fn register(&self, form: RegisterForm) -> Result<CompanySession, ServiceError> {
        let registration = Registration {
            name: form.name.into_inner(),
            email: form.email.into_inner(),
            password: form.password.into_inner(),
        };
        registration
            .validate()
            .map_err(ServiceError::InvalidFields)?;

        let image = form.image;
        let content_type = image
            .content_type
            .as_ref()
            .map(|mime| mime.essence_str().to_string())
            .unwrap_or_default();
        if !content_type.starts_with("image/") {
            return Err(ServiceError::Validation(
                "Company logo must be an image".to_string(),
            ));
        }
        if image.data.is_empty() {
            return Err(ServiceError::Validation("Company logo is empty".to_string()));
        }

        let session = self
            .backend
            .company_register(CompanyRegistration {
                name: registration.name,
                email: registration.email,
                password: registration.password,
                image: Upload {
                    file_name: image.file_name.unwrap_or_else(|| "logo".to_string()),
                    content_type,
                    bytes: image.data.to_vec(),
                },
            })
            .await?;

        info!("Service: Company {} registered", session.company.id);
        Ok(session)
    }

    /// Jobs the company posted, newest first, with dashboard totals.
    pub async fn list_jobs(&self, token: &str) -> Result<ManageJobsResponse, ServiceError> {
        let mut jobs = self.backend.company_jobs(token).await?;
        jobs.reverse();
        Ok(ManageJobsResponse {
            stats: JobStats::from_jobs(&jobs),
            jobs,
        })
    }

    pub async fn post_job(&self, token: &str, job: &NewJob) -> Result<Acknowledgement, ServiceError> {
        info!("Service: Posting job title={}", job.title);
        let ack = self.backend.post_job(token, job).await?;
        self.refresh_board().await;
        Ok(ack)
    }

    pub async fn change_visibility(
        &self,
        token: &str,
        job_id: &str,
    ) -> Result<Acknowledgement, ServiceError> {
        let ack = self.backend.change_visibility(token, job_id).await?;
        self.refresh_board().await;
        Ok(ack)
    }

    /// Applicants for the company's jobs, newest first.
    ///
    /// Entries whose job or applicant no longer exists are dropped.
    pub async fn applicants(&self, token: &str) -> Result<Vec<Application>, ServiceError> {
        let applications = self.backend.company_applicants(token).await?;
        let total = applications.len();
        let mut complete: Vec<Application> = applications
            .into_iter()
            .filter(Application::is_complete)
            .collect();
        if complete.len() < total {
            warn!(
                "Service: Dropped {} applications with a missing job or applicant",
                total - complete.len()
            );
        }
        complete.reverse();
        Ok(complete)
    }

    /// Accept or reject an application that is still pending.
    pub async fn change_status(
        &self,
        token: &str,
        application_id: &str,
        status: ApplicationStatus,
    ) -> Result<Acknowledgement, ServiceError> {
        let applications = self.backend.company_applicants(token).await?;
        let current = applications
            .iter()
            .find(|application| application.id == application_id)
            .ok_or_else(|| ServiceError::NotFound(format!("Application {}", application_id)))?;

        if !current.status.can_transition_to(status) {
            return Err(ServiceError::Conflict(format!(
                "Application is {} and cannot become {}",
                current.status.as_str(),
                status.as_str()
            )));
        }

        let ack = self
            .backend
            .change_status(token, application_id, status)
            .await?;
        info!(
            "Service: Application {} is now {}",
            application_id,
            status.as_str()
        );
        Ok(ack)
    }

    /// Public listing must reflect posting and visibility changes; a failed
    /// reload is logged by the board and the change itself still stands.
    async fn refresh_board(&self) {
        let _ = self.board.refresh(self.backend.as_ref()).await;
    }
}

#[cfg(test)]
mod tests {
    use actix_multipart::form::{bytes::Bytes, text::Text};
    use actix_web::mime::{self, Mime};
    use chrono::Utc;

    use super::*;
    use crate::backend::memory::InMemoryBackend;
    use crate::models::job::fixtures::{company, job};
    use crate::models::{JobSummary, Ref, UserProfile};

    fn setup() -> (Arc<InMemoryBackend>, CompanyService, JobBoard) {
        let backend = Arc::new(InMemoryBackend::with_jobs(vec![
            job(1, "Backend Engineer", "Programming", "Mumbai", "c1"),
            job(2, "Designer", "Designing", "Chennai", "c2"),
        ]));
        backend.add_company(company("c1"), "secret");
        let board = JobBoard::new();
        let service = CompanyService::new(backend.clone(), board.clone());
        (backend, service, board)
    }

    fn application(id: &str, job_id: Option<&str>, status: ApplicationStatus) -> Application {
        Application {
            id: id.to_string(),
            user: Some(Ref::Populated(UserProfile {
                id: "user_1".into(),
                name: "Asha".into(),
                email: "asha@example.com".into(),
                image: String::new(),
                resume: "https://files.example/a.pdf".into(),
            })),
            job: job_id.map(|id| {
                Ref::Populated(JobSummary {
                    id: id.to_string(),
                    title: "Backend Engineer".into(),
                    location: "Mumbai".into(),
                    category: "Programming".into(),
                    level: String::new(),
                    salary: 0,
                })
            }),
            company: Some(Ref::Id("c1".into())),
            status,
            date: Utc::now(),
        }
    }

    fn new_job(title: &str) -> NewJob {
        NewJob {
            title: title.into(),
            description: "<p>x</p>".into(),
            category: "Programming".into(),
            location: "Bangalore".into(),
            level: "Senior level".into(),
            salary: 90_000,
        }
    }

    fn register_form(email: &str, password: &str, logo: Mime, data: &'static [u8]) -> RegisterForm {
        RegisterForm {
            name: Text("Acme".to_string()),
            email: Text(email.to_string()),
            password: Text(password.to_string()),
            image: Bytes {
                data: actix_web::web::Bytes::from_static(data),
                content_type: Some(logo),
                file_name: Some("acme.png".to_string()),
            },
        }
    }

    #[tokio::test]
    async fn register_forwards_logo_and_signs_in() {
        let (backend, service, _) = setup();
        let session = service
            .register(register_form("hr@acme.example", "hunter22", mime::IMAGE_PNG, b"png"))
            .await
            .unwrap();

        assert_eq!(session.company.name, "Acme");
        assert_eq!(session.token, format!("token-{}", session.company.id));
        let uploads = backend.uploads();
        assert_eq!(uploads.len(), 1);
        assert_eq!(uploads[0].file_name, "acme.png");
        assert_eq!(uploads[0].content_type, "image/png");
    }

    #[tokio::test]
    async fn register_reports_each_bad_field() {
        let (backend, service, _) = setup();
        let err = service
            .register(register_form("not-an-email", "123", mime::IMAGE_PNG, b"png"))
            .await
            .unwrap_err();

        let errors = match err {
            ServiceError::InvalidFields(errors) => errors,
            other => panic!("expected field errors, got {}", other),
        };
        let fields = errors.field_errors();
        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("password"));
        assert!(!fields.contains_key("name"));
        assert!(backend.uploads().is_empty());
    }

    #[tokio::test]
    async fn register_needs_an_image_logo() {
        let (backend, service, _) = setup();
        let err = service
            .register(register_form("hr@acme.example", "hunter22", mime::APPLICATION_PDF, b"%PDF"))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Validation error: Company logo must be an image");
        assert!(backend.uploads().is_empty());
    }

    #[tokio::test]
    async fn register_refuses_empty_logo() {
        let (backend, service, _) = setup();
        let err = service
            .register(register_form("hr@acme.example", "hunter22", mime::IMAGE_PNG, b""))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Validation error: Company logo is empty");
        assert!(backend.uploads().is_empty());
    }

    #[tokio::test]
    async fn login_returns_token() {
        let (_, service, _) = setup();
        let session = service
            .login(&CompanyCredentials {
                email: "hr@c1.example".into(),
                password: "secret".into(),
            })
            .await
            .unwrap();
        assert_eq!(session.token, "token-c1");
    }

    #[tokio::test]
    async fn wrong_password_surfaces_remote_message() {
        let (_, service, _) = setup();
        let err = service
            .login(&CompanyCredentials {
                email: "hr@c1.example".into(),
                password: "nope".into(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Backend error: Invalid email or password");
    }

    #[tokio::test]
    async fn posting_refreshes_public_board() {
        let (_, service, board) = setup();
        service.post_job("token-c1", &new_job("Platform Engineer")).await.unwrap();

        let jobs = board.jobs().await;
        assert_eq!(jobs.len(), 3);
        assert_eq!(jobs.last().unwrap().title, "Platform Engineer");
    }

    #[tokio::test]
    async fn lists_own_jobs_newest_first_with_stats() {
        let (backend, service, _) = setup();
        service.post_job("token-c1", &new_job("Second")).await.unwrap();
        service.change_visibility("token-c1", "job_1").await.unwrap();
        backend.add_application(application("a1", Some("job_1"), ApplicationStatus::Pending));

        let response = service.list_jobs("token-c1").await.unwrap();
        let titles: Vec<&str> = response.jobs.iter().map(|j| j.title.as_str()).collect();
        assert_eq!(titles, vec!["Second", "Backend Engineer"]);
        assert_eq!(
            response.stats,
            JobStats {
                total_jobs: 2,
                active_listings: 1,
                total_applicants: 1,
            }
        );
    }

    #[tokio::test]
    async fn hiding_a_job_removes_it_from_the_board() {
        let (_, service, board) = setup();
        service.change_visibility("token-c1", "job_1").await.unwrap();
        let ids: Vec<String> = board.jobs().await.iter().map(|j| j.id.clone()).collect();
        assert_eq!(ids, vec!["job_2"]);
    }

    #[tokio::test]
    async fn applicants_drop_dangling_entries() {
        let (backend, service, _) = setup();
        backend.add_application(application("a1", Some("job_1"), ApplicationStatus::Pending));
        backend.add_application(application("a2", None, ApplicationStatus::Pending));
        backend.add_application(application("a3", Some("job_1"), ApplicationStatus::Accepted));

        let applicants = service.applicants("token-c1").await.unwrap();
        let ids: Vec<&str> = applicants.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["a3", "a1"]);
    }

    #[tokio::test]
    async fn status_change_only_from_pending() {
        let (backend, service, _) = setup();
        backend.add_application(application("a1", Some("job_1"), ApplicationStatus::Pending));

        service
            .change_status("token-c1", "a1", ApplicationStatus::Accepted)
            .await
            .unwrap();
        assert_eq!(backend.applications()[0].status, ApplicationStatus::Accepted);

        let err = service
            .change_status("token-c1", "a1", ApplicationStatus::Rejected)
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)));
        assert_eq!(backend.applications()[0].status, ApplicationStatus::Accepted);
    }

    #[tokio::test]
    async fn status_change_for_unknown_application() {
        let (_, service, _) = setup();
        let err = service
            .change_status("token-c1", "missing", ApplicationStatus::Accepted)
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }
}
