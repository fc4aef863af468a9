//! In-process stand-in for the remote API, used by service and handler tests.
//!
//! Applicant bearer tokens are user ids; recruiter tokens are `token-<company id>`.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::{
    Acknowledgement, BackendError, CompanyRegistration, CompanySession, JobBoardApi, Upload,
};
use crate::api::company::models::{CompanyCredentials, NewJob};
use crate::models::{
    Application, ApplicationStatus, Company, Job, JobSummary, Ref, UserProfile,
};

#[derive(Default)]
struct Store {
    jobs: Vec<Job>,
    companies: Vec<(Company, String)>,
    users: HashMap<String, UserProfile>,
    applications: Vec<Application>,
    uploads: Vec<Upload>,
    offline: bool,
    seq: i64,
}

impl Store {
    fn next_id(&mut self, prefix: &str) -> String {
        self.seq += 1;
        format!("{}_{}", prefix, self.seq)
    }

    fn company_for(&self, token: &str) -> Result<Company, BackendError> {
        token
            .strip_prefix("token-")
            .and_then(|id| self.companies.iter().find(|(c, _)| c.id == id))
            .map(|(c, _)| c.clone())
            .ok_or_else(|| BackendError::Rejected("Not authorized, Login Again".to_string()))
    }

    fn user_for(&self, bearer: &str) -> Result<UserProfile, BackendError> {
        self.users
            .get(bearer)
            .cloned()
            .ok_or_else(|| BackendError::Rejected("User Not Found".to_string()))
    }
}

#[derive(Default)]
pub struct InMemoryBackend {
    store: Mutex<Store>,
}

impl InMemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_jobs(jobs: Vec<Job>) -> Self {
        let backend = Self::new();
        backend.store.lock().unwrap().jobs = jobs;
        backend
    }

    pub fn set_offline(&self, offline: bool) {
        self.store.lock().unwrap().offline = offline;
    }

    pub fn add_company(&self, company: Company, password: &str) {
        self.store
            .lock()
            .unwrap()
            .companies
            .push((company, password.to_string()));
    }

    pub fn add_user(&self, user: UserProfile) {
        self.store.lock().unwrap().users.insert(user.id.clone(), user);
    }

    pub fn add_application(&self, application: Application) {
        self.store.lock().unwrap().applications.push(application);
    }

    pub fn applications(&self) -> Vec<Application> {
        self.store.lock().unwrap().applications.clone()
    }

    pub fn uploads(&self) -> Vec<Upload> {
        self.store.lock().unwrap().uploads.clone()
    }

    fn guard(&self) -> Result<std::sync::MutexGuard<'_, Store>, BackendError> {
        let store = self.store.lock().unwrap();
        if store.offline {
            return Err(BackendError::Status(503));
        }
        Ok(store)
    }
}

fn ack(message: &str) -> Acknowledgement {
    Acknowledgement {
        message: message.to_string(),
    }
}

fn now() -> DateTime<Utc> {
    Utc::now()
}

#[async_trait]
impl JobBoardApi for InMemoryBackend {
    async fn list_jobs(&self) -> Result<Vec<Job>, BackendError> {
        let store = self.guard()?;
        Ok(store.jobs.iter().filter(|j| j.visible).cloned().collect())
    }

    async fn get_job(&self, id: &str) -> Result<Job, BackendError> {
        let store = self.guard()?;
        store
            .jobs
            .iter()
            .find(|j| j.id == id)
            .cloned()
            .ok_or_else(|| BackendError::Rejected("Job not found".to_string()))
    }

    async fn company_login(
        &self,
        credentials: &CompanyCredentials,
    ) -> Result<CompanySession, BackendError> {
        let store = self.guard()?;
        store
            .companies
            .iter()
            .find(|(c, password)| c.email == credentials.email && *password == credentials.password)
            .map(|(c, _)| CompanySession {
                company: c.clone(),
                token: format!("token-{}", c.id),
            })
            .ok_or_else(|| BackendError::Rejected("Invalid email or password".to_string()))
    }

    async fn company_register(
        &self,
        registration: CompanyRegistration,
    ) -> Result<CompanySession, BackendError> {
        let mut store = self.guard()?;
        if store.companies.iter().any(|(c, _)| c.email == registration.email) {
            return Err(BackendError::Rejected("Company already registered".to_string()));
        }
        let company = Company {
            id: store.next_id("company"),
            name: registration.name,
            email: registration.email,
            image: format!("https://img.example/{}", registration.image.file_name),
        };
        store.uploads.push(registration.image);
        store.companies.push((company.clone(), registration.password));
        Ok(CompanySession {
            token: format!("token-{}", company.id),
            company,
        })
    }

    async fn post_job(&self, token: &str, job: &NewJob) -> Result<Acknowledgement, BackendError> {
        let mut store = self.guard()?;
        let company = store.company_for(token)?;
        let id = store.next_id("posted");
        store.jobs.push(Job {
            id,
            title: job.title.clone(),
            description: job.description.clone(),
            category: job.category.clone(),
            location: job.location.clone(),
            level: job.level.clone(),
            salary: job.salary,
            date: now(),
            visible: true,
            applicants: 0,
            company: Ref::Populated(company),
        });
        Ok(ack("Job Added"))
    }

    async fn company_jobs(&self, token: &str) -> Result<Vec<Job>, BackendError> {
        let store = self.guard()?;
        let company = store.company_for(token)?;
        Ok(store
            .jobs
            .iter()
            .filter(|j| j.company_id() == company.id)
            .map(|j| Job {
                applicants: store
                    .applications
                    .iter()
                    .filter(|a| a.job_id() == Some(j.id.as_str()))
                    .count() as u32,
                company: Ref::Id(company.id.clone()),
                ..j.clone()
            })
            .collect())
    }

    async fn change_visibility(
        &self,
        token: &str,
        job_id: &str,
    ) -> Result<Acknowledgement, BackendError> {
        let mut store = self.guard()?;
        let company = store.company_for(token)?;
        match store
            .jobs
            .iter_mut()
            .find(|j| j.id == job_id && j.company_id() == company.id)
        {
            Some(job) => {
                job.visible = !job.visible;
                Ok(ack("Visibility Changed"))
            }
            None => Err(BackendError::Rejected("Job not found".to_string())),
        }
    }

    async fn company_applicants(&self, token: &str) -> Result<Vec<Application>, BackendError> {
        let store = self.guard()?;
        let company = store.company_for(token)?;
        Ok(store
            .applications
            .iter()
            .filter(|a| a.company.as_ref().map(|c| c.id()) == Some(company.id.as_str()))
            .cloned()
            .collect())
    }

    async fn change_status(
        &self,
        token: &str,
        application_id: &str,
        status: ApplicationStatus,
    ) -> Result<Acknowledgement, BackendError> {
        let mut store = self.guard()?;
        store.company_for(token)?;
        match store.applications.iter_mut().find(|a| a.id == application_id) {
            Some(application) => {
                application.status = status;
                Ok(ack("Status Changed"))
            }
            None => Err(BackendError::Rejected("Application not found".to_string())),
        }
    }

    async fn user_data(&self, bearer: &str) -> Result<UserProfile, BackendError> {
        self.guard()?.user_for(bearer)
    }

    async fn user_applications(&self, bearer: &str) -> Result<Vec<Application>, BackendError> {
        let store = self.guard()?;
        store.user_for(bearer)?;
        Ok(store
            .applications
            .iter()
            .filter(|a| a.user.as_ref().map(|u| u.id()) == Some(bearer))
            .cloned()
            .collect())
    }

    async fn apply(&self, bearer: &str, job_id: &str) -> Result<Acknowledgement, BackendError> {
        let mut store = self.guard()?;
        let user = store.user_for(bearer)?;
        if store
            .applications
            .iter()
            .any(|a| a.job_id() == Some(job_id) && a.user.as_ref().map(|u| u.id()) == Some(bearer))
        {
            return Err(BackendError::Rejected("Already Applied".to_string()));
        }
        let job = store
            .jobs
            .iter()
            .find(|j| j.id == job_id)
            .cloned()
            .ok_or_else(|| BackendError::Rejected("Job Not Found".to_string()))?;
        let id = store.next_id("application");
        store.applications.push(Application {
            id,
            user: Some(Ref::Populated(user)),
            job: Some(Ref::Populated(JobSummary {
                id: job.id.clone(),
                title: job.title.clone(),
                location: job.location.clone(),
                category: job.category.clone(),
                level: job.level.clone(),
                salary: job.salary,
            })),
            company: Some(Ref::Id(job.company_id().to_string())),
            status: ApplicationStatus::Pending,
            date: now(),
        });
        Ok(ack("Applied Successfully"))
    }

    async fn update_resume(
        &self,
        bearer: &str,
        resume: Upload,
    ) -> Result<Acknowledgement, BackendError> {
        let mut store = self.guard()?;
        let mut user = store.user_for(bearer)?;
        user.resume = format!("https://files.example/{}", resume.file_name);
        store.users.insert(user.id.clone(), user);
        store.uploads.push(resume);
        Ok(ack("Resume Updated"))
    }
}
