use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::company::Company;
use super::reference::{Identified, Ref};
use super::timestamp;
use super::user::UserProfile;

/// Application status as stored by the remote API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApplicationStatus {
    Pending,
    Accepted,
    Rejected,
}

impl ApplicationStatus {
    /// Accepted and Rejected are final; only a pending application can move.
    pub fn can_transition_to(self, next: ApplicationStatus) -> bool {
        matches!(
            (self, next),
            (ApplicationStatus::Pending, ApplicationStatus::Accepted)
                | (ApplicationStatus::Pending, ApplicationStatus::Rejected)
        )
    }

    pub fn is_terminal(self) -> bool {
        !matches!(self, ApplicationStatus::Pending)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "Pending",
            ApplicationStatus::Accepted => "Accepted",
            ApplicationStatus::Rejected => "Rejected",
        }
    }
}

/// The subset of a job the remote API populates inside an application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobSummary {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub level: String,
    #[serde(default, deserialize_with = "super::job::whole_salary")]
    pub salary: u64,
}

impl Identified for JobSummary {
    fn id(&self) -> &str {
        &self.id
    }
}

/// A user's application to one job.
///
/// Job and user can come back as null when the referenced document was
/// removed on the remote side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Application {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "userId", default)]
    pub user: Option<Ref<UserProfile>>,
    #[serde(rename = "jobId", default)]
    pub job: Option<Ref<JobSummary>>,
    #[serde(rename = "companyId", default)]
    pub company: Option<Ref<Company>>,
    pub status: ApplicationStatus,
    #[serde(with = "timestamp")]
    pub date: DateTime<Utc>,
}

impl Application {
    pub fn job_id(&self) -> Option<&str> {
        self.job.as_ref().map(|job| job.id())
    }

    /// Both sides of the link are still present
    pub fn is_complete(&self) -> bool {
        self.job.is_some() && self.user.is_some()
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use ApplicationStatus::*;

    #[rstest]
    #[case::accept(Pending, Accepted, true)]
    #[case::reject(Pending, Rejected, true)]
    #[case::stay_pending(Pending, Pending, false)]
    #[case::reopen(Accepted, Pending, false)]
    #[case::flip_accepted(Accepted, Rejected, false)]
    #[case::flip_rejected(Rejected, Accepted, false)]
    fn status_transitions(
        #[case] from: ApplicationStatus,
        #[case] to: ApplicationStatus,
        #[case] allowed: bool,
    ) {
        assert_eq!(from.can_transition_to(to), allowed);
    }

    #[test]
    fn parses_applicant_listing_entry() {
        let raw = r#"{
            "_id": "app1",
            "userId": {"_id": "user_1", "name": "Asha", "email": "a@x.io", "image": "", "resume": "https://r/a.pdf"},
            "jobId": {"_id": "job_1", "title": "Backend Engineer", "location": "Bangalore"},
            "companyId": "c1",
            "status": "Pending",
            "date": 1700000000000
        }"#;

        let application: Application = serde_json::from_str(raw).unwrap();
        assert_eq!(application.job_id(), Some("job_1"));
        assert!(application.is_complete());
        assert_eq!(application.status, Pending);
        assert!(!application.status.is_terminal());
    }

    #[test]
    fn null_job_reference_is_incomplete() {
        let raw = r#"{"_id":"app2","userId":"user_1","jobId":null,"status":"Rejected","date":1700000000000}"#;

        let application: Application = serde_json::from_str(raw).unwrap();
        assert_eq!(application.job_id(), None);
        assert!(!application.is_complete());
        assert!(application.status.is_terminal());
    }
}
