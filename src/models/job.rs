use chrono::{DateTime, Utc};
use serde::{de, Deserialize, Deserializer, Serialize};

use super::company::Company;
use super::reference::{Identified, Ref};
use super::timestamp;

/// Categories a recruiter can file a job under
pub const JOB_CATEGORIES: [&str; 7] = [
    "Programming",
    "Data Science",
    "Designing",
    "Networking",
    "Management",
    "Marketing",
    "Cybersecurity",
];

/// Locations a recruiter can post a job for
pub const JOB_LOCATIONS: [&str; 7] = [
    "Bangalore",
    "Washington",
    "Hyderabad",
    "Mumbai",
    "California",
    "Chennai",
    "New York",
];

/// Experience levels offered on the post-job form
pub const JOB_LEVELS: [&str; 3] = ["Beginner level", "Intermediate level", "Senior level"];

/// A posted position as returned by the remote API.
///
/// Category and location are kept as plain strings: the enumerations above
/// constrain what this service submits, not what the remote API may hold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    /// Rich-text markup from the editor, passed through untouched
    #[serde(default)]
    pub description: String,
    pub category: String,
    pub location: String,
    #[serde(default)]
    pub level: String,
    #[serde(default, deserialize_with = "whole_salary")]
    pub salary: u64,
    #[serde(with = "timestamp")]
    pub date: DateTime<Utc>,
    #[serde(default = "visible_by_default")]
    pub visible: bool,
    /// Denormalized count, only filled in on the recruiter's job list
    #[serde(default)]
    pub applicants: u32,
    #[serde(rename = "companyId")]
    pub company: Ref<Company>,
}

fn visible_by_default() -> bool {
    true
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawSalary {
    Whole(u64),
    Fraction(f64),
}

/// The post-job form takes any non-negative number; fractions are rounded.
pub(crate) fn whole_salary<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    match RawSalary::deserialize(deserializer)? {
        RawSalary::Whole(salary) => Ok(salary),
        RawSalary::Fraction(salary) if salary.is_finite() && salary >= 0.0 => {
            Ok(salary.round() as u64)
        }
        RawSalary::Fraction(salary) => Err(de::Error::custom(format!(
            "salary must be a non-negative number, got {}",
            salary
        ))),
    }
}

impl Job {
    pub fn company_id(&self) -> &str {
        self.company.id()
    }
}

impl Identified for Job {
    fn id(&self) -> &str {
        &self.id
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_public_listing_shape() {
        let raw = r#"{
            "_id": "65a1",
            "title": "Backend Engineer",
            "description": "<p>Rust</p>",
            "category": "Programming",
            "location": "Bangalore",
            "level": "Senior level",
            "salary": 120000,
            "date": 1700000000000,
            "visible": true,
            "companyId": {"_id": "c1", "name": "Slack", "email": "hr@slack.com", "image": "https://img/slack.png"}
        }"#;

        let job: Job = serde_json::from_str(raw).unwrap();
        assert_eq!(job.id, "65a1");
        assert_eq!(job.company_id(), "c1");
        assert_eq!(job.company.populated().map(|c| c.name.as_str()), Some("Slack"));
        assert_eq!(job.applicants, 0);
    }

    #[test]
    fn parses_recruiter_shape_with_bare_company_id() {
        let raw = r#"{
            "_id": "65a2",
            "title": "Recruiter",
            "category": "Management",
            "location": "Mumbai",
            "date": 1700000000000,
            "visible": false,
            "applicants": 4,
            "companyId": "c9"
        }"#;

        let job: Job = serde_json::from_str(raw).unwrap();
        assert_eq!(job.company_id(), "c9");
        assert!(job.company.populated().is_none());
        assert!(!job.visible);
        assert_eq!(job.applicants, 4);
        assert_eq!(job.salary, 0);
    }

    #[test]
    fn rounds_fractional_salary() {
        let raw = r#"{"_id":"x","title":"t","category":"c","location":"l","salary":60000.5,"date":0,"companyId":"c"}"#;
        assert_eq!(serde_json::from_str::<Job>(raw).unwrap().salary, 60001);
    }

    #[test]
    fn rejects_negative_salary() {
        let raw = r#"{"_id":"x","title":"t","category":"c","location":"l","salary":-5,"date":0,"companyId":"c"}"#;
        assert!(serde_json::from_str::<Job>(raw).is_err());
    }
}
