use serde::{Deserialize, Serialize};

use super::reference::Identified;

/// An applicant, keyed by the identity provider's user id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub image: String,
    /// URL of the stored resume, empty until one is uploaded
    #[serde(default)]
    pub resume: String,
}

impl UserProfile {
    pub fn has_resume(&self) -> bool {
        !self.resume.trim().is_empty()
    }
}

impl Identified for UserProfile {
    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_or_blank_resume_counts_as_none() {
        let user: UserProfile =
            serde_json::from_str(r#"{"_id":"user_1","name":"Asha","email":"a@x.io"}"#).unwrap();
        assert!(!user.has_resume());

        let blank = UserProfile {
            resume: "  ".into(),
            ..user.clone()
        };
        assert!(!blank.has_resume());

        let stored = UserProfile {
            resume: "https://files.example/r.pdf".into(),
            ..user
        };
        assert!(stored.has_resume());
    }
}
