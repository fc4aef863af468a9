use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::warn;

use super::BackendError;

/// Outcome of a remote call that returns nothing but a message
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Acknowledgement {
    #[serde(default)]
    pub message: String,
}

/// Unwrap the remote `{success, message?, ...payload}` envelope.
///
/// `success: false` becomes [`BackendError::Rejected`] carrying the remote
/// message; otherwise the payload fields are decoded into `T`.
pub fn decode<T: DeserializeOwned>(body: Value) -> Result<T, BackendError> {
    let success = body
        .get("success")
        .and_then(Value::as_bool)
        .ok_or_else(|| BackendError::Decode("missing `success` flag".to_string()))?;

    if !success {
        let message = body
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or("Request rejected")
            .to_string();
        return Err(BackendError::Rejected(message));
    }

    serde_json::from_value(body).map_err(|e| BackendError::Decode(e.to_string()))
}

/// Decode a list record by record, dropping the ones that do not parse.
///
/// One bad document on the remote side must not hide every other one.
fn skip_malformed<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let records = Vec::<Value>::deserialize(deserializer)?;
    let total = records.len();
    let parsed: Vec<T> = records
        .into_iter()
        .filter_map(|record| {
            let id = record.get("_id").and_then(Value::as_str).map(str::to_string);
            match serde_json::from_value(record) {
                Ok(item) => Some(item),
                Err(e) => {
                    warn!(
                        "Skipping malformed record {} from job board API: {}",
                        id.as_deref().unwrap_or("<no id>"),
                        e
                    );
                    None
                }
            }
        })
        .collect();

    if parsed.len() < total {
        warn!("Kept {} of {} records", parsed.len(), total);
    }
    Ok(parsed)
}

#[derive(Deserialize)]
pub(crate) struct JobsPayload {
    #[serde(deserialize_with = "skip_malformed")]
    pub jobs: Vec<crate::models::Job>,
}

#[derive(Deserialize)]
pub(crate) struct JobPayload {
    pub job: crate::models::Job,
}

#[derive(Deserialize)]
pub(crate) struct CompanyJobsPayload {
    #[serde(rename = "jobsData", deserialize_with = "skip_malformed")]
    pub jobs: Vec<crate::models::Job>,
}

#[derive(Deserialize)]
pub(crate) struct ApplicationsPayload {
    #[serde(deserialize_with = "skip_malformed")]
    pub applications: Vec<crate::models::Application>,
}

#[derive(Deserialize)]
pub(crate) struct UserPayload {
    pub user: crate::models::UserProfile,
}
