use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use std::fmt;
use tracing::{error, warn};
use validator::ValidationErrors;

use crate::api::validation::{field_errors, ErrorResponse};
use crate::backend::BackendError;

/// Service-level errors
#[derive(Debug)]
pub enum ServiceError {
    /// The remote job board API failed or refused the call
    Backend(BackendError),

    /// Validation failed
    Validation(String),

    /// Field validation failed outside an extractor (multipart forms)
    InvalidFields(ValidationErrors),

    /// No identity supplied for an action that needs one
    Unauthorized(String),

    /// Refused locally before reaching the remote API
    Conflict(String),

    NotFound(String),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceError::Backend(e) => write!(f, "Backend error: {}", e),
            ServiceError::Validation(msg) => write!(f, "Validation error: {}", msg),
            ServiceError::InvalidFields(errors) => write!(f, "Validation error: {}", errors),
            ServiceError::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            ServiceError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            ServiceError::NotFound(what) => write!(f, "Not found: {}", what),
        }
    }
}

impl std::error::Error for ServiceError {}

impl From<BackendError> for ServiceError {
    fn from(e: BackendError) -> Self {
        ServiceError::Backend(e)
    }
}

impl ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::Backend(BackendError::Rejected(_)) => StatusCode::BAD_REQUEST,
            ServiceError::Backend(_) => StatusCode::BAD_GATEWAY,
            ServiceError::Validation(_) | ServiceError::InvalidFields(_) => {
                StatusCode::BAD_REQUEST
            }
            ServiceError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ServiceError::Conflict(_) => StatusCode::CONFLICT,
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let ServiceError::InvalidFields(errors) = self {
            warn!("Validation error: {}", errors);
            return HttpResponse::build(self.status_code()).json(ErrorResponse {
                error: "Validation failed".to_string(),
                fields: field_errors(errors),
            });
        }

        let (error, message) = match self {
            ServiceError::Backend(BackendError::Rejected(msg)) => {
                warn!("Job board API rejected request: {}", msg);
                ("Request rejected", msg.clone())
            }
            ServiceError::Backend(e) => {
                error!("Job board API error: {}", e);
                ("Upstream unavailable", "Job board API error occurred".to_string())
            }
            ServiceError::Validation(msg) => {
                warn!("Validation error: {}", msg);
                ("Validation failed", msg.clone())
            }
            ServiceError::InvalidFields(errors) => ("Validation failed", errors.to_string()),
            ServiceError::Unauthorized(msg) => {
                warn!("Unauthorized request: {}", msg);
                ("Unauthorized", msg.clone())
            }
            ServiceError::Conflict(msg) => {
                warn!("Request refused: {}", msg);
                ("Request refused", msg.clone())
            }
            ServiceError::NotFound(what) => {
                warn!("Not found: {}", what);
                ("Not found", format!("{} not found", what))
            }
        };

        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: error.to_string(),
            fields: serde_json::json!({ "message": message }),
        })
    }
}
