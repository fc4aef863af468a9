use actix_multipart::form::{bytes::Bytes, text::Text, MultipartForm};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::models::{ApplicationStatus, JOB_CATEGORIES, JOB_LEVELS, JOB_LOCATIONS};

fn one_of(value: &str, allowed: &[&str], code: &'static str) -> Result<(), ValidationError> {
    if allowed.contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::new(code))
    }
}

fn validate_category(category: &str) -> Result<(), ValidationError> {
    one_of(category, &JOB_CATEGORIES, "category")
}

fn validate_location(location: &str) -> Result<(), ValidationError> {
    one_of(location, &JOB_LOCATIONS, "location")
}

fn validate_level(level: &str) -> Result<(), ValidationError> {
    one_of(level, &JOB_LEVELS, "level")
}

/// Recruiter login form
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct CompanyCredentials {
    #[validate(email(message = "Enter a valid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// A job as submitted from the post-job form
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct NewJob {
    #[validate(length(
        min = 1,
        max = 120,
        message = "Title must be between 1 and 120 characters"
    ))]
    pub title: String,
    /// Editor markup, forwarded as-is
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    #[validate(custom(function = "validate_category", message = "Unknown job category"))]
    pub category: String,
    #[validate(custom(function = "validate_location", message = "Unknown job location"))]
    pub location: String,
    #[validate(custom(function = "validate_level", message = "Unknown experience level"))]
    pub level: String,
    pub salary: u64,
}

#[derive(Debug, Deserialize, Validate)]
pub struct VisibilityChange {
    #[validate(length(min = 1, message = "Job id is required"))]
    pub id: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct StatusChange {
    #[validate(length(min = 1, message = "Application id is required"))]
    pub id: String,
    pub status: ApplicationStatus,
}

/// Multipart sign-up form; the logo travels as `image`
#[derive(MultipartForm)]
pub struct RegisterForm {
    pub name: Text<String>,
    pub email: Text<String>,
    pub password: Text<String>,
    #[multipart(limit = "2MB")]
    pub image: Bytes,
}

/// Text half of the sign-up form, validated before anything is forwarded
#[derive(Debug, Validate)]
pub struct Registration {
    #[validate(length(min = 1, max = 100, message = "Company name is required"))]
    pub name: String,
    #[validate(email(message = "Enter a valid email address"))]
    pub email: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
}
