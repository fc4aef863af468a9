//! Identity handed in by the caller. Tokens are opaque here; the remote API
//! decides whether they are valid.

use std::future::{ready, Ready};

use actix_web::{dev::Payload, http::header, FromRequest, HttpRequest};

use super::error::ServiceError;
pub use crate::backend::http::COMPANY_TOKEN_HEADER;

/// Applicant bearer token from the identity provider
#[derive(Debug, Clone)]
pub struct UserToken(pub String);

/// Recruiter token issued by the remote API at login
#[derive(Debug, Clone)]
pub struct CompanyToken(pub String);

fn header_value<'a>(req: &'a HttpRequest, name: &str) -> Option<&'a str> {
    req.headers()
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

impl FromRequest for UserToken {
    type Error = ServiceError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let token = header_value(req, header::AUTHORIZATION.as_str())
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(str::trim)
            .filter(|token| !token.is_empty());

        ready(match token {
            Some(token) => Ok(UserToken(token.to_string())),
            None => Err(ServiceError::Unauthorized("Login to continue".to_string())),
        })
    }
}

impl FromRequest for CompanyToken {
    type Error = ServiceError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(match header_value(req, COMPANY_TOKEN_HEADER) {
            Some(token) => Ok(CompanyToken(token.to_string())),
            None => Err(ServiceError::Unauthorized(
                "Not authorized, login again".to_string(),
            )),
        })
    }
}
