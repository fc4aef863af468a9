use actix_multipart::form::MultipartForm;
use actix_web::{
    get, post,
    web::{scope, Data, ServiceConfig},
    HttpResponse,
};
use actix_web_validator::Json;

use super::dto::CompanySessionResponse;
use super::models::{CompanyCredentials, NewJob, RegisterForm, StatusChange, VisibilityChange};
use super::service::CompanyService;
use crate::api::error::ServiceError;
use crate::api::session::CompanyToken;
use crate::api::validation::MessageResponse;

#[post("/login")]
async fn login(
    service: Data<CompanyService>,
    credentials: Json<CompanyCredentials>,
) -> Result<HttpResponse, ServiceError> {
    let session = service.login(&credentials).await?;
    Ok(HttpResponse::Ok().json(CompanySessionResponse {
        company: session.company,
        token: session.token,
    }))
}

#[post("/register")]
async fn register(
    service: Data<CompanyService>,
    MultipartForm(form): MultipartForm<RegisterForm>,
) -> Result<HttpResponse, ServiceError> {
    let session = service.register(form).await?;
    Ok(HttpResponse::Created().json(CompanySessionResponse {
        company: session.company,
        token: session.token,
    }))
}

#[get("/jobs")]
async fn list_jobs(
    service: Data<CompanyService>,
    token: CompanyToken,
) -> Result<HttpResponse, ServiceError> {
    Ok(HttpResponse::Ok().json(service.list_jobs(&token.0).await?))
}

#[post("/jobs")]
async fn post_job(
    service: Data<CompanyService>,
    token: CompanyToken,
    job: Json<NewJob>,
) -> Result<HttpResponse, ServiceError> {
    let ack = service.post_job(&token.0, &job).await?;
    Ok(HttpResponse::Created().json(MessageResponse {
        message: ack.message,
    }))
}

#[post("/jobs/visibility")]
async fn change_visibility(
    service: Data<CompanyService>,
    token: CompanyToken,
    change: Json<VisibilityChange>,
) -> Result<HttpResponse, ServiceError> {
    let ack = service.change_visibility(&token.0, &change.id).await?;
    Ok(HttpResponse::Ok().json(MessageResponse {
        message: ack.message,
    }))
}

#[get("/applicants")]
async fn applicants(
    service: Data<CompanyService>,
    token: CompanyToken,
) -> Result<HttpResponse, ServiceError> {
    Ok(HttpResponse::Ok().json(service.applicants(&token.0).await?))
}

#[post("/applicants/status")]
async fn change_status(
    service: Data<CompanyService>,
    token: CompanyToken,
    change: Json<StatusChange>,
) -> Result<HttpResponse, ServiceError> {
    let ack = service
        .change_status(&token.0, &change.id, change.status)
        .await?;
    Ok(HttpResponse::Ok().json(MessageResponse {
        message: ack.message,
    }))
}

pub fn company_config(config: &mut ServiceConfig) {
    config.service(
        scope("company")
            .service(login)
            .service(register)
            .service(list_jobs)
            .service(post_job)
            .service(change_visibility)
            .service(applicants)
            .service(change_status),
    );
}
