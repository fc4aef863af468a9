use actix_multipart::form::MultipartForm;
use actix_web::{
    get, post,
    web::{scope, Data, ServiceConfig},
    HttpResponse,
};
use actix_web_validator::Json;

use super::models::{ApplyRequest, ResumeForm};
use super::service::UserService;
use crate::api::error::ServiceError;
use crate::api::session::UserToken;
use crate::api::validation::MessageResponse;

#[get("/me")]
async fn profile(
    service: Data<UserService>,
    token: UserToken,
) -> Result<HttpResponse, ServiceError> {
    Ok(HttpResponse::Ok().json(service.profile(&token.0).await?))
}

#[get("/applications")]
async fn applications(
    service: Data<UserService>,
    token: UserToken,
) -> Result<HttpResponse, ServiceError> {
    Ok(HttpResponse::Ok().json(service.applications(&token.0).await?))
}

#[post("/apply")]
async fn apply(
    service: Data<UserService>,
    token: UserToken,
    request: Json<ApplyRequest>,
) -> Result<HttpResponse, ServiceError> {
    let ack = service.apply(&token.0, &request.job_id).await?;
    Ok(HttpResponse::Created().json(MessageResponse {
        message: ack.message,
    }))
}

#[post("/update-resume")]
async fn update_resume(
    service: Data<UserService>,
    token: UserToken,
    MultipartForm(form): MultipartForm<ResumeForm>,
) -> Result<HttpResponse, ServiceError> {
    let ack = service.update_resume(&token.0, form).await?;
    Ok(HttpResponse::Ok().json(MessageResponse {
        message: ack.message,
    }))
}

pub fn users_config(config: &mut ServiceConfig) {
    config.service(
        scope("users")
            .service(profile)
            .service(applications)
            .service(apply)
            .service(update_resume),
    );
}
