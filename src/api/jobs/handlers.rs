use actix_web::{
    get, post,
    web::{scope, Data, Path, ServiceConfig},
    HttpResponse,
};

use super::service::JobService;
use crate::api::error::ServiceError;
use crate::api::session::UserToken;

#[get("/{id}")]
async fn job_detail(
    service: Data<JobService>,
    path: Path<String>,
    token: Option<UserToken>,
) -> Result<HttpResponse, ServiceError> {
    let id = path.into_inner();
    let bearer = token.as_ref().map(|t| t.0.as_str());
    Ok(HttpResponse::Ok().json(service.job_detail(&id, bearer).await?))
}

#[post("/refresh")]
async fn refresh(service: Data<JobService>) -> Result<HttpResponse, ServiceError> {
    Ok(HttpResponse::Ok().json(service.refresh().await?))
}

pub fn job_config(config: &mut ServiceConfig) {
    config.service(scope("jobs").service(refresh).service(job_detail));
}
