use std::sync::Arc;

use actix_web::{get, web, HttpResponse, Responder};
use serde::Serialize;
use tracing::error;

use crate::backend::JobBoardApi;
use crate::board::JobBoard;

/// Health check response
#[derive(Serialize)]
struct HealthResponse {
    status: String,
    backend: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    jobs: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Health check endpoint
///
/// Includes a round trip to the remote job board API.
#[get("/health")]
async fn health_check(backend: web::Data<Arc<dyn JobBoardApi>>) -> impl Responder {
    match backend.list_jobs().await {
        Ok(jobs) => HttpResponse::Ok().json(HealthResponse {
            status: "healthy".to_string(),
            backend: "connected".to_string(),
            jobs: Some(jobs.len()),
            error: None,
        }),
        Err(e) => {
            error!("Health check failed: {}", e);
            HttpResponse::ServiceUnavailable().json(HealthResponse {
                status: "unhealthy".to_string(),
                backend: "disconnected".to_string(),
                jobs: None,
                error: Some(format!("Backend error: {}", e)),
            })
        }
    }
}

/// Readiness check endpoint
///
/// Ready once the job list has been loaded at least once. A later failed
/// refresh keeps serving the last list, so readiness is not withdrawn.
#[get("/ready")]
async fn readiness_check(board: web::Data<JobBoard>) -> impl Responder {
    match board.refreshed_at().await {
        Some(_) => HttpResponse::Ok().json(HealthResponse {
            status: "ready".to_string(),
            backend: "loaded".to_string(),
            jobs: Some(board.jobs().await.len()),
            error: None,
        }),
        None => HttpResponse::ServiceUnavailable().json(HealthResponse {
            status: "not_ready".to_string(),
            backend: "not_loaded".to_string(),
            jobs: None,
            error: Some("Job list not loaded yet".to_string()),
        }),
    }
}

/// Liveness check endpoint
///
/// Simple check that the process is alive. Does not check dependencies.
#[get("/live")]
async fn liveness_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "alive".to_string(),
        backend: "not_checked".to_string(),
        jobs: None,
        error: None,
    })
}

pub fn health_config(config: &mut web::ServiceConfig) {
    config
        .service(health_check)
        .service(readiness_check)
        .service(liveness_check);
}
