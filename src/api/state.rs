use std::sync::Arc;

use actix_web::web::{Data, ServiceConfig};

use super::{
    company::{handlers::company_config, CompanyService},
    health::health_config,
    jobs::{handlers::job_config, JobService},
    listing::handlers::listing_config,
    users::{handlers::users_config, UserService},
    validation,
};
use crate::backend::JobBoardApi;
use crate::board::JobBoard;

/// Handles shared by every worker thread
#[derive(Clone)]
pub struct AppState {
    pub backend: Arc<dyn JobBoardApi>,
    pub board: JobBoard,
}

impl AppState {
    pub fn new(backend: Arc<dyn JobBoardApi>) -> Self {
        Self {
            backend,
            board: JobBoard::new(),
        }
    }

    /// Inject services and mount every route.
    pub fn configure(&self, cfg: &mut ServiceConfig) {
        let backend = self.backend.clone();
        let board = self.board.clone();

        cfg.app_data(Data::new(backend.clone()))
            .app_data(Data::new(board.clone()))
            .app_data(Data::new(JobService::new(backend.clone(), board.clone())))
            .app_data(Data::new(CompanyService::new(backend.clone(), board)))
            .app_data(Data::new(UserService::new(backend)))
            .app_data(validation::json_config())
            .app_data(validation::query_config())
            .configure(health_config)
            .configure(listing_config)
            .configure(job_config)
            .configure(company_config)
            .configure(users_config);
    }
}
