use std::sync::Arc;

use actix_multipart::form::MultipartFormConfig;
use actix_web::{web, App, HttpServer};
use clap::Parser;
use tracing::{error, info};

mod api;
mod backend;
mod board;
mod cli;
mod config;
mod listing;
mod logging;
mod models;
mod shutdown;
mod worker;

use crate::api::state::AppState;
use crate::backend::{HttpBackend, JobBoardApi};
use crate::cli::{Cli, Command};
use crate::shutdown::ShutdownCoordinator;
use crate::worker::JobRefresher;

fn to_io_error(e: impl std::fmt::Display) -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::Other, e.to_string())
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let cli = Cli::parse();

    // Load configuration from environment
    let config = config::Config::from_env().map_err(to_io_error)?;

    logging::init(&config.log_dir)?;

    let backend: Arc<dyn JobBoardApi> = Arc::new(
        HttpBackend::new(&config.backend_url, config.request_timeout).map_err(to_io_error)?,
    );

    match cli.command.unwrap_or(Command::Serve) {
        Command::Browse(args) => {
            let page = cli::browse(backend.as_ref(), &args)
                .await
                .map_err(to_io_error)?;
            print!("{}", page);
            Ok(())
        }
        Command::Serve => serve(config, backend).await,
    }
}

async fn serve(config: config::Config, backend: Arc<dyn JobBoardApi>) -> std::io::Result<()> {
    info!("Starting {}", config.app_name);
    info!("Configuration loaded successfully:");
    info!("  - Backend URL: {}", config.backend_url);
    info!("  - Max payload size: {} bytes", config.max_payload_size);
    info!("  - Jobs refresh interval: {:?}", config.jobs_refresh_interval);
    info!("  - Request timeout: {:?}", config.request_timeout);

    let state = AppState::new(backend.clone());

    // Initial load; the service still starts when the backend is down and
    // reports not-ready until a refresh succeeds.
    if let Err(e) = state.board.refresh(backend.as_ref()).await {
        error!("Initial job list load failed: {}", e);
    }

    // Create shutdown channel for graceful shutdown
    let (shutdown_tx, shutdown_rx) = tokio::sync::watch::channel(false);

    let refresher = JobRefresher::new(
        backend.clone(),
        state.board.clone(),
        config.jobs_refresh_interval,
    );
    let refresher_handle = tokio::spawn(async move { refresher.run(shutdown_rx).await });

    let max_payload_size = config.max_payload_size;
    let server_state = state.clone();
    let server = HttpServer::new(move || {
        // Configure payload size limits globally
        let payload_config = web::PayloadConfig::default().limit(max_payload_size);
        let multipart_config = MultipartFormConfig::default().total_limit(max_payload_size);
        let state = server_state.clone();

        App::new()
            .app_data(payload_config)
            .app_data(multipart_config)
            .configure(move |cfg| state.configure(cfg))
    });

    info!(
        "Server starting on http://{}:{}",
        config.bind_addr, config.port
    );

    let server = server
        .bind((config.bind_addr.as_str(), config.port))?
        .run();
    let server_handle = server.handle();
    let server_task = tokio::spawn(server);

    let coordinator = ShutdownCoordinator::new(
        server_handle,
        server_task,
        vec![refresher_handle],
        shutdown_tx,
    );

    coordinator.wait_for_shutdown().await
}
