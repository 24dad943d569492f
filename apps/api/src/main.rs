//! Tournament access-control API composition root.

#![forbid(unsafe_code)]

mod api_config;
mod api_router;
mod api_services;
mod dev_seed;
mod dto;
mod error;
mod handlers;
mod middleware;
mod state;

use std::sync::Arc;

use arena_core::AppError;
use arena_infrastructure::{InMemorySessionRepository, InMemoryTeamRepository};
use tracing::info;

use crate::api_config::{ApiConfig, init_tracing};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = ApiConfig::load()?;

    let team_repository = Arc::new(InMemoryTeamRepository::new());
    let session_repository = Arc::new(InMemorySessionRepository::new());
    if config.dev_seed {
        dev_seed::run(&team_repository, &session_repository).await?;
    }

    let app_state =
        api_services::build_app_state(&config, team_repository, session_repository)?;
    let app = api_router::build_router(app_state, config.frontend_url.as_str())?;

    let address = config.socket_address()?;
    let listener = tokio::net::TcpListener::bind(address)
        .await
        .map_err(|error| AppError::Internal(format!("failed to bind listener: {error}")))?;

    info!(%address, "arena-api listening");

    axum::serve(listener, app)
        .await
        .map_err(|error| AppError::Internal(format!("api server error: {error}")))
}
