use arena_core::AppError;
use axum::Router;
use axum::middleware::from_fn_with_state;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

use crate::state::AppState;
use crate::{handlers, middleware};

mod cors;


/// Builds the HTTP surface. Every request, including unmatched ones, passes the route guard.
pub fn build_router(app_state: AppState, frontend_url: &str) -> Result<Router, AppError> {
    let cors_layer = cors::build_cors_layer(frontend_url)?;

    Ok(Router::new()
        .route("/health", get(handlers::health::health_handler))
        .route(
            "/api/access/me",
            get(handlers::access::access_profile_handler),
        )
        .route(
            "/api/access/check",
            post(handlers::access::check_permission_handler),
        )
        .route("/api/teams", get(handlers::teams::list_teams_handler))
        .route(
            "/api/teams/{team_id}",
            get(handlers::teams::get_team_handler),
        )
        .route(
            "/api/teams/{team_id}/editable",
            get(handlers::teams::team_editable_handler),
        )
        .fallback(handlers::not_found_handler)
        .layer(from_fn_with_state(
            app_state.clone(),
            middleware::route_guard,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer)
        .with_state(app_state))
}
