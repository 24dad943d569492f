use std::sync::Arc;

use arena_application::{
    PermissionEvaluator, PermissionRegistry, RouteProtector, SessionRepository, SessionService,
    TeamRepository, TeamService,
};
use arena_core::AppError;
use tracing::{info, warn};

use crate::api_config::ApiConfig;
use crate::state::AppState;

/// Wires the permission table, route rules, and services into shared state.
pub fn build_app_state(
    config: &ApiConfig,
    team_repository: Arc<dyn TeamRepository>,
    session_repository: Arc<dyn SessionRepository>,
) -> Result<AppState, AppError> {
    let registry = Arc::new(PermissionRegistry::tournament_defaults()?);

    let undefined = registry.undefined_permissions();
    if !undefined.is_empty() {
        let names = undefined
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        warn!(permissions = %names, "permissions without a registry entry are denied to every role");
    }

    let route_protector = Arc::new(RouteProtector::tournament_defaults(
        registry.clone(),
        config.unlisted_route_policy,
    )?);

    info!(
        permissions = registry.len(),
        route_rules = route_protector.rules().len(),
        unlisted_routes = ?route_protector.unlisted_policy(),
        "access control tables loaded"
    );

    let evaluator = PermissionEvaluator::new(registry);

    Ok(AppState {
        session_service: SessionService::new(session_repository),
        team_service: TeamService::new(team_repository, evaluator.clone()),
        evaluator,
        route_protector,
        redirects: Arc::new(config.redirects.clone()),
    })
}
