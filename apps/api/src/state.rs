use std::sync::Arc;

use arena_application::{PermissionEvaluator, RouteProtector, SessionService, TeamService};

use crate::api_config::RedirectTargets;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub session_service: SessionService,
    pub team_service: TeamService,
    pub evaluator: PermissionEvaluator,
    pub route_protector: Arc<RouteProtector>,
    pub redirects: Arc<RedirectTargets>,
}
