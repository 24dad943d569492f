use arena_domain::{
    DashboardAction, DisplayAction, RankingAction, ScheduleAction, StageAction, TeamAction,
    TournamentAction, UserAction,
};

use super::*;

impl RouteProtector {
    /// Builds the standard route table of the tournament platform.
    ///
    /// Routes not listed here fall under `unlisted`.
    pub fn tournament_defaults(
        registry: Arc<PermissionRegistry>,
        unlisted: UnlistedRoutePolicy,
    ) -> AppResult<Self> {
        Self::builder(registry)
            .protect_permission("/admin", Permission::Dashboard(DashboardAction::ViewAdmin))
            .protect_permission("/admin/users", Permission::UserManagement(UserAction::View))
            .protect_permission(
                "/admin/tournaments",
                Permission::TournamentManagement(TournamentAction::Edit),
            )
            .protect_permission(
                "/admin/stages",
                Permission::StageManagement(StageAction::Edit),
            )
            .protect_permission(
                "/admin/schedule",
                Permission::MatchScheduling(ScheduleAction::Generate),
            )
            .protect_permission(
                "/admin/rankings",
                Permission::Rankings(RankingAction::Recalculate),
            )
            .protect_permission(
                "/referee",
                Permission::Dashboard(DashboardAction::ViewReferee),
            )
            .protect_roles(
                "/referee/scoring",
                [Role::Administrator, Role::HeadReferee, Role::AllianceReferee],
            )
            .protect_permission("/team", Permission::Dashboard(DashboardAction::ViewTeam))
            .protect_permission("/teams/new", Permission::TeamManagement(TeamAction::Create))
            .protect_permission(
                "/teams/export",
                Permission::TeamManagement(TeamAction::Export),
            )
            .protect_permission(
                "/audience-display/control",
                Permission::AudienceDisplay(DisplayAction::Control),
            )
            .protect_roles("/profile", Role::all().iter().copied())
            .protect_permission(
                "/api/teams",
                Permission::TeamManagement(TeamAction::ViewPublic),
            )
            .unlisted_routes(unlisted)
            .build()
    }
}
