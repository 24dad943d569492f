use arena_domain::{
    DashboardAction, DisplayAction, RankingAction, RefereeAction, ScheduleAction, ScoringAction,
    StageAction, TeamAction, TournamentAction, UserAction,
};

use super::*;

const EVERYONE: [Role; 6] = [
    Role::Administrator,
    Role::HeadReferee,
    Role::AllianceReferee,
    Role::TeamLeader,
    Role::TeamMember,
    Role::Common,
];
const REFEREE_CREW: [Role; 3] = [Role::Administrator, Role::HeadReferee, Role::AllianceReferee];
const RACE_CONTROL: [Role; 2] = [Role::Administrator, Role::HeadReferee];
const ADMIN_ONLY: [Role; 1] = [Role::Administrator];

impl PermissionRegistry {
    /// Builds the standard policy table of the tournament platform.
    pub fn tournament_defaults() -> AppResult<Self> {
        let registry = Self::builder()
            .define(
                Permission::Dashboard(DashboardAction::ViewAdmin),
                ADMIN_ONLY,
                PermissionOptions::new().describe("Open the administrator dashboard"),
            )?
            .define(
                Permission::Dashboard(DashboardAction::ViewReferee),
                REFEREE_CREW,
                PermissionOptions::new().describe("Open the referee dashboard"),
            )?
            .define(
                Permission::Dashboard(DashboardAction::ViewTeam),
                [Role::TeamLeader, Role::TeamMember],
                PermissionOptions::new().describe("Open the team dashboard"),
            )?;

        let registry = UserAction::all()
            .iter()
            .try_fold(registry, |registry, action| {
                registry.define(
                    Permission::UserManagement(*action),
                    ADMIN_ONLY,
                    PermissionOptions::new().describe("Administer user accounts"),
                )
            })?;

        let registry = registry
            .define(
                Permission::TeamManagement(TeamAction::ViewAll),
                REFEREE_CREW,
                PermissionOptions::new().describe("See every field of every team"),
            )?
            .define(
                Permission::TeamManagement(TeamAction::ViewAudit),
                ADMIN_ONLY,
                PermissionOptions::new().describe("See team audit metadata"),
            )?
            .define(
                Permission::TeamManagement(TeamAction::ViewOwn),
                [Role::TeamLeader, Role::TeamMember],
                PermissionOptions::new()
                    .requires_ownership()
                    .describe("See every field of the caller's own team"),
            )?
            .define(
                Permission::TeamManagement(TeamAction::ViewPublic),
                EVERYONE,
                PermissionOptions::new().describe("See public team summaries"),
            )?
            .define(
                Permission::TeamManagement(TeamAction::Create),
                [Role::Administrator, Role::TeamLeader],
                PermissionOptions::new().describe("Register a team"),
            )?
            .define(
                Permission::TeamManagement(TeamAction::EditAny),
                ADMIN_ONLY,
                PermissionOptions::new().describe("Edit any team"),
            )?
            .define(
                Permission::TeamManagement(TeamAction::ManageOwn),
                [Role::TeamLeader],
                PermissionOptions::new()
                    .requires_ownership()
                    .describe("Edit the caller's own team"),
            )?
            .define(
                Permission::TeamManagement(TeamAction::DeleteAny),
                ADMIN_ONLY,
                PermissionOptions::new().describe("Delete any team"),
            )?
            .define(
                Permission::TeamManagement(TeamAction::Export),
                RACE_CONTROL,
                PermissionOptions::new().describe("Export team data"),
            )?;

        let registry = registry
            .define(
                Permission::TournamentManagement(TournamentAction::View),
                EVERYONE,
                PermissionOptions::new().describe("See tournaments"),
            )?
            .define(
                Permission::TournamentManagement(TournamentAction::Create),
                ADMIN_ONLY,
                PermissionOptions::new().describe("Create tournaments"),
            )?
            .define(
                Permission::TournamentManagement(TournamentAction::Edit),
                ADMIN_ONLY,
                PermissionOptions::new().describe("Edit tournaments"),
            )?
            .define(
                Permission::TournamentManagement(TournamentAction::Delete),
                ADMIN_ONLY,
                PermissionOptions::new().describe("Delete tournaments"),
            )?
            .define(
                Permission::StageManagement(StageAction::View),
                EVERYONE,
                PermissionOptions::new().describe("See tournament stages"),
            )?
            .define(
                Permission::StageManagement(StageAction::Create),
                ADMIN_ONLY,
                PermissionOptions::new().describe("Create stages"),
            )?
            .define(
                Permission::StageManagement(StageAction::Edit),
                ADMIN_ONLY,
                PermissionOptions::new().describe("Edit stages"),
            )?
            .define(
                Permission::StageManagement(StageAction::Delete),
                ADMIN_ONLY,
                PermissionOptions::new().describe("Delete stages"),
            )?;

        let registry = registry
            .define(
                Permission::MatchScheduling(ScheduleAction::View),
                EVERYONE,
                PermissionOptions::new().describe("See the match schedule"),
            )?
            .define(
                Permission::MatchScheduling(ScheduleAction::Generate),
                ADMIN_ONLY,
                PermissionOptions::new().describe("Generate a stage schedule"),
            )?
            .define(
                Permission::MatchScheduling(ScheduleAction::Edit),
                RACE_CONTROL,
                PermissionOptions::new().describe("Edit scheduled matches"),
            )?
            .define(
                Permission::MatchScoring(ScoringAction::View),
                EVERYONE,
                PermissionOptions::new().describe("See match scores"),
            )?
            .define(
                Permission::MatchScoring(ScoringAction::ScoreAny),
                RACE_CONTROL,
                PermissionOptions::new().describe("Score any match"),
            )?
            .define(
                Permission::MatchScoring(ScoringAction::ScoreAssigned),
                [Role::AllianceReferee],
                PermissionOptions::new()
                    .requires_ownership()
                    .describe("Score a match on the referee's assigned field"),
            )?
            .define(
                Permission::MatchScoring(ScoringAction::Finalize),
                RACE_CONTROL,
                PermissionOptions::new().describe("Lock match results"),
            )?
            .define(
                Permission::RefereeAssignment(RefereeAction::View),
                REFEREE_CREW,
                PermissionOptions::new().describe("See referee assignments"),
            )?
            .define(
                Permission::RefereeAssignment(RefereeAction::Assign),
                RACE_CONTROL,
                PermissionOptions::new().describe("Assign referees to fields"),
            )?
            .define(
                Permission::Rankings(RankingAction::View),
                EVERYONE,
                PermissionOptions::new().describe("See standings"),
            )?
            .define(
                Permission::Rankings(RankingAction::Recalculate),
                ADMIN_ONLY,
                PermissionOptions::new().describe("Recompute standings"),
            )?
            .define(
                Permission::AudienceDisplay(DisplayAction::View),
                EVERYONE,
                PermissionOptions::new().describe("Watch the audience display"),
            )?
            .define(
                Permission::AudienceDisplay(DisplayAction::Control),
                RACE_CONTROL,
                PermissionOptions::new().describe("Control the audience display"),
            )?;

        Ok(registry.build())
    }
}
