use std::str::FromStr;

use arena_core::AppError;
use serde::{Deserialize, Serialize};

/// Capability area of the tournament platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    /// Role-specific landing dashboards.
    Dashboard,
    /// User accounts and role assignment.
    UserManagement,
    /// Team registration and rosters.
    TeamManagement,
    /// Tournament lifecycle.
    TournamentManagement,
    /// Tournament stages (qualification, playoffs).
    StageManagement,
    /// Match schedule generation and edits.
    MatchScheduling,
    /// Live score entry and result finalization.
    MatchScoring,
    /// Referee-to-field assignment.
    RefereeAssignment,
    /// Team standings.
    Rankings,
    /// Public audience screen.
    AudienceDisplay,
}

impl Feature {
    /// Returns the stable transport value for this feature.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::UserManagement => "user_management",
            Self::TeamManagement => "team_management",
            Self::TournamentManagement => "tournament_management",
            Self::StageManagement => "stage_management",
            Self::MatchScheduling => "match_scheduling",
            Self::MatchScoring => "match_scoring",
            Self::RefereeAssignment => "referee_assignment",
            Self::Rankings => "rankings",
            Self::AudienceDisplay => "audience_display",
        }
    }

    /// Returns all known features.
    #[must_use]
    pub fn all() -> &'static [Self] {
        const ALL: &[Feature] = &[
            Feature::Dashboard,
            Feature::UserManagement,
            Feature::TeamManagement,
            Feature::TournamentManagement,
            Feature::StageManagement,
            Feature::MatchScheduling,
            Feature::MatchScoring,
            Feature::RefereeAssignment,
            Feature::Rankings,
            Feature::AudienceDisplay,
        ];

        ALL
    }
}

impl FromStr for Feature {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|feature| feature.as_str() == value)
            .ok_or_else(|| AppError::Validation(format!("unknown feature value '{value}'")))
    }
}

macro_rules! feature_actions {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$variant_meta:meta])* $variant:ident => $value:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $( $(#[$variant_meta])* $variant, )+
        }

        impl $name {
            /// Returns the stable transport value for this action.
            #[must_use]
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( Self::$variant => $value, )+
                }
            }

            /// Returns all actions of this feature.
            #[must_use]
            pub fn all() -> &'static [Self] {
                const ALL: &[$name] = &[ $( $name::$variant, )+ ];
                ALL
            }

            fn from_transport(value: &str) -> Option<Self> {
                match value {
                    $( $value => Some(Self::$variant), )+
                    _ => None,
                }
            }
        }
    };
}

feature_actions! {
    /// Actions on role dashboards.
    DashboardAction {
        /// Open the administrator dashboard.
        ViewAdmin => "view_admin",
        /// Open the referee dashboard.
        ViewReferee => "view_referee",
        /// Open the team dashboard.
        ViewTeam => "view_team",
    }
}

feature_actions! {
    /// Actions on user accounts.
    UserAction {
        /// List and inspect users.
        View => "view",
        /// Create a user account.
        Create => "create",
        /// Edit a user account.
        Edit => "edit",
        /// Delete a user account.
        Delete => "delete",
        /// Change the role of a user.
        ChangeRole => "change_role",
    }
}

feature_actions! {
    /// Actions on teams.
    TeamAction {
        /// See every field of every team.
        ViewAll => "view_all",
        /// See audit metadata on teams.
        ViewAudit => "view_audit",
        /// See every field of a team the caller belongs to.
        ViewOwn => "view_own",
        /// See the public summary of a team.
        ViewPublic => "view_public",
        /// Register a new team.
        Create => "create",
        /// Edit any team.
        EditAny => "edit_any",
        /// Edit a team the caller owns.
        ManageOwn => "manage_own",
        /// Delete any team.
        DeleteAny => "delete_any",
        /// Export team data.
        Export => "export",
    }
}

feature_actions! {
    /// Actions on tournaments.
    TournamentAction {
        /// See tournaments.
        View => "view",
        /// Create a tournament.
        Create => "create",
        /// Edit a tournament.
        Edit => "edit",
        /// Delete a tournament.
        Delete => "delete",
    }
}

feature_actions! {
    /// Actions on tournament stages.
    StageAction {
        /// See stages.
        View => "view",
        /// Create a stage.
        Create => "create",
        /// Edit a stage.
        Edit => "edit",
        /// Delete a stage.
        Delete => "delete",
    }
}

feature_actions! {
    /// Actions on the match schedule.
    ScheduleAction {
        /// See the schedule.
        View => "view",
        /// Generate a schedule for a stage.
        Generate => "generate",
        /// Edit individual matches.
        Edit => "edit",
    }
}

feature_actions! {
    /// Actions on match scores.
    ScoringAction {
        /// See live and final scores.
        View => "view",
        /// Enter scores for any match.
        ScoreAny => "score_any",
        /// Enter scores for a match the referee is assigned to.
        ScoreAssigned => "score_assigned",
        /// Lock a match result.
        Finalize => "finalize",
    }
}

feature_actions! {
    /// Actions on referee assignments.
    RefereeAction {
        /// See referee assignments.
        View => "view",
        /// Assign referees to fields.
        Assign => "assign",
    }
}

feature_actions! {
    /// Actions on rankings.
    RankingAction {
        /// See standings.
        View => "view",
        /// Recompute standings.
        Recalculate => "recalculate",
    }
}

feature_actions! {
    /// Actions on the audience display.
    DisplayAction {
        /// Watch the audience display.
        View => "view",
        /// Switch what the audience display shows.
        Control => "control",
    }
}

/// A (feature, action) pair checked by policy.
///
/// Each variant carries the action enum of its feature, so an action can only
/// be paired with the feature it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Permission {
    /// Dashboard access.
    Dashboard(DashboardAction),
    /// User administration.
    UserManagement(UserAction),
    /// Team registration and rosters.
    TeamManagement(TeamAction),
    /// Tournament lifecycle.
    TournamentManagement(TournamentAction),
    /// Stage lifecycle.
    StageManagement(StageAction),
    /// Match schedule.
    MatchScheduling(ScheduleAction),
    /// Match scores.
    MatchScoring(ScoringAction),
    /// Referee assignment.
    RefereeAssignment(RefereeAction),
    /// Standings.
    Rankings(RankingAction),
    /// Audience display.
    AudienceDisplay(DisplayAction),
}

impl Permission {
    /// Returns the feature this permission belongs to.
    #[must_use]
    pub fn feature(&self) -> Feature {
        match self {
            Self::Dashboard(_) => Feature::Dashboard,
            Self::UserManagement(_) => Feature::UserManagement,
            Self::TeamManagement(_) => Feature::TeamManagement,
            Self::TournamentManagement(_) => Feature::TournamentManagement,
            Self::StageManagement(_) => Feature::StageManagement,
            Self::MatchScheduling(_) => Feature::MatchScheduling,
            Self::MatchScoring(_) => Feature::MatchScoring,
            Self::RefereeAssignment(_) => Feature::RefereeAssignment,
            Self::Rankings(_) => Feature::Rankings,
            Self::AudienceDisplay(_) => Feature::AudienceDisplay,
        }
    }

    /// Returns the transport value of the action part.
    #[must_use]
    pub fn action(&self) -> &'static str {
        match self {
            Self::Dashboard(action) => action.as_str(),
            Self::UserManagement(action) => action.as_str(),
            Self::TeamManagement(action) => action.as_str(),
            Self::TournamentManagement(action) => action.as_str(),
            Self::StageManagement(action) => action.as_str(),
            Self::MatchScheduling(action) => action.as_str(),
            Self::MatchScoring(action) => action.as_str(),
            Self::RefereeAssignment(action) => action.as_str(),
            Self::Rankings(action) => action.as_str(),
            Self::AudienceDisplay(action) => action.as_str(),
        }
    }

    /// Returns every expressible permission, grouped by feature.
    #[must_use]
    pub fn all() -> Vec<Self> {
        let mut values = Vec::new();
        values.extend(DashboardAction::all().iter().copied().map(Self::Dashboard));
        values.extend(UserAction::all().iter().copied().map(Self::UserManagement));
        values.extend(TeamAction::all().iter().copied().map(Self::TeamManagement));
        values.extend(
            TournamentAction::all()
                .iter()
                .copied()
                .map(Self::TournamentManagement),
        );
        values.extend(StageAction::all().iter().copied().map(Self::StageManagement));
        values.extend(ScheduleAction::all().iter().copied().map(Self::MatchScheduling));
        values.extend(ScoringAction::all().iter().copied().map(Self::MatchScoring));
        values.extend(RefereeAction::all().iter().copied().map(Self::RefereeAssignment));
        values.extend(RankingAction::all().iter().copied().map(Self::Rankings));
        values.extend(DisplayAction::all().iter().copied().map(Self::AudienceDisplay));
        values
    }

    /// Parses a transport value such as `team_management.edit_any`.
    pub fn from_transport(value: &str) -> Result<Self, AppError> {
        Self::from_str(value)
    }
}

impl std::fmt::Display for Permission {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}.{}", self.feature().as_str(), self.action())
    }
}

impl FromStr for Permission {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let unknown = || AppError::Validation(format!("unknown permission value '{value}'"));

        let (feature, action) = value.trim().split_once('.').ok_or_else(unknown)?;
        let feature = Feature::from_str(feature).map_err(|_| unknown())?;

        let permission = match feature {
            Feature::Dashboard => DashboardAction::from_transport(action).map(Self::Dashboard),
            Feature::UserManagement => UserAction::from_transport(action).map(Self::UserManagement),
            Feature::TeamManagement => TeamAction::from_transport(action).map(Self::TeamManagement),
            Feature::TournamentManagement => {
                TournamentAction::from_transport(action).map(Self::TournamentManagement)
            }
            Feature::StageManagement => {
                StageAction::from_transport(action).map(Self::StageManagement)
            }
            Feature::MatchScheduling => {
                ScheduleAction::from_transport(action).map(Self::MatchScheduling)
            }
            Feature::MatchScoring => ScoringAction::from_transport(action).map(Self::MatchScoring),
            Feature::RefereeAssignment => {
                RefereeAction::from_transport(action).map(Self::RefereeAssignment)
            }
            Feature::Rankings => RankingAction::from_transport(action).map(Self::Rankings),
            Feature::AudienceDisplay => {
                DisplayAction::from_transport(action).map(Self::AudienceDisplay)
            }
        };

        permission.ok_or_else(unknown)
    }
}

impl From<Permission> for String {
    fn from(value: Permission) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for Permission {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_str(value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::str::FromStr;

    use proptest::prelude::*;

    use super::{Feature, Permission, TeamAction};

    #[test]
    fn permission_formats_as_feature_dot_action() {
        let permission = Permission::TeamManagement(TeamAction::EditAny);
        assert_eq!(permission.to_string(), "team_management.edit_any");
        assert_eq!(permission.feature(), Feature::TeamManagement);
    }

    #[test]
    fn every_permission_restores_from_storage_value() {
        for permission in Permission::all() {
            let restored = Permission::from_str(permission.to_string().as_str());
            assert_eq!(restored.ok(), Some(permission));
        }
    }

    #[test]
    fn transport_values_are_unique() {
        let values: HashSet<String> = Permission::all()
            .into_iter()
            .map(|permission| permission.to_string())
            .collect();
        assert_eq!(values.len(), Permission::all().len());
    }

    #[test]
    fn action_from_another_feature_is_rejected() {
        assert!(Permission::from_str("rankings.edit_any").is_err());
        assert!(Permission::from_str("team_management.edit_anything").is_err());
        assert!(Permission::from_str("team_management").is_err());
    }

    #[test]
    fn permission_serializes_as_string() {
        let encoded =
            serde_json::to_string(&Permission::TeamManagement(TeamAction::ManageOwn))
                .unwrap_or_default();
        assert_eq!(encoded, "\"team_management.manage_own\"");

        let decoded: Result<Permission, _> = serde_json::from_str("\"rankings.view\"");
        assert!(decoded.is_ok());
    }

    proptest! {
        #[test]
        fn arbitrary_strings_never_panic(value in ".*") {
            let _ = Permission::from_str(value.as_str());
        }
    }
}
