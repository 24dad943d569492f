use arena_core::UserId;
use arena_domain::{AuditMetadata, Permission, Role, Team, TeamAction, TeamId, TeamMember};
use serde::Serialize;

use crate::{OwnershipContext, PermissionEvaluator};

#[cfg(test)]
mod tests;

/// Placeholder name shown for teams the caller may not see.
pub const RESTRICTED_TEAM_NAME: &str = "Restricted team";

/// Roster entry as shown to privileged viewers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberDetails {
    /// Linked platform account.
    pub user_id: Option<UserId>,
    /// Member display name.
    pub name: String,
    /// Contact email.
    pub email: Option<String>,
    /// Contact phone number.
    pub phone: Option<String>,
}

impl From<&TeamMember> for MemberDetails {
    fn from(member: &TeamMember) -> Self {
        Self {
            user_id: member.user_id(),
            name: member.name().as_str().to_owned(),
            email: member.email().map(ToOwned::to_owned),
            phone: member.phone().map(ToOwned::to_owned),
        }
    }
}

/// Every team field, optionally with audit metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamDetails {
    /// Team identifier.
    pub id: TeamId,
    /// Team name.
    pub name: String,
    /// Represented organization.
    pub organization: Option<String>,
    /// Free-form description.
    pub description: Option<String>,
    /// Owning user.
    pub owner_id: UserId,
    /// Full roster with contact data.
    pub members: Vec<MemberDetails>,
    /// Roster size.
    pub member_count: usize,
    /// Whether the caller owns or belongs to the team.
    pub is_user_team: bool,
    /// Administrative metadata, present for administrators only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audit: Option<AuditMetadata>,
}

/// Name and coarse aggregates only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublicTeamSummary {
    /// Team identifier.
    pub id: TeamId,
    /// Team name.
    pub name: String,
    /// Represented organization.
    pub organization: Option<String>,
    /// Roster size.
    pub member_count: usize,
    /// Whether the caller owns or belongs to the team.
    pub is_user_team: bool,
}

/// Placeholder returned when the caller may not see a team at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeniedTeam {
    /// Always [`RESTRICTED_TEAM_NAME`].
    pub name: &'static str,
    /// Always zero.
    pub member_count: usize,
    /// Always false.
    pub is_user_team: bool,
}

impl Default for DeniedTeam {
    fn default() -> Self {
        Self {
            name: RESTRICTED_TEAM_NAME,
            member_count: 0,
            is_user_team: false,
        }
    }
}

/// Role-shaped view of a team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "access", rename_all = "snake_case")]
pub enum TeamProjection {
    /// Full details.
    Full(TeamDetails),
    /// Public summary.
    Public(PublicTeamSummary),
    /// No access.
    Denied(DeniedTeam),
}

impl TeamProjection {
    /// Returns whether this is the denied placeholder.
    #[must_use]
    pub fn is_denied(&self) -> bool {
        matches!(self, Self::Denied(_))
    }
}

/// Builds role-appropriate team projections.
///
/// Tiers, most privileged first:
/// 1. `view_all` and `view_audit`: every field plus audit metadata.
/// 2. `view_all`: every field.
/// 3. `view_own` for a team the caller owns: every field.
/// 4. `view_public`: name, organization, and member count.
/// 5. Otherwise the [`DeniedTeam`] placeholder.
#[derive(Debug, Clone)]
pub struct TeamProjector {
    evaluator: PermissionEvaluator,
}

impl TeamProjector {
    /// Creates a projector over `evaluator`.
    #[must_use]
    pub fn new(evaluator: PermissionEvaluator) -> Self {
        Self { evaluator }
    }

    /// Projects one team. Returns the denied placeholder when nothing is visible.
    #[must_use]
    pub fn project_team(
        &self,
        team: &Team,
        role: Option<Role>,
        caller: Option<UserId>,
    ) -> TeamProjection {
        let ownership = OwnershipContext::for_team(team, caller);
        let is_user_team = caller.is_some_and(|user_id| team.is_associated_with(user_id));
        let allowed = |action: TeamAction, context: Option<OwnershipContext>| {
            self.evaluator
                .has_permission(role, Permission::TeamManagement(action), context)
        };

        if allowed(TeamAction::ViewAll, None) {
            let audit = allowed(TeamAction::ViewAudit, None).then(|| team.audit().clone());
            return TeamProjection::Full(details(team, is_user_team, audit));
        }

        if allowed(TeamAction::ViewOwn, Some(ownership)) {
            return TeamProjection::Full(details(team, is_user_team, None));
        }

        if allowed(TeamAction::ViewPublic, None) {
            return TeamProjection::Public(PublicTeamSummary {
                id: team.id(),
                name: team.name().as_str().to_owned(),
                organization: team.organization().map(ToOwned::to_owned),
                member_count: team.members().len(),
                is_user_team,
            });
        }

        TeamProjection::Denied(DeniedTeam::default())
    }

    /// Projects a list of teams, leaving out teams the caller may not see.
    #[must_use]
    pub fn project_teams(
        &self,
        teams: &[Team],
        role: Option<Role>,
        caller: Option<UserId>,
    ) -> Vec<TeamProjection> {
        teams
            .iter()
            .map(|team| self.project_team(team, role, caller))
            .filter(|projection| !projection.is_denied())
            .collect()
    }
}

fn details(team: &Team, is_user_team: bool, audit: Option<AuditMetadata>) -> TeamDetails {
    TeamDetails {
        id: team.id(),
        name: team.name().as_str().to_owned(),
        organization: team.organization().map(ToOwned::to_owned),
        description: team.description().map(ToOwned::to_owned),
        owner_id: team.owner_id(),
        members: team.members().iter().map(MemberDetails::from).collect(),
        member_count: team.members().len(),
        is_user_team,
        audit,
    }
}
