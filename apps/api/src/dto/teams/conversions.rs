use arena_application::{
    DeniedTeam, MemberDetails, PublicTeamSummary, TeamDetails, TeamProjection,
};
use arena_domain::AuditMetadata;

use super::{
    DeniedTeamResponse, PublicTeamResponse, TeamAuditResponse, TeamDetailsResponse,
    TeamMemberResponse, TeamResponse,
};

impl From<TeamProjection> for TeamResponse {
    fn from(value: TeamProjection) -> Self {
        match value {
            TeamProjection::Full(details) => Self::Full(details.into()),
            TeamProjection::Public(summary) => Self::Public(summary.into()),
            TeamProjection::Denied(denied) => Self::Denied(denied.into()),
        }
    }
}

impl From<TeamDetails> for TeamDetailsResponse {
    fn from(value: TeamDetails) -> Self {
        Self {
            id: value.id.to_string(),
            name: value.name,
            organization: value.organization,
            description: value.description,
            owner_id: value.owner_id.to_string(),
            members: value
                .members
                .into_iter()
                .map(TeamMemberResponse::from)
                .collect(),
            member_count: value.member_count,
            is_user_team: value.is_user_team,
            audit: value.audit.map(TeamAuditResponse::from),
        }
    }
}

impl From<MemberDetails> for TeamMemberResponse {
    fn from(value: MemberDetails) -> Self {
        Self {
            user_id: value.user_id.map(|user_id| user_id.to_string()),
            name: value.name,
            email: value.email,
            phone: value.phone,
        }
    }
}

impl From<AuditMetadata> for TeamAuditResponse {
    fn from(value: AuditMetadata) -> Self {
        Self {
            created_at: value.created_at.to_rfc3339(),
            updated_at: value.updated_at.to_rfc3339(),
            created_by: value.created_by.to_string(),
            updated_by: value.updated_by.map(|user_id| user_id.to_string()),
        }
    }
}

impl From<PublicTeamSummary> for PublicTeamResponse {
    fn from(value: PublicTeamSummary) -> Self {
        Self {
            id: value.id.to_string(),
            name: value.name,
            organization: value.organization,
            member_count: value.member_count,
            is_user_team: value.is_user_team,
        }
    }
}

impl From<DeniedTeam> for DeniedTeamResponse {
    fn from(value: DeniedTeam) -> Self {
        Self {
            name: value.name.to_owned(),
            member_count: value.member_count,
            is_user_team: value.is_user_team,
        }
    }
}
