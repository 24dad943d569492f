use serde::Serialize;
use ts_rs::TS;

mod conversions;

/// Role-shaped team payload, discriminated by `access`.
#[derive(Debug, Serialize, TS)]
#[serde(tag = "access", rename_all = "snake_case")]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/team-response.ts"
)]
pub enum TeamResponse {
    Full(TeamDetailsResponse),
    Public(PublicTeamResponse),
    Denied(DeniedTeamResponse),
}

/// API representation of a team with every field.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/team-details-response.ts"
)]
pub struct TeamDetailsResponse {
    pub id: String,
    pub name: String,
    pub organization: Option<String>,
    pub description: Option<String>,
    pub owner_id: String,
    pub members: Vec<TeamMemberResponse>,
    pub member_count: usize,
    pub is_user_team: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub audit: Option<TeamAuditResponse>,
}

/// API representation of one roster entry.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/team-member-response.ts"
)]
pub struct TeamMemberResponse {
    pub user_id: Option<String>,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// Administrative bookkeeping of a team.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/team-audit-response.ts"
)]
pub struct TeamAuditResponse {
    pub created_at: String,
    pub updated_at: String,
    pub created_by: String,
    pub updated_by: Option<String>,
}

/// API representation of a team's public summary.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/public-team-response.ts"
)]
pub struct PublicTeamResponse {
    pub id: String,
    pub name: String,
    pub organization: Option<String>,
    pub member_count: usize,
    pub is_user_team: bool,
}

/// Placeholder shown for a team the caller may not see.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/denied-team-response.ts"
)]
pub struct DeniedTeamResponse {
    pub name: String,
    pub member_count: usize,
    pub is_user_team: bool,
}

/// Edit decision for one team.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/team-editable-response.ts"
)]
pub struct TeamEditableResponse {
    pub team_id: String,
    pub can_edit: bool,
}
