use serde::Serialize;
use ts_rs::TS;

mod access;
mod teams;

pub use access::{AccessProfileResponse, PermissionCheckRequest, PermissionCheckResponse};
pub use teams::{
    DeniedTeamResponse, PublicTeamResponse, TeamAuditResponse, TeamDetailsResponse,
    TeamEditableResponse, TeamMemberResponse, TeamResponse,
};

/// Health response payload.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/health-response.ts"
)]
pub struct HealthResponse {
    pub status: &'static str,
}
