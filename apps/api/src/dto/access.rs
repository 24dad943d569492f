use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Role, permissions, and reachable route prefixes of the caller.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/access-profile-response.ts"
)]
pub struct AccessProfileResponse {
    pub authenticated: bool,
    pub user_id: Option<String>,
    pub display_name: Option<String>,
    pub role: Option<String>,
    /// Permissions held without an ownership claim, as `feature.action` values.
    pub permissions: Vec<String>,
    pub accessible_routes: Vec<String>,
}

/// Incoming payload for a single permission check.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/permission-check-request.ts"
)]
pub struct PermissionCheckRequest {
    pub permission: String,
    /// Owner of the target entity; enables ownership-gated permissions for that owner.
    pub owner_id: Option<String>,
}

/// Outcome of a single permission check.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/permission-check-response.ts"
)]
pub struct PermissionCheckResponse {
    pub permission: String,
    pub allowed: bool,
}
