use arena_application::OwnershipContext;
use arena_core::UserId;
use arena_domain::{Permission, Principal};
use axum::Json;
use axum::extract::{Extension, State};

use crate::dto::{AccessProfileResponse, PermissionCheckRequest, PermissionCheckResponse};
use crate::error::ApiResult;
use crate::middleware::CurrentPrincipal;
use crate::state::AppState;

pub async fn access_profile_handler(
    State(state): State<AppState>,
    Extension(CurrentPrincipal(principal)): Extension<CurrentPrincipal>,
) -> Json<AccessProfileResponse> {
    let role = principal.as_ref().map(Principal::role);

    Json(AccessProfileResponse {
        authenticated: principal.is_some(),
        user_id: principal
            .as_ref()
            .map(|principal| principal.user_id().to_string()),
        display_name: principal
            .as_ref()
            .map(|principal| principal.display_name().to_owned()),
        role: role.map(|role| role.as_str().to_owned()),
        permissions: state
            .evaluator
            .accessible_permissions(role)
            .into_iter()
            .map(|permission| permission.to_string())
            .collect(),
        accessible_routes: state
            .route_protector
            .accessible_prefixes(role)
            .into_iter()
            .map(ToOwned::to_owned)
            .collect(),
    })
}

pub async fn check_permission_handler(
    State(state): State<AppState>,
    Extension(CurrentPrincipal(principal)): Extension<CurrentPrincipal>,
    Json(payload): Json<PermissionCheckRequest>,
) -> ApiResult<Json<PermissionCheckResponse>> {
    let permission = Permission::from_transport(payload.permission.as_str())?;
    let context = payload
        .owner_id
        .as_deref()
        .map(|owner_id| owner_id.trim().parse::<UserId>())
        .transpose()?
        .map(|owner_id| {
            OwnershipContext::new(
                principal
                    .as_ref()
                    .is_some_and(|principal| principal.user_id() == owner_id),
            )
        });

    let allowed =
        state
            .evaluator
            .has_permission(principal.as_ref().map(Principal::role), permission, context);

    Ok(Json(PermissionCheckResponse {
        permission: permission.to_string(),
        allowed,
    }))
}
