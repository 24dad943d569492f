use std::sync::Arc;

use arena_core::{AppError, AppResult, UserId};
use arena_domain::{Permission, Role, Team, TeamAction};
use tracing::{debug, warn};

use crate::PermissionRegistry;


/// Caller-supplied ownership claim for one access check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OwnershipContext {
    is_owner: bool,
}

impl OwnershipContext {
    /// Creates a context from an explicit ownership flag.
    #[must_use]
    pub fn new(is_owner: bool) -> Self {
        Self { is_owner }
    }

    /// Context for a caller that owns the target entity.
    #[must_use]
    pub fn owner() -> Self {
        Self::new(true)
    }

    /// Context for a caller that does not own the target entity.
    #[must_use]
    pub fn not_owner() -> Self {
        Self::new(false)
    }

    /// Derives ownership of `team` for `caller`.
    ///
    /// Only the registered owner counts; roster membership does not.
    #[must_use]
    pub fn for_team(team: &Team, caller: Option<UserId>) -> Self {
        Self::new(caller.is_some_and(|user_id| team.owner_id() == user_id))
    }

    /// Returns the ownership flag.
    #[must_use]
    pub fn is_owner(&self) -> bool {
        self.is_owner
    }
}

/// Decides allow/deny for single access checks against a registry.
///
/// Every method is total: misses, unknown roles, and missing ownership
/// context all resolve to a denial value.
#[derive(Debug, Clone)]
pub struct PermissionEvaluator {
    registry: Arc<PermissionRegistry>,
}

impl PermissionEvaluator {
    /// Creates an evaluator over a shared registry.
    #[must_use]
    pub fn new(registry: Arc<PermissionRegistry>) -> Self {
        Self { registry }
    }

    /// Returns the registry backing this evaluator.
    #[must_use]
    pub fn registry(&self) -> &PermissionRegistry {
        self.registry.as_ref()
    }

    /// Returns whether `role` may use `permission`.
    #[must_use]
    pub fn has_permission(
        &self,
        role: Option<Role>,
        permission: Permission,
        context: Option<OwnershipContext>,
    ) -> bool {
        match self.resolve(role, permission, context) {
            Evaluation::Allowed => true,
            denied => {
                debug!(
                    role = role.map(|role| role.as_str()),
                    permission = %permission,
                    reason = denied.reason(),
                    "permission denied"
                );
                false
            }
        }
    }

    /// Returns whether `role` holds at least one of `permissions`.
    #[must_use]
    pub fn has_any_permission(
        &self,
        role: Option<Role>,
        permissions: &[Permission],
        context: Option<OwnershipContext>,
    ) -> bool {
        permissions
            .iter()
            .any(|permission| self.has_permission(role, *permission, context))
    }

    /// Returns whether `role` holds every one of `permissions`.
    ///
    /// An empty list is satisfied by any authenticated role.
    #[must_use]
    pub fn has_all_permissions(
        &self,
        role: Option<Role>,
        permissions: &[Permission],
        context: Option<OwnershipContext>,
    ) -> bool {
        role.is_some()
            && permissions
                .iter()
                .all(|permission| self.has_permission(role, *permission, context))
    }

    /// Ensures `role` may use `permission`.
    pub fn require_permission(
        &self,
        role: Option<Role>,
        permission: Permission,
        context: Option<OwnershipContext>,
    ) -> AppResult<()> {
        match self.resolve(role, permission, context) {
            Evaluation::Allowed => Ok(()),
            Evaluation::Unauthenticated => Err(AppError::Unauthorized(format!(
                "authentication required for permission '{permission}'"
            ))),
            denied => Err(AppError::Forbidden(format!(
                "role '{}' is missing permission '{permission}' ({})",
                role.map(|role| role.as_str()).unwrap_or("none"),
                denied.reason()
            ))),
        }
    }

    /// Returns whether the caller may edit `team`.
    ///
    /// Administrators edit any team; team leaders edit the teams they own.
    #[must_use]
    pub fn can_edit_team(&self, role: Option<Role>, caller: Option<UserId>, team: &Team) -> bool {
        if self.has_permission(role, Permission::TeamManagement(TeamAction::EditAny), None) {
            return true;
        }

        self.has_permission(
            role,
            Permission::TeamManagement(TeamAction::ManageOwn),
            Some(OwnershipContext::for_team(team, caller)),
        )
    }

    /// Lists the permissions `role` holds without any ownership context.
    #[must_use]
    pub fn accessible_permissions(&self, role: Option<Role>) -> Vec<Permission> {
        let Some(role) = role else {
            return Vec::new();
        };

        self.registry
            .definitions()
            .filter(|definition| {
                !definition.requires_ownership() && definition.allowed_roles().contains(role)
            })
            .map(|definition| definition.permission())
            .collect()
    }

    fn resolve(
        &self,
        role: Option<Role>,
        permission: Permission,
        context: Option<OwnershipContext>,
    ) -> Evaluation {
        let Some(role) = role else {
            return Evaluation::Unauthenticated;
        };

        let Some(definition) = self.registry.lookup(permission) else {
            warn!(permission = %permission, "permission check against undefined permission");
            return Evaluation::Undefined;
        };

        if !definition.allowed_roles().contains(role) {
            return Evaluation::RoleNotAllowed;
        }

        if definition.requires_ownership() && !context.is_some_and(|context| context.is_owner()) {
            return Evaluation::OwnershipRequired;
        }

        Evaluation::Allowed
    }
}

enum Evaluation {
    Allowed,
    Unauthenticated,
    Undefined,
    RoleNotAllowed,
    OwnershipRequired,
}

impl Evaluation {
    fn reason(&self) -> &'static str {
        match self {
            Self::Allowed => "allowed",
            Self::Unauthenticated => "unauthenticated",
            Self::Undefined => "undefined permission",
            Self::RoleNotAllowed => "role not allowed",
            Self::OwnershipRequired => "ownership required",
        }
    }
}
