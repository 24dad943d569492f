use std::collections::{BTreeMap, BTreeSet};

use arena_core::{AppError, AppResult};
use arena_domain::{Feature, Permission, Role};

mod defaults;

#[cfg(test)]
mod tests;

/// Non-empty set of roles named by a policy entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowedRoles(BTreeSet<Role>);

impl AllowedRoles {
    /// Creates a validated role set. Fails when `roles` is empty.
    pub fn new(roles: impl IntoIterator<Item = Role>) -> AppResult<Self> {
        let roles: BTreeSet<Role> = roles.into_iter().collect();
        if roles.is_empty() {
            return Err(AppError::Validation(
                "allowed roles must name at least one role".to_owned(),
            ));
        }

        Ok(Self(roles))
    }

    /// Returns whether `role` is a member of the set.
    #[must_use]
    pub fn contains(&self, role: Role) -> bool {
        self.0.contains(&role)
    }

    /// Returns the roles in the set.
    #[must_use]
    pub fn as_set(&self) -> &BTreeSet<Role> {
        &self.0
    }
}

/// Optional attributes of a permission definition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PermissionOptions {
    requires_ownership: bool,
    description: String,
}

impl PermissionOptions {
    /// Creates options with no ownership gate and an empty description.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gates the permission on the caller owning the target entity.
    #[must_use]
    pub fn requires_ownership(mut self) -> Self {
        self.requires_ownership = true;
        self
    }

    /// Attaches a human-readable description.
    #[must_use]
    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Policy entry for one (feature, action) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionDefinition {
    permission: Permission,
    allowed_roles: AllowedRoles,
    requires_ownership: bool,
    description: String,
}

impl PermissionDefinition {
    /// Returns the permission this entry defines.
    #[must_use]
    pub fn permission(&self) -> Permission {
        self.permission
    }

    /// Returns the roles that may use the permission.
    #[must_use]
    pub fn allowed_roles(&self) -> &AllowedRoles {
        &self.allowed_roles
    }

    /// Returns whether the caller must own the target entity.
    #[must_use]
    pub fn requires_ownership(&self) -> bool {
        self.requires_ownership
    }

    /// Returns the documentation string.
    #[must_use]
    pub fn description(&self) -> &str {
        self.description.as_str()
    }
}

/// Immutable feature -> action -> definition table.
///
/// Built once through [`PermissionRegistryBuilder`] and shared behind an
/// `Arc`. There is no mutation API after `build`.
#[derive(Debug, Clone, Default)]
pub struct PermissionRegistry {
    table: BTreeMap<Feature, BTreeMap<Permission, PermissionDefinition>>,
}

impl PermissionRegistry {
    /// Starts an empty registry builder.
    #[must_use]
    pub fn builder() -> PermissionRegistryBuilder {
        PermissionRegistryBuilder::default()
    }

    /// Returns the definition of `permission`, if one exists.
    #[must_use]
    pub fn lookup(&self, permission: Permission) -> Option<&PermissionDefinition> {
        self.table
            .get(&permission.feature())
            .and_then(|actions| actions.get(&permission))
    }

    /// Returns the roles allowed by `permission`, or an empty set when undefined.
    #[must_use]
    pub fn roles_for(&self, permission: Permission) -> BTreeSet<Role> {
        self.lookup(permission)
            .map(|definition| definition.allowed_roles.as_set().clone())
            .unwrap_or_default()
    }

    /// Lists every defined permission that names `role`.
    #[must_use]
    pub fn permissions_for_role(&self, role: Role) -> Vec<Permission> {
        self.definitions()
            .filter(|definition| definition.allowed_roles.contains(role))
            .map(PermissionDefinition::permission)
            .collect()
    }

    /// Lists expressible permissions that have no definition.
    #[must_use]
    pub fn undefined_permissions(&self) -> Vec<Permission> {
        Permission::all()
            .into_iter()
            .filter(|permission| self.lookup(*permission).is_none())
            .collect()
    }

    /// Iterates over all definitions, grouped by feature.
    pub fn definitions(&self) -> impl Iterator<Item = &PermissionDefinition> {
        self.table.values().flat_map(BTreeMap::values)
    }

    /// Returns the number of defined permissions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.table.values().map(BTreeMap::len).sum()
    }

    /// Returns whether no permission is defined.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Accumulates permission definitions before freezing them into a registry.
#[derive(Debug, Default)]
pub struct PermissionRegistryBuilder {
    table: BTreeMap<Feature, BTreeMap<Permission, PermissionDefinition>>,
}

impl PermissionRegistryBuilder {
    /// Adds a definition for `permission`.
    ///
    /// Fails when `roles` is empty or the permission is already defined.
    pub fn define(
        mut self,
        permission: Permission,
        roles: impl IntoIterator<Item = Role>,
        options: PermissionOptions,
    ) -> AppResult<Self> {
        let allowed_roles = AllowedRoles::new(roles).map_err(|_| {
            AppError::Validation(format!(
                "permission '{permission}' must allow at least one role"
            ))
        })?;

        let actions = self.table.entry(permission.feature()).or_default();
        if actions.contains_key(&permission) {
            return Err(AppError::Conflict(format!(
                "permission '{permission}' is defined more than once"
            )));
        }

        actions.insert(
            permission,
            PermissionDefinition {
                permission,
                allowed_roles,
                requires_ownership: options.requires_ownership,
                description: options.description,
            },
        );

        Ok(self)
    }

    /// Freezes the definitions.
    #[must_use]
    pub fn build(self) -> PermissionRegistry {
        PermissionRegistry { table: self.table }
    }
}
