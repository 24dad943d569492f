use std::sync::Arc;

use arena_core::{AppError, AppResult};
use arena_domain::{Permission, Role};
use tracing::debug;

use crate::{AllowedRoles, PermissionEvaluator, PermissionRegistry};

mod defaults;
mod trie;

#[cfg(test)]
mod tests;

use trie::{RouteTrie, path_segments};

/// Access requirement attached to a route prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteRequirement {
    /// Caller role must be in the set.
    Roles(AllowedRoles),
    /// Caller role must satisfy a registry permission.
    Permission(Permission),
}

/// Route prefix with its requirement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRule {
    prefix: String,
    requirement: RouteRequirement,
}

impl RouteRule {
    /// Returns the normalized prefix, always starting with `/`.
    #[must_use]
    pub fn prefix(&self) -> &str {
        self.prefix.as_str()
    }

    /// Returns the access requirement.
    #[must_use]
    pub fn requirement(&self) -> &RouteRequirement {
        &self.requirement
    }
}

/// Decision for routes that no rule covers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnlistedRoutePolicy {
    /// Unlisted routes are public.
    #[default]
    Allow,
    /// Unlisted routes are closed.
    Deny,
}

/// Why a request was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenyReason {
    /// No valid credential accompanied the request.
    Unauthenticated,
    /// The credential's role does not satisfy the route.
    Forbidden,
}

/// Terminal outcome of a route check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    /// Continue with the request.
    Allow,
    /// Redirect to a login or access-denied destination.
    Deny(DenyReason),
}

impl RouteDecision {
    /// Returns whether the request may continue.
    #[must_use]
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allow)
    }
}

/// Maps request paths to route rules and evaluates them.
#[derive(Debug)]
pub struct RouteProtector {
    evaluator: PermissionEvaluator,
    rules: Vec<RouteRule>,
    trie: RouteTrie,
    unlisted: UnlistedRoutePolicy,
}

impl RouteProtector {
    /// Starts a builder bound to `registry`.
    #[must_use]
    pub fn builder(registry: Arc<PermissionRegistry>) -> RouteProtectorBuilder {
        RouteProtectorBuilder::new(registry)
    }

    /// Returns the most specific rule covering `path`.
    #[must_use]
    pub fn matching_rule(&self, path: &str) -> Option<&RouteRule> {
        let segments = path_segments(path);
        self.trie
            .longest_match(segments.as_slice())
            .and_then(|index| self.rules.get(index))
    }

    /// Returns whether any rule covers `path`.
    #[must_use]
    pub fn is_route_protected(&self, path: &str) -> bool {
        self.matching_rule(path).is_some()
    }

    /// Returns whether `role` may open `path`.
    #[must_use]
    pub fn has_route_permission(&self, role: Option<Role>, path: &str) -> bool {
        self.check(path, role).is_allowed()
    }

    /// Runs the per-request check for `path`.
    #[must_use]
    pub fn check(&self, path: &str, role: Option<Role>) -> RouteDecision {
        let Some(rule) = self.matching_rule(path) else {
            return match (self.unlisted, role) {
                (UnlistedRoutePolicy::Allow, _) => RouteDecision::Allow,
                (UnlistedRoutePolicy::Deny, None) => {
                    RouteDecision::Deny(DenyReason::Unauthenticated)
                }
                (UnlistedRoutePolicy::Deny, Some(_)) => RouteDecision::Deny(DenyReason::Forbidden),
            };
        };

        let Some(role) = role else {
            debug!(path, prefix = rule.prefix(), "unauthenticated request to protected route");
            return RouteDecision::Deny(DenyReason::Unauthenticated);
        };

        if self.satisfies(role, rule) {
            RouteDecision::Allow
        } else {
            debug!(
                path,
                prefix = rule.prefix(),
                role = role.as_str(),
                "role does not satisfy route"
            );
            RouteDecision::Deny(DenyReason::Forbidden)
        }
    }

    /// Lists the rule prefixes `role` satisfies.
    #[must_use]
    pub fn accessible_prefixes(&self, role: Option<Role>) -> Vec<&str> {
        let Some(role) = role else {
            return Vec::new();
        };

        self.rules
            .iter()
            .filter(|rule| self.satisfies(role, rule))
            .map(RouteRule::prefix)
            .collect()
    }

    /// Returns all registered rules in registration order.
    #[must_use]
    pub fn rules(&self) -> &[RouteRule] {
        self.rules.as_slice()
    }

    /// Returns the policy for unlisted routes.
    #[must_use]
    pub fn unlisted_policy(&self) -> UnlistedRoutePolicy {
        self.unlisted
    }

    fn satisfies(&self, role: Role, rule: &RouteRule) -> bool {
        match &rule.requirement {
            RouteRequirement::Roles(roles) => roles.contains(role),
            RouteRequirement::Permission(permission) => {
                self.evaluator.has_permission(Some(role), *permission, None)
            }
        }
    }
}

/// Collects route rules and validates them against the registry on `build`.
#[derive(Debug)]
pub struct RouteProtectorBuilder {
    registry: Arc<PermissionRegistry>,
    pending: Vec<PendingRule>,
    unlisted: UnlistedRoutePolicy,
}

#[derive(Debug)]
enum PendingRule {
    Roles(String, Vec<Role>),
    Permission(String, Permission),
}

impl RouteProtectorBuilder {
    /// Creates a builder with the default `Allow` policy for unlisted routes.
    #[must_use]
    pub fn new(registry: Arc<PermissionRegistry>) -> Self {
        Self {
            registry,
            pending: Vec::new(),
            unlisted: UnlistedRoutePolicy::default(),
        }
    }

    /// Restricts `prefix` to a fixed role set.
    #[must_use]
    pub fn protect_roles(
        mut self,
        prefix: impl Into<String>,
        roles: impl IntoIterator<Item = Role>,
    ) -> Self {
        self.pending
            .push(PendingRule::Roles(prefix.into(), roles.into_iter().collect()));
        self
    }

    /// Restricts `prefix` to callers holding `permission`.
    #[must_use]
    pub fn protect_permission(mut self, prefix: impl Into<String>, permission: Permission) -> Self {
        self.pending
            .push(PendingRule::Permission(prefix.into(), permission));
        self
    }

    /// Sets the policy for routes no rule covers.
    #[must_use]
    pub fn unlisted_routes(mut self, policy: UnlistedRoutePolicy) -> Self {
        self.unlisted = policy;
        self
    }

    /// Validates every rule and builds the matcher.
    ///
    /// Fails on malformed or duplicate prefixes, empty role sets, and
    /// permissions the registry does not define or that need ownership.
    pub fn build(self) -> AppResult<RouteProtector> {
        let Self {
            registry,
            pending,
            unlisted,
        } = self;
        let mut rules: Vec<RouteRule> = Vec::with_capacity(pending.len());
        let mut trie = RouteTrie::default();

        for pending in pending {
            let (raw_prefix, requirement) = match pending {
                PendingRule::Roles(prefix, roles) => {
                    let roles = AllowedRoles::new(roles).map_err(|_| {
                        AppError::Validation(format!(
                            "route '{prefix}' must allow at least one role"
                        ))
                    })?;
                    (prefix, RouteRequirement::Roles(roles))
                }
                PendingRule::Permission(prefix, permission) => {
                    validate_route_permission(&registry, prefix.as_str(), permission)?;
                    (prefix, RouteRequirement::Permission(permission))
                }
            };

            if !raw_prefix.starts_with('/') {
                return Err(AppError::Validation(format!(
                    "route prefix '{raw_prefix}' must start with '/'"
                )));
            }

            let segments = path_segments(raw_prefix.as_str());
            let prefix = format!("/{}", segments.join("/"));
            if let Err(existing) = trie.insert(segments.as_slice(), rules.len()) {
                let existing = rules
                    .get(existing)
                    .map(|rule| rule.prefix.clone())
                    .unwrap_or_default();
                return Err(AppError::Conflict(format!(
                    "route prefix '{prefix}' is registered more than once (first as '{existing}')"
                )));
            }

            rules.push(RouteRule {
                prefix,
                requirement,
            });
        }

        Ok(RouteProtector {
            evaluator: PermissionEvaluator::new(registry),
            rules,
            trie,
            unlisted,
        })
    }
}

fn validate_route_permission(
    registry: &PermissionRegistry,
    prefix: &str,
    permission: Permission,
) -> AppResult<()> {
    let definition = registry.lookup(permission).ok_or_else(|| {
        AppError::Validation(format!(
            "route '{prefix}' references undefined permission '{permission}'"
        ))
    })?;

    if definition.requires_ownership() {
        return Err(AppError::Validation(format!(
            "route '{prefix}' references ownership-gated permission '{permission}'"
        )));
    }

    Ok(())
}
