use std::sync::Arc;

use arena_core::AppError;
use arena_domain::{DashboardAction, Permission, RankingAction, Role, TeamAction, UserAction};
use proptest::prelude::*;

use crate::{PermissionOptions, PermissionRegistry};

use super::{DenyReason, RouteDecision, RouteProtector, RouteRequirement, UnlistedRoutePolicy};

fn default_registry() -> Arc<PermissionRegistry> {
    let Ok(registry) = PermissionRegistry::tournament_defaults() else {
        panic!("default table should build");
    };

    Arc::new(registry)
}

fn admin_protector() -> RouteProtector {
    let result = RouteProtector::builder(default_registry())
        .protect_permission("/admin", Permission::Dashboard(DashboardAction::ViewAdmin))
        .protect_roles("/admin/users", [Role::Administrator, Role::HeadReferee])
        .build();

    let Ok(protector) = result else {
        panic!("route table should build");
    };

    protector
}

#[test]
fn longest_prefix_wins() {
    let protector = admin_protector();

    let rule = protector.matching_rule("/admin/users/5");
    assert_eq!(rule.map(|rule| rule.prefix()), Some("/admin/users"));
    assert!(matches!(
        rule.map(|rule| rule.requirement()),
        Some(RouteRequirement::Roles(_))
    ));

    assert_eq!(
        protector.matching_rule("/admin/settings").map(|rule| rule.prefix()),
        Some("/admin")
    );
}

#[test]
fn head_referee_reaches_user_list_but_not_admin_root() {
    let protector = admin_protector();

    assert_eq!(
        protector.check("/admin/users/5", Some(Role::HeadReferee)),
        RouteDecision::Allow
    );
    assert_eq!(
        protector.check("/admin", Some(Role::HeadReferee)),
        RouteDecision::Deny(DenyReason::Forbidden)
    );
}

#[test]
fn prefix_match_respects_segment_boundaries() {
    let protector = admin_protector();

    assert!(!protector.is_route_protected("/administrator"));
    assert!(protector.is_route_protected("/admin"));
    assert!(protector.is_route_protected("/admin/"));
    assert!(protector.is_route_protected("/admin?tab=users"));
}

#[test]
fn unlisted_route_is_allowed_by_default() {
    let protector = admin_protector();

    assert_eq!(protector.unlisted_policy(), UnlistedRoutePolicy::Allow);
    assert!(!protector.is_route_protected("/public/page"));
    assert_eq!(protector.check("/public/page", None), RouteDecision::Allow);
    assert!(protector.has_route_permission(None, "/public/page"));
}

#[test]
fn unlisted_route_can_be_closed() {
    let result = RouteProtector::builder(default_registry())
        .protect_roles("/profile", [Role::Common])
        .unlisted_routes(UnlistedRoutePolicy::Deny)
        .build();
    let Ok(protector) = result else {
        panic!("route table should build");
    };

    assert_eq!(
        protector.check("/public/page", None),
        RouteDecision::Deny(DenyReason::Unauthenticated)
    );
    assert_eq!(
        protector.check("/public/page", Some(Role::Administrator)),
        RouteDecision::Deny(DenyReason::Forbidden)
    );
}

#[test]
fn protected_route_without_role_is_unauthenticated() {
    let protector = admin_protector();
    assert_eq!(
        protector.check("/admin/users", None),
        RouteDecision::Deny(DenyReason::Unauthenticated)
    );
}

#[test]
fn prefix_must_start_with_slash() {
    let result = RouteProtector::builder(default_registry())
        .protect_roles("admin", [Role::Administrator])
        .build();

    assert!(matches!(result, Err(AppError::Validation(_))));
}

#[test]
fn duplicate_prefixes_are_rejected_after_normalization() {
    let result = RouteProtector::builder(default_registry())
        .protect_roles("/admin", [Role::Administrator])
        .protect_permission("/admin/", Permission::UserManagement(UserAction::View))
        .build();

    assert!(matches!(result, Err(AppError::Conflict(_))));
}

#[test]
fn empty_role_rule_is_rejected() {
    let result = RouteProtector::builder(default_registry())
        .protect_roles("/admin", Vec::<Role>::new())
        .build();

    assert!(matches!(result, Err(AppError::Validation(_))));
}

#[test]
fn undefined_permission_reference_fails_at_build() {
    let Ok(builder) = PermissionRegistry::builder().define(
        Permission::Rankings(RankingAction::View),
        [Role::Common],
        PermissionOptions::new(),
    ) else {
        panic!("definition should be accepted");
    };

    let result = RouteProtector::builder(Arc::new(builder.build()))
        .protect_permission(
            "/admin/rankings",
            Permission::Rankings(RankingAction::Recalculate),
        )
        .build();

    assert!(matches!(result, Err(AppError::Validation(_))));
}

#[test]
fn ownership_gated_permission_cannot_guard_route() {
    let result = RouteProtector::builder(default_registry())
        .protect_permission("/team/edit", Permission::TeamManagement(TeamAction::ManageOwn))
        .build();

    assert!(matches!(result, Err(AppError::Validation(_))));
}

#[test]
fn tournament_routes_follow_registry() {
    let Ok(protector) =
        RouteProtector::tournament_defaults(default_registry(), UnlistedRoutePolicy::Allow)
    else {
        panic!("default routes should build");
    };

    assert!(protector.has_route_permission(Some(Role::Administrator), "/admin/users/42"));
    assert!(!protector.has_route_permission(Some(Role::HeadReferee), "/admin/users/42"));
    assert!(protector.has_route_permission(Some(Role::AllianceReferee), "/referee/scoring/7"));
    assert!(!protector.has_route_permission(Some(Role::TeamLeader), "/referee"));
    assert!(protector.has_route_permission(Some(Role::TeamMember), "/team"));
    assert!(protector.has_route_permission(Some(Role::Common), "/profile"));
    assert!(!protector.has_route_permission(None, "/profile"));
    assert!(protector.has_route_permission(None, "/rankings"));

    let prefixes = protector.accessible_prefixes(Some(Role::Common));
    assert!(prefixes.contains(&"/profile"));
    assert!(!prefixes.contains(&"/admin"));
}

fn segment() -> impl Strategy<Value = String> {
    "[a-z0-9-]{1,8}"
}

proptest! {
    #[test]
    fn nested_paths_resolve_to_deepest_rule(tail in prop::collection::vec(segment(), 0..5)) {
        let protector = admin_protector();
        let path = format!("/admin/users/{}", tail.join("/"));

        prop_assert_eq!(
            protector.matching_rule(path.as_str()).map(|rule| rule.prefix()),
            Some("/admin/users")
        );
    }

    #[test]
    fn route_checks_are_total(
        path in "[/a-z?#=]{0,24}",
        role in prop::option::of(prop::sample::select(Role::all())),
    ) {
        let protector = admin_protector();
        let first = protector.check(path.as_str(), role);
        prop_assert_eq!(first, protector.check(path.as_str(), role));
    }
}
