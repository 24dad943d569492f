use std::collections::BTreeSet;

use arena_core::AppError;
use arena_domain::{Permission, RankingAction, Role, TeamAction};

use super::{AllowedRoles, PermissionOptions, PermissionRegistry};

#[test]
fn define_rejects_empty_role_set() {
    let result = PermissionRegistry::builder().define(
        Permission::Rankings(RankingAction::View),
        Vec::<Role>::new(),
        PermissionOptions::new(),
    );

    assert!(matches!(result, Err(AppError::Validation(_))));
}

#[test]
fn define_rejects_duplicate_permission() {
    let result = PermissionRegistry::builder()
        .define(
            Permission::Rankings(RankingAction::View),
            [Role::Common],
            PermissionOptions::new(),
        )
        .and_then(|builder| {
            builder.define(
                Permission::Rankings(RankingAction::View),
                [Role::Administrator],
                PermissionOptions::new(),
            )
        });

    assert!(matches!(result, Err(AppError::Conflict(_))));
}

#[test]
fn lookup_returns_stored_definition() {
    let Ok(builder) = PermissionRegistry::builder().define(
        Permission::TeamManagement(TeamAction::ManageOwn),
        [Role::TeamLeader],
        PermissionOptions::new()
            .requires_ownership()
            .describe("Edit own team"),
    ) else {
        panic!("definition should be accepted");
    };
    let registry = builder.build();

    let definition = registry.lookup(Permission::TeamManagement(TeamAction::ManageOwn));
    assert!(definition.is_some_and(|definition| {
        definition.requires_ownership()
            && definition.description() == "Edit own team"
            && definition.allowed_roles().contains(Role::TeamLeader)
    }));
    assert!(
        registry
            .lookup(Permission::TeamManagement(TeamAction::EditAny))
            .is_none()
    );
}

#[test]
fn roles_for_undefined_permission_is_empty() {
    let registry = PermissionRegistry::builder().build();
    assert!(
        registry
            .roles_for(Permission::Rankings(RankingAction::Recalculate))
            .is_empty()
    );
    assert!(registry.is_empty());
}

#[test]
fn allowed_roles_ignore_duplicates_and_order() {
    let left = AllowedRoles::new([Role::TeamLeader, Role::Administrator, Role::TeamLeader]);
    let right = AllowedRoles::new([Role::Administrator, Role::TeamLeader]);
    assert_eq!(left.ok(), right.ok());
}

#[test]
fn tournament_defaults_define_every_permission() {
    let Ok(registry) = PermissionRegistry::tournament_defaults() else {
        panic!("default table should build");
    };

    assert!(registry.undefined_permissions().is_empty());
    assert_eq!(registry.len(), Permission::all().len());
}

#[test]
fn tournament_defaults_match_team_management_policy() {
    let Ok(registry) = PermissionRegistry::tournament_defaults() else {
        panic!("default table should build");
    };

    assert_eq!(
        registry.roles_for(Permission::TeamManagement(TeamAction::EditAny)),
        BTreeSet::from([Role::Administrator])
    );
    assert!(
        registry
            .lookup(Permission::TeamManagement(TeamAction::ManageOwn))
            .is_some_and(|definition| definition.requires_ownership())
    );
}

#[test]
fn permissions_for_role_lists_only_granted_entries() {
    let Ok(registry) = PermissionRegistry::tournament_defaults() else {
        panic!("default table should build");
    };

    let common = registry.permissions_for_role(Role::Common);
    assert!(common.contains(&Permission::Rankings(RankingAction::View)));
    assert!(!common.contains(&Permission::Rankings(RankingAction::Recalculate)));

    let administrator = registry.permissions_for_role(Role::Administrator);
    assert!(administrator.contains(&Permission::Rankings(RankingAction::Recalculate)));
}
