use std::sync::Arc;

use arena_core::UserId;
use arena_domain::{AuditMetadata, Role, Team, TeamMember};

use crate::{PermissionEvaluator, PermissionRegistry};

use super::{RESTRICTED_TEAM_NAME, TeamProjection, TeamProjector};

fn projector() -> TeamProjector {
    let Ok(registry) = PermissionRegistry::tournament_defaults() else {
        panic!("default table should build");
    };

    TeamProjector::new(PermissionEvaluator::new(Arc::new(registry)))
}

fn roster_team(owner: UserId) -> Team {
    let members = [
        TeamMember::new(
            "Ada",
            Some("ada@example.com".to_owned()),
            Some("+1-555-0100".to_owned()),
        ),
        TeamMember::new(
            "Linus",
            Some("linus@example.com".to_owned()),
            Some("+1-555-0101".to_owned()),
        ),
    ]
    .into_iter()
    .collect::<Result<Vec<_>, _>>();
    let team = Team::new("Gearheads", owner, AuditMetadata::created_now(owner));

    let (Ok(members), Ok(team)) = (members, team) else {
        panic!("team fixture should be valid");
    };

    team.with_organization("Central High")
        .with_description("Rookie team")
        .with_members(members)
}

#[test]
fn administrator_sees_audit_metadata() {
    let owner = UserId::new();
    let projection = projector().project_team(
        &roster_team(owner),
        Some(Role::Administrator),
        Some(UserId::new()),
    );

    let TeamProjection::Full(details) = projection else {
        panic!("administrator should see full details");
    };
    assert!(details.audit.is_some());
    assert_eq!(details.member_count, 2);
    assert!(!details.is_user_team);
}

#[test]
fn referee_sees_everything_but_audit_metadata() {
    let projection = projector().project_team(
        &roster_team(UserId::new()),
        Some(Role::HeadReferee),
        Some(UserId::new()),
    );

    let TeamProjection::Full(details) = projection else {
        panic!("referee should see full details");
    };
    assert!(details.audit.is_none());
    assert_eq!(
        details.members[0].email.as_deref(),
        Some("ada@example.com")
    );
}

#[test]
fn owner_sees_contact_details() {
    let owner = UserId::new();
    let projection =
        projector().project_team(&roster_team(owner), Some(Role::TeamLeader), Some(owner));

    let TeamProjection::Full(details) = projection else {
        panic!("owner should see full details");
    };
    assert!(details.is_user_team);
    assert!(details.audit.is_none());
    assert!(details.members.iter().all(|member| member.email.is_some()));
    assert!(details.members.iter().all(|member| member.phone.is_some()));
}

#[test]
fn non_owner_leader_gets_public_summary() {
    let projection = projector().project_team(
        &roster_team(UserId::new()),
        Some(Role::TeamLeader),
        Some(UserId::new()),
    );

    let TeamProjection::Public(summary) = projection else {
        panic!("foreign leader should see the public summary");
    };
    assert_eq!(summary.member_count, 2);
    assert_eq!(summary.name, "Gearheads");
}

#[test]
fn public_projection_never_leaks_contact_data() {
    let team = roster_team(UserId::new());
    let projection = projector().project_team(&team, Some(Role::Common), None);

    let encoded = serde_json::to_string(&projection).unwrap_or_default();
    assert!(encoded.contains("\"access\":\"public\""));
    assert!(!encoded.contains("example.com"));
    assert!(!encoded.contains("+1-555"));
    assert!(!encoded.contains("Ada"));
}

#[test]
fn unauthenticated_single_view_returns_placeholder() {
    let team = roster_team(UserId::new());
    let projection = projector().project_team(&team, None, None);

    let TeamProjection::Denied(denied) = projection else {
        panic!("anonymous caller should get the placeholder");
    };
    assert_eq!(denied.name, RESTRICTED_TEAM_NAME);
    assert_eq!(denied.member_count, 0);

    let encoded = serde_json::to_string(&TeamProjection::Denied(denied)).unwrap_or_default();
    assert!(!encoded.contains(team.id().to_string().as_str()));
    assert!(!encoded.contains("Gearheads"));
}

#[test]
fn collection_drops_inaccessible_teams() {
    let teams = vec![roster_team(UserId::new()), roster_team(UserId::new())];
    let projector = projector();

    assert!(projector.project_teams(&teams, None, None).is_empty());
    assert_eq!(
        projector
            .project_teams(&teams, Some(Role::Common), None)
            .len(),
        2
    );
}

#[test]
fn collection_mixes_tiers_per_team() {
    let caller = UserId::new();
    let teams = vec![roster_team(caller), roster_team(UserId::new())];

    let projections = projector().project_teams(&teams, Some(Role::TeamMember), Some(caller));
    assert_eq!(projections.len(), 2);
    assert!(matches!(projections[0], TeamProjection::Full(_)));
    assert!(matches!(projections[1], TeamProjection::Public(_)));
}

#[test]
fn projection_leaves_source_untouched() {
    let team = roster_team(UserId::new());
    let before = team.clone();
    let _ = projector().project_team(&team, Some(Role::Common), None);
    assert_eq!(team, before);
}

#[test]
fn linked_member_who_is_not_owner_gets_public_summary() {
    let owner = UserId::new();
    let member = UserId::new();
    let Ok(linked) = TeamMember::new(
        "Grace",
        Some("grace@example.com".to_owned()),
        Some("+1-555-0102".to_owned()),
    ) else {
        panic!("member fixture should be valid");
    };
    let team = roster_team(owner).with_members(vec![linked.with_user_id(member)]);

    let projection = projector().project_team(&team, Some(Role::TeamMember), Some(member));

    let TeamProjection::Public(summary) = &projection else {
        panic!("non-owner member should fall through to the public summary");
    };
    assert!(summary.is_user_team);

    let encoded = serde_json::to_string(&projection).unwrap_or_default();
    assert!(!encoded.contains("example.com"));
    assert!(!encoded.contains("+1-555"));
}
