use arena_core::{AppError, AppResult, UserId};
use arena_domain::{AuditMetadata, Principal, Role, Team, TeamId, TeamMember};
use arena_infrastructure::{InMemorySessionRepository, InMemoryTeamRepository};
use tracing::info;
use uuid::Uuid;

const DEV_SEED_ADMIN_USER_ID: &str = "5d0c8f7e-2a41-4c1b-9b0e-3f6a1c2d4e01";
const DEV_SEED_HEAD_REFEREE_USER_ID: &str = "5d0c8f7e-2a41-4c1b-9b0e-3f6a1c2d4e02";
const DEV_SEED_ALLIANCE_REFEREE_USER_ID: &str = "5d0c8f7e-2a41-4c1b-9b0e-3f6a1c2d4e03";
const DEV_SEED_LEADER_USER_ID: &str = "5d0c8f7e-2a41-4c1b-9b0e-3f6a1c2d4e04";
const DEV_SEED_MEMBER_USER_ID: &str = "5d0c8f7e-2a41-4c1b-9b0e-3f6a1c2d4e05";
const DEV_SEED_SPECTATOR_USER_ID: &str = "5d0c8f7e-2a41-4c1b-9b0e-3f6a1c2d4e06";
const DEV_SEED_RIVAL_LEADER_USER_ID: &str = "5d0c8f7e-2a41-4c1b-9b0e-3f6a1c2d4e07";

const DEV_SEED_HOME_TEAM_ID: &str = "0b7e6c1a-91d3-4f2e-8a55-6c0f4b2e7a10";
const DEV_SEED_RIVAL_TEAM_ID: &str = "0b7e6c1a-91d3-4f2e-8a55-6c0f4b2e7a11";

/// Seeds two demo teams and one session per role, logging each session token.
pub async fn run(
    teams: &InMemoryTeamRepository,
    sessions: &InMemorySessionRepository,
) -> AppResult<()> {
    let admin = user_id(DEV_SEED_ADMIN_USER_ID, "DEV_SEED_ADMIN_USER_ID")?;
    let leader = user_id(DEV_SEED_LEADER_USER_ID, "DEV_SEED_LEADER_USER_ID")?;
    let member = user_id(DEV_SEED_MEMBER_USER_ID, "DEV_SEED_MEMBER_USER_ID")?;
    let rival_leader = user_id(DEV_SEED_RIVAL_LEADER_USER_ID, "DEV_SEED_RIVAL_LEADER_USER_ID")?;

    let home_team = Team::new("Gearheads", leader, AuditMetadata::created_now(admin))?
        .with_id(team_id(DEV_SEED_HOME_TEAM_ID, "DEV_SEED_HOME_TEAM_ID")?)
        .with_organization("Central High Robotics Club")
        .with_description("Autonomous line-follower specialists")
        .with_members(vec![
            TeamMember::new(
                "Dana Leader",
                Some("dana@gearheads.local".to_owned()),
                Some("+1-555-0140".to_owned()),
            )?
            .with_user_id(leader),
            TeamMember::new("Sam Member", Some("sam@gearheads.local".to_owned()), None)?
                .with_user_id(member),
        ]);

    let rival_team = Team::new("Circuit Breakers", rival_leader, AuditMetadata::created_now(admin))?
        .with_id(team_id(DEV_SEED_RIVAL_TEAM_ID, "DEV_SEED_RIVAL_TEAM_ID")?)
        .with_organization("Northside Makerspace")
        .with_members(vec![
            TeamMember::new(
                "Riley Rival",
                Some("riley@breakers.local".to_owned()),
                Some("+1-555-0199".to_owned()),
            )?
            .with_user_id(rival_leader),
        ]);

    for team in [home_team, rival_team] {
        let name = team.name().as_str().to_owned();
        match teams.insert(team).await {
            Ok(()) => info!(team = %name, "seeded demo team"),
            Err(AppError::Conflict(_)) => info!(team = %name, "demo team already present"),
            Err(error) => return Err(error),
        }
    }

    let principals = [
        Principal::new(admin, "Avery Admin", Role::Administrator),
        Principal::new(
            user_id(DEV_SEED_HEAD_REFEREE_USER_ID, "DEV_SEED_HEAD_REFEREE_USER_ID")?,
            "Harper Head Referee",
            Role::HeadReferee,
        ),
        Principal::new(
            user_id(
                DEV_SEED_ALLIANCE_REFEREE_USER_ID,
                "DEV_SEED_ALLIANCE_REFEREE_USER_ID",
            )?,
            "Alex Alliance Referee",
            Role::AllianceReferee,
        ),
        Principal::new(leader, "Dana Leader", Role::TeamLeader),
        Principal::new(member, "Sam Member", Role::TeamMember),
        Principal::new(
            user_id(DEV_SEED_SPECTATOR_USER_ID, "DEV_SEED_SPECTATOR_USER_ID")?,
            "Casey Spectator",
            Role::Common,
        ),
        Principal::new(rival_leader, "Riley Rival", Role::TeamLeader),
    ];

    for principal in principals {
        let role = principal.role();
        let display_name = principal.display_name().to_owned();
        let token = sessions.issue(principal).await?;
        info!(role = role.as_str(), user = %display_name, %token, "issued dev session");
    }

    Ok(())
}

fn user_id(value: &str, name: &str) -> AppResult<UserId> {
    parse_uuid_const(value, name).map(UserId::from_uuid)
}

fn team_id(value: &str, name: &str) -> AppResult<TeamId> {
    parse_uuid_const(value, name).map(TeamId::from_uuid)
}

fn parse_uuid_const(value: &str, name: &str) -> AppResult<Uuid> {
    Uuid::parse_str(value)
        .map_err(|error| AppError::Internal(format!("invalid {name} constant: {error}")))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use arena_application::{
        PermissionEvaluator, PermissionRegistry, TeamProjection, TeamRepository, TeamService,
    };
    use arena_domain::{Principal, Role};
    use arena_infrastructure::{InMemorySessionRepository, InMemoryTeamRepository};

    use super::{DEV_SEED_LEADER_USER_ID, DEV_SEED_MEMBER_USER_ID, run, user_id};

    #[tokio::test]
    async fn seed_is_idempotent_for_teams() {
        let teams = InMemoryTeamRepository::new();
        let sessions = InMemorySessionRepository::new();

        assert!(run(&teams, &sessions).await.is_ok());
        assert!(run(&teams, &sessions).await.is_ok());
        assert_eq!(teams.list_teams().await.unwrap_or_default().len(), 2);
    }

    #[tokio::test]
    async fn seeded_owner_sees_full_team_and_member_sees_summary() {
        let teams = Arc::new(InMemoryTeamRepository::new());
        let sessions = InMemorySessionRepository::new();
        assert!(run(&teams, &sessions).await.is_ok());

        let Ok(registry) = PermissionRegistry::tournament_defaults() else {
            panic!("default table should build");
        };
        let service = TeamService::new(teams, PermissionEvaluator::new(Arc::new(registry)));
        let (Ok(leader), Ok(member)) = (
            user_id(DEV_SEED_LEADER_USER_ID, "leader"),
            user_id(DEV_SEED_MEMBER_USER_ID, "member"),
        ) else {
            panic!("seed constants should parse");
        };

        let leader = Principal::new(leader, "Dana Leader", Role::TeamLeader);
        let projections = service
            .list_visible_teams(Some(&leader))
            .await
            .unwrap_or_default();
        let full = projections
            .iter()
            .filter(|projection| matches!(projection, TeamProjection::Full(_)))
            .count();
        assert_eq!(projections.len(), 2);
        assert_eq!(full, 1);

        let member = Principal::new(member, "Sam Member", Role::TeamMember);
        let projections = service
            .list_visible_teams(Some(&member))
            .await
            .unwrap_or_default();
        assert_eq!(projections.len(), 2);
        assert!(
            projections
                .iter()
                .all(|projection| matches!(projection, TeamProjection::Public(_)))
        );
        assert!(projections.iter().any(|projection| matches!(
            projection,
            TeamProjection::Public(summary) if summary.is_user_team
        )));
    }
}
