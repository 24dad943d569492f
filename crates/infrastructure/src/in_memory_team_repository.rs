use std::collections::HashMap;

use arena_application::TeamRepository;
use arena_core::{AppError, AppResult};
use arena_domain::{Team, TeamId};
use async_trait::async_trait;
use tokio::sync::RwLock;

/// In-memory team repository implementation.
#[derive(Debug, Default)]
pub struct InMemoryTeamRepository {
    teams: RwLock<HashMap<TeamId, Team>>,
}

impl InMemoryTeamRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a new team.
    pub async fn insert(&self, team: Team) -> AppResult<()> {
        let mut teams = self.teams.write().await;
        if teams.contains_key(&team.id()) {
            return Err(AppError::Conflict(format!(
                "team '{}' already exists",
                team.id()
            )));
        }

        teams.insert(team.id(), team);
        Ok(())
    }
}

#[async_trait]
impl TeamRepository for InMemoryTeamRepository {
    async fn list_teams(&self) -> AppResult<Vec<Team>> {
        let teams = self.teams.read().await;

        let mut values: Vec<Team> = teams.values().cloned().collect();
        values.sort_by(|left, right| left.name().as_str().cmp(right.name().as_str()));
        Ok(values)
    }

    async fn find_team(&self, team_id: TeamId) -> AppResult<Option<Team>> {
        Ok(self.teams.read().await.get(&team_id).cloned())
    }
}
