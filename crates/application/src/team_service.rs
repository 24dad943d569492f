use std::sync::Arc;

use arena_core::{AppError, AppResult};
use arena_domain::{Principal, Team, TeamId};
use async_trait::async_trait;

use crate::{PermissionEvaluator, TeamProjection, TeamProjector};


/// Repository port for team records.
#[async_trait]
pub trait TeamRepository: Send + Sync {
    /// Lists every registered team.
    async fn list_teams(&self) -> AppResult<Vec<Team>>;

    /// Finds one team by identifier.
    async fn find_team(&self, team_id: TeamId) -> AppResult<Option<Team>>;
}

/// Application service serving role-filtered team views.
#[derive(Clone)]
pub struct TeamService {
    repository: Arc<dyn TeamRepository>,
    evaluator: PermissionEvaluator,
    projector: TeamProjector,
}

impl TeamService {
    /// Creates a new team service.
    #[must_use]
    pub fn new(repository: Arc<dyn TeamRepository>, evaluator: PermissionEvaluator) -> Self {
        Self {
            repository,
            projector: TeamProjector::new(evaluator.clone()),
            evaluator,
        }
    }

    /// Lists the teams visible to `principal`.
    pub async fn list_visible_teams(
        &self,
        principal: Option<&Principal>,
    ) -> AppResult<Vec<TeamProjection>> {
        let teams = self.repository.list_teams().await?;
        Ok(self.projector.project_teams(
            teams.as_slice(),
            principal.map(Principal::role),
            principal.map(Principal::user_id),
        ))
    }

    /// Returns one team as `principal` may see it.
    pub async fn get_team(
        &self,
        principal: Option<&Principal>,
        team_id: TeamId,
    ) -> AppResult<TeamProjection> {
        let team = self.load_team(team_id).await?;
        Ok(self.projector.project_team(
            &team,
            principal.map(Principal::role),
            principal.map(Principal::user_id),
        ))
    }

    /// Returns whether `principal` may edit the team.
    pub async fn can_edit_team(
        &self,
        principal: Option<&Principal>,
        team_id: TeamId,
    ) -> AppResult<bool> {
        let team = self.load_team(team_id).await?;
        Ok(self.evaluator.can_edit_team(
            principal.map(Principal::role),
            principal.map(Principal::user_id),
            &team,
        ))
    }

    async fn load_team(&self, team_id: TeamId) -> AppResult<Team> {
        self.repository
            .find_team(team_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("team '{team_id}' does not exist")))
    }
}
