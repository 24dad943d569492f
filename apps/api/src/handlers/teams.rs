use arena_core::AppError;
use arena_domain::TeamId;
use axum::Json;
use axum::extract::{Extension, Path, State};
use uuid::Uuid;

use crate::dto::{TeamEditableResponse, TeamResponse};
use crate::error::ApiResult;
use crate::middleware::CurrentPrincipal;
use crate::state::AppState;

pub async fn list_teams_handler(
    State(state): State<AppState>,
    Extension(CurrentPrincipal(principal)): Extension<CurrentPrincipal>,
) -> ApiResult<Json<Vec<TeamResponse>>> {
    let teams = state
        .team_service
        .list_visible_teams(principal.as_ref())
        .await?
        .into_iter()
        .map(TeamResponse::from)
        .collect();

    Ok(Json(teams))
}

pub async fn get_team_handler(
    State(state): State<AppState>,
    Extension(CurrentPrincipal(principal)): Extension<CurrentPrincipal>,
    Path(team_id): Path<String>,
) -> ApiResult<Json<TeamResponse>> {
    let team = state
        .team_service
        .get_team(principal.as_ref(), parse_team_id(team_id.as_str())?)
        .await?;

    Ok(Json(TeamResponse::from(team)))
}

pub async fn team_editable_handler(
    State(state): State<AppState>,
    Extension(CurrentPrincipal(principal)): Extension<CurrentPrincipal>,
    Path(team_id): Path<String>,
) -> ApiResult<Json<TeamEditableResponse>> {
    let team_id = parse_team_id(team_id.as_str())?;
    let can_edit = state
        .team_service
        .can_edit_team(principal.as_ref(), team_id)
        .await?;

    Ok(Json(TeamEditableResponse {
        team_id: team_id.to_string(),
        can_edit,
    }))
}

fn parse_team_id(value: &str) -> Result<TeamId, AppError> {
    Uuid::parse_str(value.trim())
        .map(TeamId::from_uuid)
        .map_err(|error| AppError::Validation(format!("invalid team id '{value}': {error}")))
}
