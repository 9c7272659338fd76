//! Team endpoints - creation, joining by invite code, roster

use axum::{
    Router,
    extract::{Path, State},
    http::StatusCode,
    routing::post,
};
use serde::Serialize;

use crate::api::middleware::RequireAccount;
use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::team::Team;
use crate::infrastructure::registration::TeamRoster;

pub fn create_teams_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_team).get(team_roster))
        .route("/leave", post(leave_team))
        .route("/{invite_code}", post(join_team))
}

#[derive(Debug, Serialize)]
pub struct TeamResponse {
    pub id: String,
    pub invite_code: String,
}

impl TeamResponse {
    fn from_team(team: &Team) -> Self {
        Self {
            id: team.id().to_string(),
            invite_code: team.invite_code().to_string(),
        }
    }
}

/// Create a team and become its first member
///
/// POST /teams
pub async fn create_team(
    State(state): State<AppState>,
    RequireAccount(account_id): RequireAccount,
) -> Result<(StatusCode, Json<TeamResponse>), ApiError> {
    let team = state.workflow.create_team(&account_id).await?;

    Ok((StatusCode::CREATED, Json(TeamResponse::from_team(&team))))
}

/// Join the team behind an invite code
///
/// POST /teams/{invite_code}
pub async fn join_team(
    State(state): State<AppState>,
    RequireAccount(account_id): RequireAccount,
    Path(invite_code): Path<String>,
) -> Result<Json<TeamResponse>, ApiError> {
    let team = state.workflow.join_team(&account_id, &invite_code).await?;

    Ok(Json(TeamResponse::from_team(&team)))
}

#[derive(Debug, Serialize)]
pub struct LeaveResponse {
    pub message: String,
}

/// Leave the current team
///
/// POST /teams/leave
pub async fn leave_team(
    State(state): State<AppState>,
    RequireAccount(account_id): RequireAccount,
) -> Result<Json<LeaveResponse>, ApiError> {
    state.workflow.leave_team(&account_id).await?;

    Ok(Json(LeaveResponse {
        message: "You have left your team.".to_string(),
    }))
}

/// The caller's team and its members
///
/// GET /teams
pub async fn team_roster(
    State(state): State<AppState>,
    RequireAccount(account_id): RequireAccount,
) -> Result<Json<TeamRoster>, ApiError> {
    let roster = state.workflow.team_roster(&account_id).await?;

    Ok(Json(roster))
}
