//! Session endpoints - login and logout

use axum::{Router, extract::State, http::HeaderMap, routing::post};
use serde::{Deserialize, Serialize};

use crate::api::middleware::session_auth::extract_bearer_token;
use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::infrastructure::registration::IdentityContext;

pub fn create_sessions_router() -> Router<AppState> {
    Router::new()
        .route("/", post(login))
        .route("/logout", post(logout))
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    /// Where the client should land next, based on how far the account has
    /// progressed through registration
    pub url: String,
}

/// Log in with email and password
///
/// POST /sessions
///
/// Requires a confirmed email; unconfirmed accounts are refused with the
/// same status as other permission failures. Returns the session token and
/// the landing URL for the account's current stage.
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let (account, token) = state
        .workflow
        .login(&request.email, &request.password)
        .await?;

    let identity = state.workflow.identity(account.id()).await?;

    Ok(Json(LoginResponse {
        token,
        url: landing_url(&identity).to_string(),
    }))
}

/// Landing URL per registration stage: the lottery form until it is
/// submitted, the team page after.
fn landing_url(identity: &IdentityContext) -> &'static str {
    match &identity.participant {
        Some(participant) if participant.lottery_submitted() => "/teams",
        _ => "/hackers",
    }
}

#[derive(Debug, Serialize)]
pub struct LogoutResponse {
    pub message: String,
}

/// Drop the calling session
///
/// POST /sessions/logout
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<LogoutResponse>, ApiError> {
    let token = extract_bearer_token(&headers)?;
    state.workflow.logout(&token).await?;

    Ok(Json(LogoutResponse {
        message: "Logged out successfully".to_string(),
    }))
}
