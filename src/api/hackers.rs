//! Hacker endpoints - the lottery application form

use axum::{Router, extract::State, routing::post};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::api::middleware::RequireAccount;
use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::participant::Application;

pub fn create_hackers_router() -> Router<AppState> {
    Router::new().route("/", post(submit_application))
}

#[derive(Debug, Deserialize, Validate)]
pub struct ApplicationRequest {
    #[validate(length(min = 1, max = 256, message = "Please tell us your name!"))]
    pub name: String,
    #[validate(length(min = 1, message = "Please fill out the whole form!"))]
    pub gender: String,
    #[validate(length(min = 1, message = "Please fill out the whole form!"))]
    pub school_id: String,
    #[validate(length(min = 1, message = "Please fill out the whole form!"))]
    pub school: String,
    pub adult: bool,
    #[validate(length(min = 1, message = "Please fill out the whole form!"))]
    pub location: String,
    #[serde(default)]
    pub interests: String,
    /// Optional referral code, trimmed and truncated server-side
    #[serde(default)]
    pub referral: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ApplicationResponse {
    pub message: String,
}

/// Submit or update the lottery application
///
/// POST /hackers
pub async fn submit_application(
    State(state): State<AppState>,
    RequireAccount(account_id): RequireAccount,
    Json(request): Json<ApplicationRequest>,
) -> Result<Json<ApplicationResponse>, ApiError> {
    request
        .validate()
        .map_err(|e| ApiError::invalid_input(e.to_string()))?;

    let application = Application {
        name: request.name,
        gender: request.gender,
        school_id: request.school_id,
        school: request.school,
        adult: request.adult,
        location: request.location,
        interests: request.interests,
    };

    state
        .workflow
        .submit_application(&account_id, application, request.referral)
        .await?;

    Ok(Json(ApplicationResponse {
        message: "You're in the lottery. Good luck!".to_string(),
    }))
}
