//! Account endpoints - registration, confirmation, password recovery

use axum::{
    Router,
    extract::{Path, Query, State},
    routing::{get, post, put},
};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::api::middleware::RequireAccount;
use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::account::{Account, AccountId};
use crate::infrastructure::registration::ChangePassword;

pub fn create_accounts_router() -> Router<AppState> {
    Router::new()
        .route("/", post(register))
        .route("/{id}", put(update_password))
        .route("/confirm", get(confirm))
        .route("/resend", post(resend_confirmation))
        .route("/forgot", post(forgot_password))
        .route("/reset", post(reset_password))
}

#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email(message = "That doesn't look like an email address."))]
    pub email: String,
    #[validate(length(
        min = 8,
        max = 128,
        message = "Passwords must be between 8 and 128 characters."
    ))]
    pub password: String,
}

/// Account view safe to expose
#[derive(Debug, Serialize)]
pub struct AccountResponse {
    pub id: String,
    pub email: String,
    pub email_confirmed: bool,
    pub created_at: String,
}

impl AccountResponse {
    fn from_account(account: &Account) -> Self {
        Self {
            id: account.id().to_string(),
            email: account.email().to_string(),
            email_confirmed: account.is_confirmed(),
            created_at: account.created_at().to_rfc3339(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Register a hacker account
///
/// POST /accounts
///
/// Returns 200 with a message on success; the account itself is retrieved
/// later through the confirmation flow.
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    request
        .validate()
        .map_err(|e| ApiError::invalid_input(e.to_string()))?;

    state
        .workflow
        .register(&request.email, &request.password)
        .await?;

    Ok(Json(MessageResponse::new(
        "Your account has been created! Check your email to confirm it.",
    )))
}

#[derive(Debug, Deserialize)]
pub struct ConfirmParams {
    /// Signed confirmation token from the welcome email
    pub confirm: String,
}

/// Redeem an email confirmation token
///
/// GET /accounts/confirm?confirm=<token>
pub async fn confirm(
    State(state): State<AppState>,
    Query(params): Query<ConfirmParams>,
) -> Result<Json<AccountResponse>, ApiError> {
    let account = state.workflow.confirm(&params.confirm).await?;

    Ok(Json(AccountResponse::from_account(&account)))
}

#[derive(Debug, Deserialize, Validate)]
pub struct EmailRequest {
    #[validate(email(message = "That doesn't look like an email address."))]
    pub email: String,
}

/// Re-send the confirmation email
///
/// POST /accounts/resend
pub async fn resend_confirmation(
    State(state): State<AppState>,
    Json(request): Json<EmailRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    request
        .validate()
        .map_err(|e| ApiError::invalid_input(e.to_string()))?;

    state.workflow.resend_confirmation(&request.email).await?;

    Ok(Json(MessageResponse::new(
        "If your account needs confirming, an email is on its way!",
    )))
}

/// Start password recovery
///
/// POST /accounts/forgot
pub async fn forgot_password(
    State(state): State<AppState>,
    Json(request): Json<EmailRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    request
        .validate()
        .map_err(|e| ApiError::invalid_input(e.to_string()))?;

    state.workflow.forgot_password(&request.email).await?;

    Ok(Json(MessageResponse::new(
        "Check your email for a recovery link!",
    )))
}

#[derive(Debug, Deserialize)]
pub struct ResetParams {
    pub token: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct ResetRequest {
    #[validate(length(
        min = 8,
        max = 128,
        message = "Passwords must be between 8 and 128 characters."
    ))]
    pub password: String,
}

/// Redeem a recovery token and set a new password
///
/// POST /accounts/reset?token=<token>
pub async fn reset_password(
    State(state): State<AppState>,
    Query(params): Query<ResetParams>,
    Json(request): Json<ResetRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    request
        .validate()
        .map_err(|e| ApiError::invalid_input(e.to_string()))?;

    state
        .workflow
        .reset_password(&params.token, &request.password)
        .await?;

    Ok(Json(MessageResponse::new("Your password has been reset!")))
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdatePasswordRequest {
    #[validate(email(message = "That doesn't look like an email address."))]
    pub email: String,
    pub old_password: String,
    #[validate(length(
        min = 8,
        max = 128,
        message = "Passwords must be between 8 and 128 characters."
    ))]
    pub new_password: String,
}

/// Change the caller's password
///
/// PUT /accounts/{id}
///
/// Drops every session for the account, including the calling one.
pub async fn update_password(
    State(state): State<AppState>,
    RequireAccount(actor): RequireAccount,
    Path(id): Path<String>,
    Json(request): Json<UpdatePasswordRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    request
        .validate()
        .map_err(|e| ApiError::invalid_input(e.to_string()))?;

    let target = AccountId::parse(&id)
        .ok_or_else(|| ApiError::invalid_input("That doesn't look like an account id."))?;

    state
        .workflow
        .update_password(
            &actor,
            &target,
            ChangePassword {
                email: request.email,
                old_password: request.old_password,
                new_password: request.new_password,
            },
        )
        .await?;

    Ok(Json(MessageResponse::new(
        "Your password has been updated. Please log in again.",
    )))
}
