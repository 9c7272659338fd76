//! Session authentication extractor

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::ApiError;
use crate::domain::account::AccountId;

/// Extractor that requires a live session
///
/// Reads the bearer token from the Authorization header and resolves it
/// against the session store.
#[derive(Debug, Clone, Copy)]
pub struct RequireAccount(pub AccountId);

impl FromRequestParts<AppState> for RequireAccount {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = extract_bearer_token(&parts.headers)?;

        debug!("Resolving session token");

        let account_id = state
            .sessions
            .current_account(&token)
            .await
            .map_err(ApiError::from)?
            .ok_or_else(|| ApiError::unauthorized("You need to be logged in to do that!"))?;

        Ok(RequireAccount(account_id))
    }
}

/// Extract the bearer token from the Authorization header
pub fn extract_bearer_token(headers: &axum::http::HeaderMap) -> Result<String, ApiError> {
    if let Some(auth_header) = headers.get(header::AUTHORIZATION) {
        let auth_str = auth_header
            .to_str()
            .map_err(|_| ApiError::invalid_input("Invalid Authorization header encoding"))?;

        if let Some(token) = auth_str.strip_prefix("Bearer ") {
            return Ok(token.trim().to_string());
        }
    }

    Err(ApiError::unauthorized(
        "Authentication required. Provide a session token via 'Authorization: Bearer <token>'",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderMap, StatusCode};

    #[test]
    fn test_extract_bearer_token() {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, "Bearer abc123".parse().unwrap());

        let result = extract_bearer_token(&headers);
        assert_eq!(result.unwrap(), "abc123");
    }

    #[test]
    fn test_missing_token() {
        let headers = HeaderMap::new();

        let err = extract_bearer_token(&headers).unwrap_err();
        assert_eq!(err.status, StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_invalid_auth_scheme() {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, "Basic dXNlcjpwYXNz".parse().unwrap());

        assert!(extract_bearer_token(&headers).is_err());
    }

    #[test]
    fn test_trimmed_token() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            "Bearer   token-with-spaces   ".parse().unwrap(),
        );

        assert_eq!(extract_bearer_token(&headers).unwrap(), "token-with-spaces");
    }
}
