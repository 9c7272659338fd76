use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use super::state::AppState;
use super::{accounts, hackers, health, sessions, teams};

/// Create the full router with application state
pub fn create_router_with_state(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .nest("/accounts", accounts::create_accounts_router())
        .nest("/sessions", sessions::create_sessions_router())
        .nest("/hackers", hackers::create_hackers_router())
        .nest("/teams", teams::create_teams_router())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
