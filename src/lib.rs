//! Hackathon registration service
//!
//! Account registration with email confirmation, signed password-recovery
//! tokens, a lottery application form and invite-code team formation with a
//! hard capacity limit.

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use chrono::Duration;

use api::state::AppState;
use infrastructure::account::Argon2Hasher;
use infrastructure::mail::LoggingMailer;
use infrastructure::registration::RegistrationWorkflow;
use infrastructure::session::MemorySessionStore;
use infrastructure::store::MemoryStore;
use infrastructure::token::TokenCodec;

/// Wire up the application state from configuration
pub fn create_app_state(config: &AppConfig) -> AppState {
    let sessions = Arc::new(MemorySessionStore::new());

    let workflow = RegistrationWorkflow::new(
        Arc::new(MemoryStore::new()),
        Arc::new(Argon2Hasher::new()),
        TokenCodec::new(&config.security.secret_key),
        Arc::clone(&sessions) as Arc<dyn infrastructure::session::SessionStore>,
        Arc::new(LoggingMailer::new()),
    )
    .with_token_max_ages(
        Duration::seconds(config.security.confirm_token_max_age_secs),
        Duration::seconds(config.security.reset_token_max_age_secs),
    );

    AppState::new(Arc::new(workflow), sessions)
}
