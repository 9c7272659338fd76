//! Session store - an opaque capability from the workflow's point of view

use std::collections::HashMap;
use std::fmt::Debug;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::DomainError;
use crate::domain::account::AccountId;

/// Session capability consumed by the workflow and the HTTP boundary
#[async_trait]
pub trait SessionStore: Send + Sync + Debug {
    /// Establish a session and return its bearer token.
    async fn login(&self, account_id: AccountId) -> Result<String, DomainError>;

    /// Drop a single session. Unknown tokens are ignored.
    async fn logout(&self, token: &str) -> Result<(), DomainError>;

    async fn current_account(&self, token: &str) -> Result<Option<AccountId>, DomainError>;

    /// Drop every session for an account, used after credential changes.
    async fn invalidate_account(&self, account_id: &AccountId) -> Result<(), DomainError>;
}

/// In-memory session store
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    sessions: RwLock<HashMap<String, AccountId>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn login(&self, account_id: AccountId) -> Result<String, DomainError> {
        let token = Uuid::new_v4().simple().to_string();

        self.sessions
            .write()
            .await
            .insert(token.clone(), account_id);

        Ok(token)
    }

    async fn logout(&self, token: &str) -> Result<(), DomainError> {
        self.sessions.write().await.remove(token);
        Ok(())
    }

    async fn current_account(&self, token: &str) -> Result<Option<AccountId>, DomainError> {
        Ok(self.sessions.read().await.get(token).copied())
    }

    async fn invalidate_account(&self, account_id: &AccountId) -> Result<(), DomainError> {
        self.sessions
            .write()
            .await
            .retain(|_, id| id != account_id);
        Ok(())
    }
}
