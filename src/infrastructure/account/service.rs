//! Account identity service - registration, confirmation, credentials

use std::sync::Arc;

use tracing::info;

use crate::domain::DomainError;
use crate::domain::account::{Account, AccountId, validate_email, validate_password};
use crate::domain::participant::Participant;
use crate::domain::role::Role;
use crate::domain::store::RegistrationStore;

use super::password::PasswordHasher;

/// Request for creating a new account
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Service owning account identity state transitions
#[derive(Debug)]
pub struct AccountService<S: RegistrationStore> {
    store: Arc<S>,
    hasher: Arc<dyn PasswordHasher>,
}

impl<S: RegistrationStore> AccountService<S> {
    pub fn new(store: Arc<S>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { store, hasher }
    }

    /// Register a new account, creating the participant profile in the same
    /// atomic unit when the role carries one.
    pub async fn register(&self, request: NewAccount) -> Result<Account, DomainError> {
        validate_email(&request.email)
            .map_err(|e| DomainError::invalid_input(e.to_string()))?;
        validate_password(&request.password)
            .map_err(|e| DomainError::invalid_input(e.to_string()))?;

        if !request.role.is_registrable() {
            return Err(DomainError::invalid_input(
                "That role can't be registered directly.",
            ));
        }

        let password_hash = self.hasher.hash(&request.password)?;
        let account = Account::new(&request.email, password_hash, request.role);
        let participant = request
            .role
            .has_profile()
            .then(|| Participant::new(*account.id()));

        // The store rejects duplicate emails inside the same atomic unit, so
        // two racing registrations can't both slip past a pre-check.
        self.store
            .create_account(account.clone(), participant)
            .await?;

        info!(account_id = %account.id(), "Account registered");
        Ok(account)
    }

    /// Mark the account's email confirmed. Idempotent.
    pub async fn confirm_email(&self, id: &AccountId) -> Result<(), DomainError> {
        self.store.confirm_email(id).await
    }

    pub async fn get(&self, id: &AccountId) -> Result<Option<Account>, DomainError> {
        self.store.account(id).await
    }

    pub async fn get_by_email(&self, email: &str) -> Result<Option<Account>, DomainError> {
        self.store.account_by_email(email).await
    }

    /// Case-insensitive email lookup plus credential verification.
    ///
    /// `UnknownAccount` and `BadCredential` stay distinct for the boundary;
    /// the credential comparison itself happens inside the hasher on both
    /// paths so neither introduces a timing side channel of its own.
    pub async fn check_credential(
        &self,
        email: &str,
        candidate: &str,
    ) -> Result<Account, DomainError> {
        let account = self
            .store
            .account_by_email(email)
            .await?
            .ok_or(DomainError::UnknownAccount)?;

        if !self.hasher.verify(candidate, account.password_hash()) {
            return Err(DomainError::BadCredential);
        }

        Ok(account)
    }

    /// Replace the stored credential.
    ///
    /// The same-password check runs the new password through the credential
    /// verifier rather than comparing hash strings, per the login path. The
    /// caller must invalidate any live sessions after this returns.
    pub async fn update_password(
        &self,
        id: &AccountId,
        new_password: &str,
    ) -> Result<(), DomainError> {
        let account = self
            .store
            .account(id)
            .await?
            .ok_or(DomainError::UnknownAccount)?;

        validate_password(new_password)
            .map_err(|e| DomainError::invalid_input(e.to_string()))?;

        if self.hasher.verify(new_password, account.password_hash()) {
            return Err(DomainError::SamePassword);
        }

        let new_hash = self.hasher.hash(new_password)?;
        self.store.set_password_hash(id, new_hash).await?;

        info!(account_id = %id, "Password updated");
        Ok(())
    }
}
