//! Account entity - the identity root

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::role::Role;

/// Account identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountId(Uuid);

impl AccountId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    pub fn parse(value: &str) -> Option<Self> {
        Uuid::parse_str(value).ok().map(Self)
    }
}

impl Default for AccountId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Account entity for authentication and email confirmation
///
/// Email uniqueness is case-insensitive; the store owns that invariant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    id: AccountId,
    /// Email address as originally entered
    email: String,
    /// Argon2 password hash - never exposed in serialization
    #[serde(skip_serializing)]
    password_hash: String,
    email_confirmed: bool,
    role: Role,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Account {
    pub fn new(email: impl Into<String>, password_hash: impl Into<String>, role: Role) -> Self {
        let now = Utc::now();

        Self {
            id: AccountId::new(),
            email: email.into(),
            password_hash: password_hash.into(),
            email_confirmed: false,
            role,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id(&self) -> &AccountId {
        &self.id
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Lowercased form used for the case-insensitive uniqueness index.
    pub fn email_lower(&self) -> String {
        self.email.to_lowercase()
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    pub fn is_confirmed(&self) -> bool {
        self.email_confirmed
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Mark the email confirmed. Idempotent.
    pub fn confirm_email(&mut self) {
        if !self.email_confirmed {
            self.email_confirmed = true;
            self.touch();
        }
    }

    pub fn set_password_hash(&mut self, password_hash: impl Into<String>) {
        self.password_hash = password_hash.into();
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_account() -> Account {
        Account::new("Hacker@Example.com", "hashed_password", Role::Hacker)
    }

    #[test]
    fn test_new_account_is_unconfirmed() {
        let account = create_test_account();

        assert!(!account.is_confirmed());
        assert_eq!(account.email(), "Hacker@Example.com");
        assert_eq!(account.role(), Role::Hacker);
    }

    #[test]
    fn test_email_lower() {
        let account = create_test_account();
        assert_eq!(account.email_lower(), "hacker@example.com");
    }

    #[test]
    fn test_confirm_email_is_idempotent() {
        let mut account = create_test_account();

        account.confirm_email();
        assert!(account.is_confirmed());

        let updated = account.updated_at();
        account.confirm_email();
        assert!(account.is_confirmed());
        assert_eq!(account.updated_at(), updated);
    }

    #[test]
    fn test_set_password_hash() {
        let mut account = create_test_account();

        account.set_password_hash("new_hash");
        assert_eq!(account.password_hash(), "new_hash");
    }

    #[test]
    fn test_serialization_excludes_password_hash() {
        let account = create_test_account();

        let json = serde_json::to_string(&account).unwrap();
        assert!(!json.contains("hashed_password"));
        assert!(!json.contains("password_hash"));
    }

    #[test]
    fn test_account_equality_for_result_assertions() {
        let account = create_test_account();
        let copy = account.clone();

        assert_eq!(account, copy);
        assert_eq!(
            Ok::<_, crate::domain::DomainError>(account),
            Ok(copy)
        );
    }

    #[test]
    fn test_account_id_parse_round_trip() {
        let id = AccountId::new();
        let parsed = AccountId::parse(&id.to_string()).unwrap();
        assert_eq!(id, parsed);

        assert!(AccountId::parse("not-a-uuid").is_none());
    }
}
