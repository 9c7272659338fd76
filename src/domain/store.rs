//! Registration store trait
//!
//! The store is the single source of truth; no component caches account or
//! team state across requests. Every trait method is one atomic, isolated
//! unit - in particular `create_account` (account + profile all-or-nothing)
//! and `join_team` (capacity check + membership write serialize against
//! other joins on the same team). A SQL-backed implementation would wrap
//! each method in a serializable transaction or row lock.

use async_trait::async_trait;

use crate::domain::DomainError;
use crate::domain::account::{Account, AccountId};
use crate::domain::participant::{Application, Participant, ParticipantId};
use crate::domain::team::{Team, TeamId};

#[async_trait]
pub trait RegistrationStore: Send + Sync + std::fmt::Debug {
    /// Create an account and, when the role requires one, its participant
    /// profile as a single unit. Fails with `DuplicateEmail` when another
    /// account holds the same email, compared case-insensitively.
    async fn create_account(
        &self,
        account: Account,
        participant: Option<Participant>,
    ) -> Result<(), DomainError>;

    async fn account(&self, id: &AccountId) -> Result<Option<Account>, DomainError>;

    /// Case-insensitive email lookup.
    async fn account_by_email(&self, email: &str) -> Result<Option<Account>, DomainError>;

    /// Set the confirmation flag. Idempotent; fails with `UnknownAccount`
    /// only when the account does not exist.
    async fn confirm_email(&self, id: &AccountId) -> Result<(), DomainError>;

    async fn set_password_hash(&self, id: &AccountId, hash: String) -> Result<(), DomainError>;

    async fn participant_for_account(
        &self,
        account_id: &AccountId,
    ) -> Result<Option<Participant>, DomainError>;

    /// Record a lottery submission. The referral code, when present, must not
    /// belong to another participant (`InviteCodeTaken`). Sets the one-way
    /// lottery flag.
    async fn submit_application(
        &self,
        id: &ParticipantId,
        application: Application,
        referral_code: Option<String>,
    ) -> Result<(), DomainError>;

    async fn team(&self, id: &TeamId) -> Result<Option<Team>, DomainError>;

    /// Create a team with the given invite code and make `creator` its first
    /// member, atomically. Fails with `AlreadyOnTeam` when the creator has a
    /// team, or `InviteCodeTaken` when the code collides (callers retry with
    /// a fresh code).
    async fn create_team(
        &self,
        creator: &ParticipantId,
        invite_code: String,
    ) -> Result<Team, DomainError>;

    /// Resolve the invite code, check capacity and write the membership as
    /// one isolated operation. Concurrent joins on the same team must never
    /// push the member count past `MAX_TEAM_SIZE`. A joiner already on a
    /// different team is moved.
    async fn join_team(
        &self,
        joiner: &ParticipantId,
        invite_code: &str,
    ) -> Result<Team, DomainError>;

    /// Clear the participant's team reference. Idempotent.
    async fn leave_team(&self, id: &ParticipantId) -> Result<(), DomainError>;

    /// Participants whose team reference equals `id`.
    async fn team_members(&self, id: &TeamId) -> Result<Vec<Participant>, DomainError>;
}
