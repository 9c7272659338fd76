//! In-memory registration store
//!
//! All tables and secondary indexes live behind a single `RwLock`, so every
//! store method executes as one isolated unit: concurrent `join_team` calls
//! on the same team serialize on the write lock and the capacity check can
//! never be interleaved with another membership write.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::DomainError;
use crate::domain::account::{Account, AccountId};
use crate::domain::participant::{Application, Participant, ParticipantId};
use crate::domain::store::RegistrationStore;
use crate::domain::team::{MAX_TEAM_SIZE, Team, TeamId};

#[derive(Debug, Default)]
struct Tables {
    accounts: HashMap<Uuid, Account>,
    /// Lowercased email -> account id (case-insensitive uniqueness)
    email_index: HashMap<String, Uuid>,
    participants: HashMap<Uuid, Participant>,
    /// Account id -> participant id
    profile_index: HashMap<Uuid, Uuid>,
    /// Referral code -> participant id
    referral_index: HashMap<String, Uuid>,
    teams: HashMap<Uuid, Team>,
    /// Invite code -> team id
    invite_index: HashMap<String, Uuid>,
    /// Team id -> member participant ids (reverse index over team references)
    members: HashMap<Uuid, HashSet<Uuid>>,
}

impl Tables {
    /// Remove a member and drop the team once it is empty.
    fn remove_member(&mut self, team_id: &TeamId, participant_id: &ParticipantId) {
        let uuid = *team_id.as_uuid();

        if let Some(set) = self.members.get_mut(&uuid) {
            set.remove(participant_id.as_uuid());

            if set.is_empty() {
                self.members.remove(&uuid);
                if let Some(team) = self.teams.remove(&uuid) {
                    self.invite_index.remove(team.invite_code());
                }
            }
        }
    }
}

/// In-memory implementation of `RegistrationStore`
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RegistrationStore for MemoryStore {
    async fn create_account(
        &self,
        account: Account,
        participant: Option<Participant>,
    ) -> Result<(), DomainError> {
        let mut tables = self.tables.write().await;

        let email_key = account.email_lower();
        if tables.email_index.contains_key(&email_key) {
            return Err(DomainError::DuplicateEmail);
        }

        let account_id = *account.id().as_uuid();
        tables.email_index.insert(email_key, account_id);
        tables.accounts.insert(account_id, account);

        if let Some(participant) = participant {
            let participant_id = *participant.id().as_uuid();
            tables.profile_index.insert(account_id, participant_id);
            tables.participants.insert(participant_id, participant);
        }

        Ok(())
    }

    async fn account(&self, id: &AccountId) -> Result<Option<Account>, DomainError> {
        let tables = self.tables.read().await;
        Ok(tables.accounts.get(id.as_uuid()).cloned())
    }

    async fn account_by_email(&self, email: &str) -> Result<Option<Account>, DomainError> {
        let tables = self.tables.read().await;

        Ok(tables
            .email_index
            .get(&email.to_lowercase())
            .and_then(|id| tables.accounts.get(id))
            .cloned())
    }

    async fn confirm_email(&self, id: &AccountId) -> Result<(), DomainError> {
        let mut tables = self.tables.write().await;

        let account = tables
            .accounts
            .get_mut(id.as_uuid())
            .ok_or(DomainError::UnknownAccount)?;

        account.confirm_email();
        Ok(())
    }

    async fn set_password_hash(&self, id: &AccountId, hash: String) -> Result<(), DomainError> {
        let mut tables = self.tables.write().await;

        let account = tables
            .accounts
            .get_mut(id.as_uuid())
            .ok_or(DomainError::UnknownAccount)?;

        account.set_password_hash(hash);
        Ok(())
    }

    async fn participant_for_account(
        &self,
        account_id: &AccountId,
    ) -> Result<Option<Participant>, DomainError> {
        let tables = self.tables.read().await;

        Ok(tables
            .profile_index
            .get(account_id.as_uuid())
            .and_then(|id| tables.participants.get(id))
            .cloned())
    }

    async fn submit_application(
        &self,
        id: &ParticipantId,
        application: Application,
        referral_code: Option<String>,
    ) -> Result<(), DomainError> {
        let mut tables = self.tables.write().await;

        if !tables.participants.contains_key(id.as_uuid()) {
            return Err(DomainError::UnknownAccount);
        }

        if let Some(code) = &referral_code {
            if let Some(holder) = tables.referral_index.get(code) {
                if holder != id.as_uuid() {
                    return Err(DomainError::InviteCodeTaken);
                }
            }
        }

        let participant = tables
            .participants
            .get_mut(id.as_uuid())
            .ok_or(DomainError::UnknownAccount)?;

        let previous_code = participant.referral_code().map(str::to_string);
        participant.submit_application(application, referral_code.clone());

        if previous_code != referral_code {
            if let Some(old) = previous_code {
                tables.referral_index.remove(&old);
            }
            if let Some(code) = referral_code {
                tables.referral_index.insert(code, *id.as_uuid());
            }
        }

        Ok(())
    }

    async fn team(&self, id: &TeamId) -> Result<Option<Team>, DomainError> {
        let tables = self.tables.read().await;
        Ok(tables.teams.get(id.as_uuid()).cloned())
    }

    async fn create_team(
        &self,
        creator: &ParticipantId,
        invite_code: String,
    ) -> Result<Team, DomainError> {
        let mut tables = self.tables.write().await;

        let participant = tables
            .participants
            .get(creator.as_uuid())
            .ok_or(DomainError::UnknownAccount)?;

        if participant.is_on_team() {
            return Err(DomainError::AlreadyOnTeam);
        }

        if tables.invite_index.contains_key(&invite_code) {
            return Err(DomainError::InviteCodeTaken);
        }

        let team = Team::new(invite_code.clone());
        let team_id = *team.id();

        tables.invite_index.insert(invite_code, *team_id.as_uuid());
        tables.teams.insert(*team_id.as_uuid(), team.clone());
        tables
            .members
            .entry(*team_id.as_uuid())
            .or_default()
            .insert(*creator.as_uuid());

        if let Some(participant) = tables.participants.get_mut(creator.as_uuid()) {
            participant.set_team(team_id);
        }

        Ok(team)
    }

    async fn join_team(
        &self,
        joiner: &ParticipantId,
        invite_code: &str,
    ) -> Result<Team, DomainError> {
        let mut tables = self.tables.write().await;

        let team_uuid = *tables
            .invite_index
            .get(invite_code)
            .ok_or(DomainError::UnknownInviteCode)?;

        let team = tables
            .teams
            .get(&team_uuid)
            .cloned()
            .ok_or(DomainError::UnknownInviteCode)?;

        let previous_team = tables
            .participants
            .get(joiner.as_uuid())
            .ok_or(DomainError::UnknownAccount)?
            .team_id()
            .copied();

        // Re-joining the current team is a no-op success.
        if previous_team == Some(*team.id()) {
            return Ok(team);
        }

        let member_count = tables
            .members
            .get(&team_uuid)
            .map(HashSet::len)
            .unwrap_or(0);

        if member_count >= MAX_TEAM_SIZE {
            return Err(DomainError::TeamFull);
        }

        // Joining while on another team moves the participant.
        if let Some(previous) = previous_team {
            tables.remove_member(&previous, joiner);
        }

        tables
            .members
            .entry(team_uuid)
            .or_default()
            .insert(*joiner.as_uuid());

        if let Some(participant) = tables.participants.get_mut(joiner.as_uuid()) {
            participant.set_team(*team.id());
        }

        Ok(team)
    }

    async fn leave_team(&self, id: &ParticipantId) -> Result<(), DomainError> {
        let mut tables = self.tables.write().await;

        let Some(participant) = tables.participants.get(id.as_uuid()) else {
            return Err(DomainError::UnknownAccount);
        };

        let Some(team_id) = participant.team_id().copied() else {
            return Ok(());
        };

        tables.remove_member(&team_id, id);

        if let Some(participant) = tables.participants.get_mut(id.as_uuid()) {
            participant.clear_team();
        }

        Ok(())
    }

    async fn team_members(&self, id: &TeamId) -> Result<Vec<Participant>, DomainError> {
        let tables = self.tables.read().await;

        let members = tables
            .members
            .get(id.as_uuid())
            .map(|set| {
                set.iter()
                    .filter_map(|pid| tables.participants.get(pid))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();

        Ok(members)
    }
}
