//! Participant entity - the hacker-role profile owned 1:1 by an account

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::account::AccountId;
use crate::domain::team::TeamId;

/// Referral codes entered on the lottery form are truncated to this length.
pub const REFERRAL_CODE_LEN: usize = 8;

/// Participant identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParticipantId(Uuid);

impl ParticipantId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ParticipantId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lottery application payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
    pub name: String,
    pub gender: String,
    pub school_id: String,
    pub school: String,
    pub adult: bool,
    pub location: String,
    pub interests: String,
}

/// Hacker profile attached to an account
///
/// Team membership is a mutable reference held here; teams carry no member
/// list of their own.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Participant {
    id: ParticipantId,
    account_id: AccountId,
    lottery_submitted: bool,
    application: Option<Application>,
    /// Short code this participant was referred with, unique across participants
    referral_code: Option<String>,
    team_id: Option<TeamId>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Participant {
    pub fn new(account_id: AccountId) -> Self {
        let now = Utc::now();

        Self {
            id: ParticipantId::new(),
            account_id,
            lottery_submitted: false,
            application: None,
            referral_code: None,
            team_id: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id(&self) -> &ParticipantId {
        &self.id
    }

    pub fn account_id(&self) -> &AccountId {
        &self.account_id
    }

    pub fn lottery_submitted(&self) -> bool {
        self.lottery_submitted
    }

    pub fn application(&self) -> Option<&Application> {
        self.application.as_ref()
    }

    pub fn referral_code(&self) -> Option<&str> {
        self.referral_code.as_deref()
    }

    pub fn team_id(&self) -> Option<&TeamId> {
        self.team_id.as_ref()
    }

    pub fn is_on_team(&self) -> bool {
        self.team_id.is_some()
    }

    /// Record a validated application submission.
    ///
    /// Resubmission updates the payload; the lottery flag is one-way and
    /// never cleared.
    pub fn submit_application(&mut self, application: Application, referral_code: Option<String>) {
        self.application = Some(application);
        self.referral_code = referral_code;
        self.lottery_submitted = true;
        self.touch();
    }

    pub fn set_team(&mut self, team_id: TeamId) {
        self.team_id = Some(team_id);
        self.touch();
    }

    /// Clear the team reference. Idempotent.
    pub fn clear_team(&mut self) {
        if self.team_id.take().is_some() {
            self.touch();
        }
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
