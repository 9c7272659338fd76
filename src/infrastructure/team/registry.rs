//! Team registry - creation, invite codes, capacity-enforced membership

use std::sync::Arc;

use rand::Rng;
use tracing::info;

use crate::domain::DomainError;
use crate::domain::participant::{Participant, ParticipantId};
use crate::domain::store::RegistrationStore;
use crate::domain::team::{INVITE_CODE_LEN, Team, TeamId};

const INVITE_CODE_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Collision retries before giving up. With a 36^8 code space this bound is
/// never reached in practice.
const INVITE_CODE_ATTEMPTS: usize = 16;

/// Service owning team lifecycle and capacity invariants
///
/// Eligibility (confirmed email, lottery submitted) is the caller's problem;
/// this component enforces only existence and capacity.
#[derive(Debug)]
pub struct TeamRegistry<S: RegistrationStore> {
    store: Arc<S>,
}

impl<S: RegistrationStore> TeamRegistry<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Create a team with the participant as its first member.
    ///
    /// Invite codes are random; a collision with an existing team's code is
    /// retried with a fresh code rather than surfaced.
    pub async fn create_team(&self, creator: &ParticipantId) -> Result<Team, DomainError> {
        for _ in 0..INVITE_CODE_ATTEMPTS {
            let code = generate_invite_code();

            match self.store.create_team(creator, code).await {
                Err(DomainError::InviteCodeTaken) => continue,
                Ok(team) => {
                    info!(team_id = %team.id(), "Team created");
                    return Ok(team);
                }
                Err(other) => return Err(other),
            }
        }

        Err(DomainError::infrastructure(
            "could not generate a unique invite code",
        ))
    }

    /// Join the team behind `invite_code`. Capacity is checked and the
    /// membership written inside one store transaction.
    pub async fn join_team(
        &self,
        joiner: &ParticipantId,
        invite_code: &str,
    ) -> Result<Team, DomainError> {
        let team = self.store.join_team(joiner, invite_code.trim()).await?;

        info!(team_id = %team.id(), "Participant joined team");
        Ok(team)
    }

    /// Leave the current team, if any. Idempotent.
    pub async fn leave_team(&self, participant: &ParticipantId) -> Result<(), DomainError> {
        self.store.leave_team(participant).await
    }

    pub async fn get(&self, id: &TeamId) -> Result<Option<Team>, DomainError> {
        self.store.team(id).await
    }

    /// Members derived from participants referencing the team.
    pub async fn members(&self, id: &TeamId) -> Result<Vec<Participant>, DomainError> {
        self.store.team_members(id).await
    }
}

fn generate_invite_code() -> String {
    let mut rng = rand::thread_rng();

    (0..INVITE_CODE_LEN)
        .map(|_| {
            let idx = rng.gen_range(0..INVITE_CODE_CHARSET.len());
            INVITE_CODE_CHARSET[idx] as char
        })
        .collect()
}
