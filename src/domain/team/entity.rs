//! Team entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Maximum number of members a team can hold.
pub const MAX_TEAM_SIZE: usize = 4;

/// Length of generated team invite codes.
pub const INVITE_CODE_LEN: usize = 8;

/// Team identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamId(Uuid);

impl TeamId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for TeamId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TeamId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Team entity
///
/// Teams own no member list; membership is derived from participants whose
/// team reference points here. The store keeps that reverse index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    id: TeamId,
    /// Unique invite code, generated at creation and collision-checked
    invite_code: String,
    created_at: DateTime<Utc>,
}

impl Team {
    pub fn new(invite_code: impl Into<String>) -> Self {
        Self {
            id: TeamId::new(),
            invite_code: invite_code.into(),
            created_at: Utc::now(),
        }
    }

    pub fn id(&self) -> &TeamId {
        &self.id
    }

    pub fn invite_code(&self) -> &str {
        &self.invite_code
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_team() {
        let team = Team::new("abcd1234");

        assert_eq!(team.invite_code(), "abcd1234");
    }

    #[test]
    fn test_team_ids_are_distinct() {
        assert_ne!(Team::new("a1").id(), Team::new("a2").id());
    }

    #[test]
    fn test_team_equality_for_result_assertions() {
        let team = Team::new("abcd1234");
        let copy = team.clone();

        assert_eq!(team, copy);
        assert_eq!(Ok::<_, crate::domain::DomainError>(team), Ok(copy));
    }
}
