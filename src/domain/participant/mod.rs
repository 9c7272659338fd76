//! Participant aggregate - hacker profile, lottery state, team reference

mod entity;

pub use entity::{Application, Participant, ParticipantId, REFERRAL_CODE_LEN};
