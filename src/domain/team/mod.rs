//! Team aggregate - invite-code based, capacity-limited

mod entity;

pub use entity::{INVITE_CODE_LEN, MAX_TEAM_SIZE, Team, TeamId};
