//! Domain layer - entities, store trait, and the error taxonomy

pub mod account;
pub mod error;
pub mod participant;
pub mod role;
pub mod store;
pub mod team;

pub use account::{Account, AccountId};
pub use error::DomainError;
pub use participant::{Application, Participant, ParticipantId};
pub use role::Role;
pub use store::RegistrationStore;
pub use team::{MAX_TEAM_SIZE, Team, TeamId};
