//! Registration orchestration

mod guards;
mod workflow;

pub use guards::{GuardChain, IdentityContext};
pub use workflow::{ChangePassword, RegistrationWorkflow, TeamRoster, Teammate};
