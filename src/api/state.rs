//! Application state shared by all handlers

use std::sync::Arc;

use crate::infrastructure::registration::RegistrationWorkflow;
use crate::infrastructure::session::SessionStore;
use crate::infrastructure::store::MemoryStore;

/// Shared application state
///
/// The workflow is concrete over the in-memory store; every collaborator
/// behind it (hasher, mailer, sessions) is dynamic.
#[derive(Clone)]
pub struct AppState {
    pub workflow: Arc<RegistrationWorkflow<MemoryStore>>,
    pub sessions: Arc<dyn SessionStore>,
}

impl AppState {
    pub fn new(
        workflow: Arc<RegistrationWorkflow<MemoryStore>>,
        sessions: Arc<dyn SessionStore>,
    ) -> Self {
        Self { workflow, sessions }
    }
}
