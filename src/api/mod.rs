//! API layer - HTTP endpoints and middleware

pub mod accounts;
pub mod hackers;
pub mod health;
pub mod middleware;
pub mod router;
pub mod sessions;
pub mod state;
pub mod teams;
pub mod types;

pub use middleware::RequireAccount;
pub use router::create_router_with_state;
pub use state::AppState;
