//! Request middleware and extractors

pub mod session_auth;

pub use session_auth::RequireAccount;
