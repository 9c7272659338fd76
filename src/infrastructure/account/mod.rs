//! Account identity services

pub mod password;
mod service;

pub use password::{Argon2Hasher, PasswordHasher};
pub use service::{AccountService, NewAccount};
