//! Password hashing using Argon2

use std::fmt::Debug;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher as Argon2PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

use crate::domain::DomainError;

/// Trait for password hashing operations
///
/// `verify` is also the comparison used for the same-password check on
/// updates, so no path ever compares credentials outside the hasher.
pub trait PasswordHasher: Send + Sync + Debug {
    /// Hash a password with a fresh random salt
    fn hash(&self, password: &str) -> Result<String, DomainError>;

    /// Verify a candidate against a stored hash (constant-time inside Argon2)
    fn verify(&self, candidate: &str, hash: &str) -> bool;
}

/// Argon2-based password hasher
#[derive(Debug, Clone, Default)]
pub struct Argon2Hasher;

impl Argon2Hasher {
    pub fn new() -> Self {
        Self
    }
}

impl PasswordHasher for Argon2Hasher {
    fn hash(&self, password: &str) -> Result<String, DomainError> {
        let salt = SaltString::generate(&mut OsRng);

        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| DomainError::infrastructure(format!("Failed to hash password: {e}")))
    }

    fn verify(&self, candidate: &str, hash: &str) -> bool {
        let Ok(parsed_hash) = PasswordHash::new(hash) else {
            return false;
        };

        Argon2::default()
            .verify_password(candidate.as_bytes(), &parsed_hash)
            .is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hasher = Argon2Hasher::new();

        let hash = hasher.hash("correct horse battery staple").unwrap();

        assert!(hasher.verify("correct horse battery staple", &hash));
        assert!(!hasher.verify("wrong password", &hash));
    }

    #[test]
    fn test_salts_differ() {
        let hasher = Argon2Hasher::new();

        let hash1 = hasher.hash("same password").unwrap();
        let hash2 = hasher.hash("same password").unwrap();

        assert_ne!(hash1, hash2);
        assert!(hasher.verify("same password", &hash1));
        assert!(hasher.verify("same password", &hash2));
    }

    #[test]
    fn test_verify_garbage_hash() {
        let hasher = Argon2Hasher::new();

        assert!(!hasher.verify("password", "not-a-phc-string"));
        assert!(!hasher.verify("password", ""));
    }
}
