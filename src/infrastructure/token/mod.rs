//! Signed, optionally time-limited account tokens
//!
//! Tokens carry a single claim (an account id) plus the issue timestamp,
//! HMAC-SHA256 signed with the process-wide secret:
//!
//! ```text
//! base64url(account_id "." issued_at_unix) "." base64url(signature)
//! ```
//!
//! The codec holds no state beyond the key and is safe to share across any
//! number of request handlers. Verification never reveals more than
//! expired-vs-malformed.

use std::fmt::Debug;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{DateTime, Duration, Utc};
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::domain::DomainError;
use crate::domain::account::AccountId;

type HmacSha256 = Hmac<Sha256>;

/// Codec for issuing and verifying signed account tokens
#[derive(Clone)]
pub struct TokenCodec {
    key: Vec<u8>,
}

impl Debug for TokenCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenCodec").field("key", &"[hidden]").finish()
    }
}

impl TokenCodec {
    pub fn new(secret: impl AsRef<[u8]>) -> Self {
        Self {
            key: secret.as_ref().to_vec(),
        }
    }

    /// Issue a token claiming `account_id`, stamped with the current time.
    pub fn issue(&self, account_id: &AccountId) -> String {
        self.issue_at(account_id, Utc::now())
    }

    fn issue_at(&self, account_id: &AccountId, issued_at: DateTime<Utc>) -> String {
        let payload = format!("{}.{}", account_id, issued_at.timestamp());
        let signature = self.sign(payload.as_bytes());

        format!(
            "{}.{}",
            URL_SAFE_NO_PAD.encode(payload.as_bytes()),
            URL_SAFE_NO_PAD.encode(signature)
        )
    }

    /// Verify a token and return the embedded claim.
    ///
    /// Fails with `InvalidToken` on any shape or signature mismatch and with
    /// `ExpiredToken` when `max_age` is given and exceeded.
    pub fn verify(
        &self,
        token: &str,
        max_age: Option<Duration>,
    ) -> Result<AccountId, DomainError> {
        self.verify_at(token, max_age, Utc::now())
    }

    fn verify_at(
        &self,
        token: &str,
        max_age: Option<Duration>,
        now: DateTime<Utc>,
    ) -> Result<AccountId, DomainError> {
        let (payload_b64, signature_b64) =
            token.split_once('.').ok_or(DomainError::InvalidToken)?;

        let payload = URL_SAFE_NO_PAD
            .decode(payload_b64)
            .map_err(|_| DomainError::InvalidToken)?;
        let signature = URL_SAFE_NO_PAD
            .decode(signature_b64)
            .map_err(|_| DomainError::InvalidToken)?;

        let mut mac = HmacSha256::new_from_slice(&self.key)
            .map_err(|_| DomainError::InvalidToken)?;
        mac.update(&payload);
        mac.verify_slice(&signature)
            .map_err(|_| DomainError::InvalidToken)?;

        let payload = String::from_utf8(payload).map_err(|_| DomainError::InvalidToken)?;
        let (claim, issued_at) = payload.split_once('.').ok_or(DomainError::InvalidToken)?;

        let account_id = AccountId::parse(claim).ok_or(DomainError::InvalidToken)?;
        let issued_at: i64 = issued_at.parse().map_err(|_| DomainError::InvalidToken)?;

        if let Some(max_age) = max_age {
            let elapsed = now.timestamp() - issued_at;
            if elapsed > max_age.num_seconds() {
                return Err(DomainError::ExpiredToken);
            }
        }

        Ok(account_id)
    }

    fn sign(&self, payload: &[u8]) -> Vec<u8> {
        // Key length is unconstrained for HMAC; new_from_slice cannot fail
        let mut mac = HmacSha256::new_from_slice(&self.key)
            .unwrap_or_else(|_| HmacSha256::new_from_slice(b"").expect("empty key is valid"));
        mac.update(payload);
        mac.finalize().into_bytes().to_vec()
    }
}
