//! Account input validation

use thiserror::Error;

/// Errors that can occur during account validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AccountValidationError {
    #[error("Email address cannot be empty")]
    EmptyEmail,

    #[error("Email address exceeds maximum length of {0} characters")]
    EmailTooLong(usize),

    #[error("Email address is not valid")]
    InvalidEmail,

    #[error("Password is too short. Minimum length is {0} characters")]
    PasswordTooShort(usize),

    #[error("Password exceeds maximum length of {0} characters")]
    PasswordTooLong(usize),
}

const MAX_EMAIL_LENGTH: usize = 254;
const MIN_PASSWORD_LENGTH: usize = 8;
const MAX_PASSWORD_LENGTH: usize = 128;

/// Validate an email address
///
/// The transport layer runs the full `validator` email check on the request
/// form; this is the domain-level backstop for callers that bypass it.
pub fn validate_email(email: &str) -> Result<(), AccountValidationError> {
    if email.is_empty() {
        return Err(AccountValidationError::EmptyEmail);
    }

    if email.len() > MAX_EMAIL_LENGTH {
        return Err(AccountValidationError::EmailTooLong(MAX_EMAIL_LENGTH));
    }

    let Some((local, domain)) = email.split_once('@') else {
        return Err(AccountValidationError::InvalidEmail);
    };

    if local.is_empty() || domain.is_empty() || email.chars().any(char::is_whitespace) {
        return Err(AccountValidationError::InvalidEmail);
    }

    Ok(())
}

/// Validate a password
///
/// Rules:
/// - Minimum 8 characters
/// - Maximum 128 characters
pub fn validate_password(password: &str) -> Result<(), AccountValidationError> {
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(AccountValidationError::PasswordTooShort(MIN_PASSWORD_LENGTH));
    }

    if password.len() > MAX_PASSWORD_LENGTH {
        return Err(AccountValidationError::PasswordTooLong(MAX_PASSWORD_LENGTH));
    }

    Ok(())
}
