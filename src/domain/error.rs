use thiserror::Error;

/// Core domain errors
///
/// Every variant except `Infrastructure` is an expected, typed failure that
/// the boundary renders with a stable status classification. `Infrastructure`
/// is the only category eligible for caller-side retry.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("{message}")]
    InvalidInput { message: String },

    #[error("{message}")]
    NotPermitted { message: String },

    #[error("This account already exists!")]
    DuplicateEmail,

    #[error("Sorry, it doesn't look like you have an account.")]
    UnknownAccount,

    #[error("Your username or password do not match.")]
    BadCredential,

    #[error("Your new password can't be the same as your old password!")]
    SamePassword,

    #[error("Oops. Your token is invalid.")]
    InvalidToken,

    #[error("Oops. Your token has expired.")]
    ExpiredToken,

    #[error("You already have a team!")]
    AlreadyOnTeam,

    #[error("Somebody beat you to it! That code has already been used.")]
    InviteCodeTaken,

    #[error("Aww. That doesn't seem to be a valid invite code.")]
    UnknownInviteCode,

    #[error("Aww. There are too many people on this team!")]
    TeamFull,

    #[error("Infrastructure error: {message}")]
    Infrastructure { message: String },
}

impl DomainError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    pub fn not_permitted(message: impl Into<String>) -> Self {
        Self::NotPermitted {
            message: message.into(),
        }
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        Self::Infrastructure {
            message: message.into(),
        }
    }

    /// Only infrastructure failures may be retried by the caller.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Infrastructure { .. })
    }

    /// Stable machine-readable classification for the boundary.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidInput { .. } => "invalid_input",
            Self::NotPermitted { .. } => "not_permitted",
            Self::DuplicateEmail => "duplicate_email",
            Self::UnknownAccount => "unknown_account",
            Self::BadCredential => "bad_credential",
            Self::SamePassword => "same_password",
            Self::InvalidToken => "invalid_token",
            Self::ExpiredToken => "expired_token",
            Self::AlreadyOnTeam => "already_on_team",
            Self::InviteCodeTaken => "invite_code_taken",
            Self::UnknownInviteCode => "unknown_invite_code",
            Self::TeamFull => "team_full",
            Self::Infrastructure { .. } => "infrastructure",
        }
    }
}
