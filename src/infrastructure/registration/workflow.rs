//! Registration workflow - the one component that sequences account state,
//! tokens, sessions, teams and mail for each user-facing transition.
//!
//! Ordering rules it owns:
//! - mail is dispatched only after the store mutation committed, and a mail
//!   failure never rolls the mutation back (the token can be re-requested)
//! - session invalidation happens after every credential change
//! - guard chains run before any team or lottery mutation

use std::sync::Arc;

use chrono::Duration;
use tracing::{info, warn};

use crate::domain::DomainError;
use crate::domain::account::{Account, AccountId};
use crate::domain::participant::{Application, Participant, REFERRAL_CODE_LEN};
use crate::domain::role::Role;
use crate::domain::store::RegistrationStore;
use crate::domain::team::Team;
use crate::infrastructure::account::{AccountService, NewAccount, PasswordHasher};
use crate::infrastructure::mail::{MailContext, MailDispatcher, MailKind};
use crate::infrastructure::session::SessionStore;
use crate::infrastructure::team::TeamRegistry;
use crate::infrastructure::token::TokenCodec;

use super::guards::{GuardChain, IdentityContext};

/// School id exempt from the adult requirement on the lottery form
const HOST_SCHOOL_ID: &str = "166683";

const DEFAULT_CONFIRM_MAX_AGE_SECS: i64 = 24 * 60 * 60;
const DEFAULT_RESET_MAX_AGE_SECS: i64 = 30 * 60;

/// Credential change request, checked against the caller's own identity
#[derive(Debug, Clone)]
pub struct ChangePassword {
    pub email: String,
    pub old_password: String,
    pub new_password: String,
}

/// Roster entry for a teammate
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Teammate {
    pub name: Option<String>,
    pub email: String,
}

/// A participant's current team plus everyone on it
#[derive(Debug, Clone, serde::Serialize)]
pub struct TeamRoster {
    pub invite_code: String,
    pub teammates: Vec<Teammate>,
}

/// Orchestrates every registration transition end to end
pub struct RegistrationWorkflow<S: RegistrationStore> {
    store: Arc<S>,
    accounts: AccountService<S>,
    teams: TeamRegistry<S>,
    tokens: TokenCodec,
    sessions: Arc<dyn SessionStore>,
    mailer: Arc<dyn MailDispatcher>,
    confirm_max_age: Duration,
    reset_max_age: Duration,
    lottery_guards: GuardChain,
    team_guards: GuardChain,
}

impl<S: RegistrationStore> RegistrationWorkflow<S> {
    pub fn new(
        store: Arc<S>,
        hasher: Arc<dyn PasswordHasher>,
        tokens: TokenCodec,
        sessions: Arc<dyn SessionStore>,
        mailer: Arc<dyn MailDispatcher>,
    ) -> Self {
        Self {
            accounts: AccountService::new(Arc::clone(&store), hasher),
            teams: TeamRegistry::new(Arc::clone(&store)),
            store,
            tokens,
            sessions,
            mailer,
            confirm_max_age: Duration::seconds(DEFAULT_CONFIRM_MAX_AGE_SECS),
            reset_max_age: Duration::seconds(DEFAULT_RESET_MAX_AGE_SECS),
            lottery_guards: GuardChain::for_lottery(),
            team_guards: GuardChain::for_teams(),
        }
    }

    pub fn with_token_max_ages(mut self, confirm: Duration, reset: Duration) -> Self {
        self.confirm_max_age = confirm;
        self.reset_max_age = reset;
        self
    }

    /// Register a hacker account and send the confirmation email.
    pub async fn register(&self, email: &str, password: &str) -> Result<Account, DomainError> {
        let account = self
            .accounts
            .register(NewAccount {
                email: email.to_string(),
                password: password.to_string(),
                role: Role::Hacker,
            })
            .await?;

        // State is committed; the confirmation mail is best-effort
        let token = self.tokens.issue(account.id());
        self.dispatch_mail(
            MailKind::AccountConfirmation,
            account.email(),
            MailContext::with_token(token),
        )
        .await;

        Ok(account)
    }

    /// Re-send the confirmation email. Unauthenticated on purpose: an
    /// unconfirmed account can't log in to ask for it. No-op when the
    /// account is already confirmed.
    pub async fn resend_confirmation(&self, email: &str) -> Result<(), DomainError> {
        let account = self
            .accounts
            .get_by_email(email)
            .await?
            .ok_or(DomainError::UnknownAccount)?;

        if account.is_confirmed() {
            return Ok(());
        }

        let token = self.tokens.issue(account.id());
        self.dispatch_mail(
            MailKind::AccountConfirmation,
            account.email(),
            MailContext::with_token(token),
        )
        .await;

        Ok(())
    }

    /// Redeem a confirmation token. Idempotent for a still-valid token.
    pub async fn confirm(&self, token: &str) -> Result<Account, DomainError> {
        let account_id = self.tokens.verify(token, Some(self.confirm_max_age))?;

        let account = self
            .accounts
            .get(&account_id)
            .await?
            .ok_or(DomainError::UnknownAccount)?;

        self.accounts.confirm_email(&account_id).await?;

        info!(account_id = %account_id, "Email confirmed");
        Ok(account)
    }

    /// Verify credentials and open a session. Requires a confirmed email.
    pub async fn login(&self, email: &str, password: &str) -> Result<(Account, String), DomainError> {
        let account = self.accounts.check_credential(email, password).await?;

        if !account.is_confirmed() {
            return Err(DomainError::not_permitted(
                "You need to verify your email before logging in.",
            ));
        }

        let session = self.sessions.login(*account.id()).await?;
        Ok((account, session))
    }

    pub async fn logout(&self, session_token: &str) -> Result<(), DomainError> {
        self.sessions.logout(session_token).await
    }

    /// Change a password from inside a session.
    ///
    /// The caller can only change their own credential, must re-state their
    /// email and prove the old password. Every session for the account is
    /// dropped afterwards, including the one making the call.
    pub async fn update_password(
        &self,
        actor: &AccountId,
        target: &AccountId,
        request: ChangePassword,
    ) -> Result<(), DomainError> {
        if actor != target {
            return Err(DomainError::not_permitted(
                "You can't change someone else's password!",
            ));
        }

        let account = self
            .accounts
            .get(target)
            .await?
            .ok_or(DomainError::UnknownAccount)?;

        if !account.email().eq_ignore_ascii_case(request.email.trim()) {
            return Err(DomainError::invalid_input(
                "Your email doesn't seem to match our records.",
            ));
        }

        self.accounts
            .check_credential(account.email(), &request.old_password)
            .await?;

        self.accounts
            .update_password(target, &request.new_password)
            .await?;

        self.sessions.invalidate_account(target).await?;
        Ok(())
    }

    /// Start password recovery. Unlike registration mail, the email here is
    /// the whole point of the operation, so a dispatch failure surfaces.
    pub async fn forgot_password(&self, email: &str) -> Result<(), DomainError> {
        let account = self
            .accounts
            .get_by_email(email)
            .await?
            .ok_or(DomainError::UnknownAccount)?;

        let token = self.tokens.issue(account.id());
        self.mailer
            .send(
                MailKind::ForgotPassword,
                account.email(),
                &MailContext::with_token(token),
            )
            .await?;

        info!(account_id = %account.id(), "Password recovery started");
        Ok(())
    }

    /// Redeem a recovery token and set a new password.
    ///
    /// A redeemed token also confirms the email: the holder has proven they
    /// can read the inbox. Sessions are invalidated and a notification is
    /// sent after the credential change commits.
    pub async fn reset_password(
        &self,
        token: &str,
        new_password: &str,
    ) -> Result<(), DomainError> {
        let account_id = self.tokens.verify(token, Some(self.reset_max_age))?;

        let account = self
            .accounts
            .get(&account_id)
            .await?
            .ok_or(DomainError::UnknownAccount)?;

        self.accounts.update_password(&account_id, new_password).await?;
        self.accounts.confirm_email(&account_id).await?;
        self.sessions.invalidate_account(&account_id).await?;

        self.dispatch_mail(MailKind::PasswordReset, account.email(), MailContext::default())
            .await;

        info!(account_id = %account_id, "Password reset");
        Ok(())
    }

    /// Submit (or update) the lottery application.
    ///
    /// Minors are only admitted from the host school; referral codes are
    /// trimmed and truncated before uniqueness is checked in the store.
    pub async fn submit_application(
        &self,
        account_id: &AccountId,
        application: Application,
        referral: Option<String>,
    ) -> Result<(), DomainError> {
        let ctx = self.identity(account_id).await?;
        self.lottery_guards.check(&ctx)?;

        if application.name.trim().is_empty() {
            return Err(DomainError::invalid_input("Please tell us your name!"));
        }

        if !application.adult && application.school_id != HOST_SCHOOL_ID {
            return Err(DomainError::invalid_input(
                "Sorry, you have to be an adult to attend!",
            ));
        }

        let referral = normalize_referral(referral);
        let participant = ctx.participant()?;

        self.store
            .submit_application(participant.id(), application, referral)
            .await?;

        info!(account_id = %account_id, "Lottery application submitted");
        Ok(())
    }

    pub async fn create_team(&self, account_id: &AccountId) -> Result<Team, DomainError> {
        let ctx = self.identity(account_id).await?;
        self.team_guards.check(&ctx)?;

        self.teams.create_team(ctx.participant()?.id()).await
    }

    pub async fn join_team(
        &self,
        account_id: &AccountId,
        invite_code: &str,
    ) -> Result<Team, DomainError> {
        let ctx = self.identity(account_id).await?;
        self.team_guards.check(&ctx)?;

        self.teams.join_team(ctx.participant()?.id(), invite_code).await
    }

    pub async fn leave_team(&self, account_id: &AccountId) -> Result<(), DomainError> {
        let ctx = self.identity(account_id).await?;
        self.team_guards.check(&ctx)?;

        self.teams.leave_team(ctx.participant()?.id()).await
    }

    /// The caller's team and its members, names taken from submitted
    /// applications.
    pub async fn team_roster(&self, account_id: &AccountId) -> Result<TeamRoster, DomainError> {
        let ctx = self.identity(account_id).await?;
        self.team_guards.check(&ctx)?;

        let team_id = ctx
            .participant()?
            .team_id()
            .copied()
            .ok_or_else(|| DomainError::not_permitted("You don't have a team yet!"))?;

        let team = self
            .teams
            .get(&team_id)
            .await?
            .ok_or(DomainError::UnknownInviteCode)?;

        let mut teammates = Vec::new();
        for member in self.teams.members(&team_id).await? {
            teammates.push(self.teammate(&member).await?);
        }

        Ok(TeamRoster {
            invite_code: team.invite_code().to_string(),
            teammates,
        })
    }

    /// Load the identity context for guard evaluation.
    pub async fn identity(&self, account_id: &AccountId) -> Result<IdentityContext, DomainError> {
        let account = self
            .accounts
            .get(account_id)
            .await?
            .ok_or(DomainError::UnknownAccount)?;
        let participant = self.store.participant_for_account(account_id).await?;

        Ok(IdentityContext {
            account,
            participant,
        })
    }

    async fn teammate(&self, member: &Participant) -> Result<Teammate, DomainError> {
        let account = self
            .accounts
            .get(member.account_id())
            .await?
            .ok_or(DomainError::UnknownAccount)?;

        Ok(Teammate {
            name: member.application().map(|a| a.name.clone()),
            email: account.email().to_string(),
        })
    }

    async fn dispatch_mail(&self, kind: MailKind, recipient: &str, context: MailContext) {
        if let Err(error) = self.mailer.send(kind, recipient, &context).await {
            warn!(recipient = %recipient, error = %error, "Email dispatch failed");
        }
    }
}

fn normalize_referral(referral: Option<String>) -> Option<String> {
    let referral = referral?;
    let trimmed = referral.trim();

    if trimmed.is_empty() {
        return None;
    }

    Some(trimmed.chars().take(REFERRAL_CODE_LEN).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::account::Argon2Hasher;
    use crate::infrastructure::mail::{MemoryMailer, MockMailDispatcher};
    use crate::infrastructure::session::MemorySessionStore;
    use crate::infrastructure::store::MemoryStore;

    struct Harness {
        workflow: RegistrationWorkflow<MemoryStore>,
        mailer: Arc<MemoryMailer>,
    }

    fn create_harness() -> Harness {
        let mailer = Arc::new(MemoryMailer::new());
        let workflow = RegistrationWorkflow::new(
            Arc::new(MemoryStore::new()),
            Arc::new(Argon2Hasher::new()),
            TokenCodec::new("workflow-test-secret"),
            Arc::new(MemorySessionStore::new()),
            Arc::clone(&mailer) as Arc<dyn MailDispatcher>,
        );

        Harness { workflow, mailer }
    }

    fn test_application() -> Application {
        Application {
            name: "Grace Hopper".to_string(),
            gender: "female".to_string(),
            school_id: "100001".to_string(),
            school: "Yale".to_string(),
            adult: true,
            location: "New Haven, CT".to_string(),
            interests: "compilers".to_string(),
        }
    }

    async fn mailed_token(harness: &Harness, email: &str) -> String {
        harness
            .mailer
            .last_to(email)
            .await
            .and_then(|mail| mail.context.token)
            .expect("a token-bearing mail was sent")
    }

    /// Full confirmed-hacker setup: register, confirm, submit application.
    async fn onboard(harness: &Harness, email: &str) -> AccountId {
        let account = harness.workflow.register(email, "secure_password").await.unwrap();
        let token = mailed_token(harness, email).await;
        harness.workflow.confirm(&token).await.unwrap();
        harness
            .workflow
            .submit_application(account.id(), test_application(), None)
            .await
            .unwrap();
        *account.id()
    }

    #[tokio::test]
    async fn test_full_registration_journey() {
        let harness = create_harness();

        let account = harness
            .workflow
            .register("ada@x.com", "secure_password")
            .await
            .unwrap();

        // Not confirmed yet: login is refused
        let result = harness.workflow.login("ada@x.com", "secure_password").await;
        assert!(matches!(result, Err(DomainError::NotPermitted { .. })));

        // Confirm via the mailed token, then log in
        let token = mailed_token(&harness, "ada@x.com").await;
        harness.workflow.confirm(&token).await.unwrap();

        let (logged_in, session) = harness
            .workflow
            .login("ada@x.com", "secure_password")
            .await
            .unwrap();
        assert_eq!(logged_in.id(), account.id());
        assert!(!session.is_empty());

        // Lottery, then a team
        harness
            .workflow
            .submit_application(account.id(), test_application(), None)
            .await
            .unwrap();
        let team = harness.workflow.create_team(account.id()).await.unwrap();

        // A second hacker joins by invite code
        let friend = onboard(&harness, "friend@x.com").await;
        let joined = harness
            .workflow
            .join_team(&friend, team.invite_code())
            .await
            .unwrap();
        assert_eq!(joined.id(), team.id());

        let roster = harness.workflow.team_roster(&friend).await.unwrap();
        assert_eq!(roster.invite_code, team.invite_code());
        assert_eq!(roster.teammates.len(), 2);
    }

    #[tokio::test]
    async fn test_register_duplicate_email() {
        let harness = create_harness();

        harness
            .workflow
            .register("ada@x.com", "secure_password")
            .await
            .unwrap();

        let result = harness.workflow.register("ADA@X.COM", "other_password").await;
        assert_eq!(result, Err(DomainError::DuplicateEmail));
    }

    #[tokio::test]
    async fn test_mail_failure_does_not_fail_registration() {
        let mut mock = MockMailDispatcher::new();
        mock.expect_send()
            .returning(|_, _, _| Err(DomainError::infrastructure("smtp down")));

        let workflow = RegistrationWorkflow::new(
            Arc::new(MemoryStore::new()),
            Arc::new(Argon2Hasher::new()),
            TokenCodec::new("workflow-test-secret"),
            Arc::new(MemorySessionStore::new()),
            Arc::new(mock),
        );

        // Registration commits even though the confirmation mail bounced
        let account = workflow.register("ada@x.com", "secure_password").await.unwrap();
        assert!(workflow.identity(account.id()).await.is_ok());
    }

    #[tokio::test]
    async fn test_resend_confirmation() {
        let harness = create_harness();

        let result = harness.workflow.resend_confirmation("nobody@x.com").await;
        assert_eq!(result, Err(DomainError::UnknownAccount));

        harness
            .workflow
            .register("ada@x.com", "secure_password")
            .await
            .unwrap();
        harness.workflow.resend_confirmation("ada@x.com").await.unwrap();

        assert_eq!(harness.mailer.sent().await.len(), 2);

        // The re-sent token confirms just as well
        let token = mailed_token(&harness, "ada@x.com").await;
        harness.workflow.confirm(&token).await.unwrap();

        // Confirmed account: resend is a silent no-op
        harness.workflow.resend_confirmation("ada@x.com").await.unwrap();
        assert_eq!(harness.mailer.sent().await.len(), 2);
    }

    #[tokio::test]
    async fn test_forgot_password_unknown_account() {
        let harness = create_harness();

        let result = harness.workflow.forgot_password("nobody@x.com").await;
        assert_eq!(result, Err(DomainError::UnknownAccount));
    }

    #[tokio::test]
    async fn test_reset_password_flow() {
        let harness = create_harness();
        onboard(&harness, "ada@x.com").await;

        let (_, session) = harness
            .workflow
            .login("ada@x.com", "secure_password")
            .await
            .unwrap();

        harness.workflow.forgot_password("ada@x.com").await.unwrap();
        let token = mailed_token(&harness, "ada@x.com").await;

        harness
            .workflow
            .reset_password(&token, "brand_new_password")
            .await
            .unwrap();

        // Old credential is gone, existing session was dropped
        let result = harness.workflow.login("ada@x.com", "secure_password").await;
        assert_eq!(result, Err(DomainError::BadCredential));
        assert_eq!(
            harness
                .workflow
                .sessions
                .current_account(&session)
                .await
                .unwrap(),
            None
        );

        harness
            .workflow
            .login("ada@x.com", "brand_new_password")
            .await
            .unwrap();

        // A notification went out after the change
        let last = harness.mailer.last_to("ada@x.com").await.unwrap();
        assert_eq!(last.kind, MailKind::PasswordReset);
    }

    #[tokio::test]
    async fn test_reset_rejects_same_password() {
        let harness = create_harness();
        onboard(&harness, "ada@x.com").await;

        harness.workflow.forgot_password("ada@x.com").await.unwrap();
        let token = mailed_token(&harness, "ada@x.com").await;

        let result = harness.workflow.reset_password(&token, "secure_password").await;
        assert_eq!(result, Err(DomainError::SamePassword));
    }

    #[tokio::test]
    async fn test_expired_reset_token_leaves_credential_unchanged() {
        let mailer = Arc::new(MemoryMailer::new());
        let workflow = RegistrationWorkflow::new(
            Arc::new(MemoryStore::new()),
            Arc::new(Argon2Hasher::new()),
            TokenCodec::new("workflow-test-secret"),
            Arc::new(MemorySessionStore::new()),
            Arc::clone(&mailer) as Arc<dyn MailDispatcher>,
        )
        .with_token_max_ages(Duration::hours(24), Duration::seconds(1));

        let harness = Harness { workflow, mailer };
        onboard(&harness, "ada@x.com").await;
        let workflow = &harness.workflow;

        workflow.forgot_password("ada@x.com").await.unwrap();
        let token = mailed_token(&harness, "ada@x.com").await;

        tokio::time::sleep(std::time::Duration::from_secs(2)).await;

        let result = workflow.reset_password(&token, "brand_new_password").await;
        assert_eq!(result, Err(DomainError::ExpiredToken));

        // The old credential still works
        workflow.login("ada@x.com", "secure_password").await.unwrap();
    }

    #[tokio::test]
    async fn test_confirmation_token_rejected_on_reset_tampering() {
        let harness = create_harness();
        onboard(&harness, "ada@x.com").await;

        let result = harness.workflow.reset_password("not-a-token", "whatever").await;
        assert_eq!(result, Err(DomainError::InvalidToken));
    }

    #[tokio::test]
    async fn test_update_password_checks_actor_and_email() {
        let harness = create_harness();
        let ada = onboard(&harness, "ada@x.com").await;
        let eve = onboard(&harness, "eve@x.com").await;

        let request = ChangePassword {
            email: "ada@x.com".to_string(),
            old_password: "secure_password".to_string(),
            new_password: "brand_new_password".to_string(),
        };

        // Someone else's credential is off-limits
        let result = harness
            .workflow
            .update_password(&eve, &ada, request.clone())
            .await;
        assert!(matches!(result, Err(DomainError::NotPermitted { .. })));

        // Wrong email on the form
        let result = harness
            .workflow
            .update_password(
                &ada,
                &ada,
                ChangePassword {
                    email: "wrong@x.com".to_string(),
                    ..request.clone()
                },
            )
            .await;
        assert!(matches!(result, Err(DomainError::InvalidInput { .. })));

        // Wrong old password
        let result = harness
            .workflow
            .update_password(
                &ada,
                &ada,
                ChangePassword {
                    old_password: "not_it".to_string(),
                    ..request.clone()
                },
            )
            .await;
        assert_eq!(result, Err(DomainError::BadCredential));

        harness
            .workflow
            .update_password(&ada, &ada, request)
            .await
            .unwrap();
        harness
            .workflow
            .login("ada@x.com", "brand_new_password")
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_update_password_drops_sessions() {
        let harness = create_harness();
        let ada = onboard(&harness, "ada@x.com").await;

        let (_, session) = harness
            .workflow
            .login("ada@x.com", "secure_password")
            .await
            .unwrap();

        harness
            .workflow
            .update_password(
                &ada,
                &ada,
                ChangePassword {
                    email: "ada@x.com".to_string(),
                    old_password: "secure_password".to_string(),
                    new_password: "brand_new_password".to_string(),
                },
            )
            .await
            .unwrap();

        assert_eq!(
            harness
                .workflow
                .sessions
                .current_account(&session)
                .await
                .unwrap(),
            None
        );
    }

    #[tokio::test]
    async fn test_minor_rejected_unless_host_school() {
        let harness = create_harness();

        let account = harness
            .workflow
            .register("kid@x.com", "secure_password")
            .await
            .unwrap();
        let token = mailed_token(&harness, "kid@x.com").await;
        harness.workflow.confirm(&token).await.unwrap();

        let mut minor = test_application();
        minor.adult = false;

        let result = harness
            .workflow
            .submit_application(account.id(), minor.clone(), None)
            .await;
        assert!(matches!(result, Err(DomainError::InvalidInput { .. })));

        // Host-school minors are allowed
        minor.school_id = HOST_SCHOOL_ID.to_string();
        harness
            .workflow
            .submit_application(account.id(), minor, None)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_referral_code_normalized() {
        let harness = create_harness();
        let account = harness
            .workflow
            .register("ada@x.com", "secure_password")
            .await
            .unwrap();
        let token = mailed_token(&harness, "ada@x.com").await;
        harness.workflow.confirm(&token).await.unwrap();

        harness
            .workflow
            .submit_application(
                account.id(),
                test_application(),
                Some("  longreferralcode  ".to_string()),
            )
            .await
            .unwrap();

        let ctx = harness.workflow.identity(account.id()).await.unwrap();
        assert_eq!(ctx.participant().unwrap().referral_code(), Some("longrefe"));
    }

    #[tokio::test]
    async fn test_team_operations_require_submitted_lottery() {
        let harness = create_harness();

        let account = harness
            .workflow
            .register("ada@x.com", "secure_password")
            .await
            .unwrap();
        let token = mailed_token(&harness, "ada@x.com").await;
        harness.workflow.confirm(&token).await.unwrap();

        let result = harness.workflow.create_team(account.id()).await;
        assert!(matches!(result, Err(DomainError::NotPermitted { .. })));
    }

    #[tokio::test]
    async fn test_join_unknown_invite_code() {
        let harness = create_harness();
        let ada = onboard(&harness, "ada@x.com").await;

        let result = harness.workflow.join_team(&ada, "nosuchcd").await;
        assert_eq!(result, Err(DomainError::UnknownInviteCode));
    }

    #[tokio::test]
    async fn test_roster_without_team() {
        let harness = create_harness();
        let ada = onboard(&harness, "ada@x.com").await;

        let result = harness.workflow.team_roster(&ada).await;
        assert!(matches!(result, Err(DomainError::NotPermitted { .. })));
    }

    #[test]
    fn test_normalize_referral() {
        assert_eq!(normalize_referral(None), None);
        assert_eq!(normalize_referral(Some("   ".to_string())), None);
        assert_eq!(
            normalize_referral(Some("abc123".to_string())),
            Some("abc123".to_string())
        );
        assert_eq!(
            normalize_referral(Some("abcdefghijkl".to_string())),
            Some("abcdefgh".to_string())
        );
    }
}
