//! Outbound mail collaborator
//!
//! The workflow treats mail as fire-and-forget: dispatch happens only after
//! the store mutation has committed, and a failure here never rolls the
//! state change back.

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::info;

use crate::domain::DomainError;

/// The email templates this system sends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MailKind {
    AccountConfirmation,
    ForgotPassword,
    PasswordReset,
}

impl MailKind {
    pub fn subject(&self) -> &'static str {
        match self {
            Self::AccountConfirmation => "Welcome to the hackathon!",
            Self::ForgotPassword => "Password Recovery!",
            Self::PasswordReset => "Your password has been reset!",
        }
    }
}

/// Template context for an outbound message
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MailContext {
    /// Confirmation or reset token, when the template embeds a link
    pub token: Option<String>,
}

impl MailContext {
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
        }
    }
}

/// Mail dispatch boundary
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MailDispatcher: Send + Sync {
    async fn send(
        &self,
        kind: MailKind,
        recipient: &str,
        context: &MailContext,
    ) -> Result<(), DomainError>;
}

/// Dispatcher that logs instead of delivering - the stand-in for a real
/// transport in local runs
#[derive(Debug, Clone, Default)]
pub struct LoggingMailer;

impl LoggingMailer {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl MailDispatcher for LoggingMailer {
    async fn send(
        &self,
        kind: MailKind,
        recipient: &str,
        _context: &MailContext,
    ) -> Result<(), DomainError> {
        info!(recipient = %recipient, subject = %kind.subject(), "Dispatching email");
        Ok(())
    }
}

/// A sent message captured by `MemoryMailer`
#[derive(Debug, Clone)]
pub struct SentMail {
    pub kind: MailKind,
    pub recipient: String,
    pub context: MailContext,
}

/// Dispatcher that records messages so tests can pull tokens back out
#[derive(Debug, Default)]
pub struct MemoryMailer {
    sent: Mutex<Vec<SentMail>>,
}

impl MemoryMailer {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn sent(&self) -> Vec<SentMail> {
        self.sent.lock().await.clone()
    }

    /// Most recent message sent to `recipient`, if any.
    pub async fn last_to(&self, recipient: &str) -> Option<SentMail> {
        self.sent
            .lock()
            .await
            .iter()
            .rev()
            .find(|mail| mail.recipient == recipient)
            .cloned()
    }
}

#[async_trait]
impl MailDispatcher for MemoryMailer {
    async fn send(
        &self,
        kind: MailKind,
        recipient: &str,
        context: &MailContext,
    ) -> Result<(), DomainError> {
        self.sent.lock().await.push(SentMail {
            kind,
            recipient: recipient.to_string(),
            context: context.clone(),
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_mailer_records_messages() {
        let mailer = MemoryMailer::new();

        mailer
            .send(
                MailKind::AccountConfirmation,
                "h@x.com",
                &MailContext::with_token("tok-1"),
            )
            .await
            .unwrap();
        mailer
            .send(MailKind::PasswordReset, "h@x.com", &MailContext::default())
            .await
            .unwrap();

        assert_eq!(mailer.sent().await.len(), 2);

        let last = mailer.last_to("h@x.com").await.unwrap();
        assert_eq!(last.kind, MailKind::PasswordReset);

        assert!(mailer.last_to("nobody@x.com").await.is_none());
    }
}
