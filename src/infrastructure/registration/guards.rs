//! Eligibility guard chain
//!
//! The original route protection was a stack of nested decorators
//! (login -> confirmed -> hacker -> lottery). Here each guard is a
//! predicate over the request-scoped identity context and chains compose
//! them in order, failing on the first unmet requirement.

use crate::domain::DomainError;
use crate::domain::account::Account;
use crate::domain::participant::Participant;
use crate::domain::role::Role;

/// Identity context a guard chain evaluates against
#[derive(Debug, Clone)]
pub struct IdentityContext {
    pub account: Account,
    pub participant: Option<Participant>,
}

impl IdentityContext {
    /// The participant profile, for callers past the hacker guard.
    pub fn participant(&self) -> Result<&Participant, DomainError> {
        self.participant
            .as_ref()
            .ok_or_else(|| HackersOnly.failure())
    }
}

/// A single eligibility predicate
pub trait Guard: Send + Sync {
    fn check(&self, ctx: &IdentityContext) -> Result<(), DomainError>;
}

/// Requires a confirmed email address
pub struct EmailConfirmed;

impl Guard for EmailConfirmed {
    fn check(&self, ctx: &IdentityContext) -> Result<(), DomainError> {
        if ctx.account.is_confirmed() {
            Ok(())
        } else {
            Err(DomainError::not_permitted(
                "You need to verify your email to get here!",
            ))
        }
    }
}

/// Requires the hacker role (directly or via implication) and its profile
pub struct HackersOnly;

impl HackersOnly {
    fn failure(&self) -> DomainError {
        DomainError::not_permitted("You need to be a hacker to access this!")
    }
}

impl Guard for HackersOnly {
    fn check(&self, ctx: &IdentityContext) -> Result<(), DomainError> {
        if ctx.account.role().grants(Role::Hacker) && ctx.participant.is_some() {
            Ok(())
        } else {
            Err(self.failure())
        }
    }
}

/// Requires a submitted lottery application
pub struct LotterySubmitted;

impl Guard for LotterySubmitted {
    fn check(&self, ctx: &IdentityContext) -> Result<(), DomainError> {
        let submitted = ctx
            .participant
            .as_ref()
            .is_some_and(Participant::lottery_submitted);

        if submitted {
            Ok(())
        } else {
            Err(DomainError::not_permitted(
                "You need to submit the lottery form to do that!",
            ))
        }
    }
}

/// Ordered chain of guards, evaluated front to back
pub struct GuardChain {
    guards: Vec<Box<dyn Guard>>,
}

impl GuardChain {
    pub fn new(guards: Vec<Box<dyn Guard>>) -> Self {
        Self { guards }
    }

    /// Chain for lottery-form access: confirmed + hacker.
    pub fn for_lottery() -> Self {
        Self::new(vec![Box::new(EmailConfirmed), Box::new(HackersOnly)])
    }

    /// Chain for team operations: confirmed + hacker + submitted.
    pub fn for_teams() -> Self {
        Self::new(vec![
            Box::new(EmailConfirmed),
            Box::new(HackersOnly),
            Box::new(LotterySubmitted),
        ])
    }

    pub fn check(&self, ctx: &IdentityContext) -> Result<(), DomainError> {
        for guard in &self.guards {
            guard.check(ctx)?;
        }
        Ok(())
    }
}
