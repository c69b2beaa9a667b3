//! Pre-send hooks with propagation-stopping semantics.
//!
//! Host applications extend the notification flow by registering hooks on a
//! [`HookChain`]. Hooks run in registration order and receive the event
//! mutably; the first hook that marks its event invalid stops the chain, and
//! the owning service must then skip the default action (sending the mail,
//! storing the password).
use crate::{error::EventError, user::UserInformation};
use async_trait::async_trait;
use std::sync::Arc;
use vigil_mailer::Email;

/// An event whose handlers may stop further processing.
pub trait StoppableEvent {
    fn is_propagation_stopped(&self) -> bool;
}

/// A single hook in a chain.
#[async_trait]
pub trait Hook<E>: Send + Sync + 'static {
    async fn handle(&self, event: &mut E) -> Result<(), EventError>;
}

/// Ordered list of hooks for one event type.
///
/// Dispatch walks the hooks in registration order and stops after the first
/// hook that leaves the event propagation-stopped.
pub struct HookChain<E> {
    hooks: Vec<Arc<dyn Hook<E>>>,
}

impl<E> Default for HookChain<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> HookChain<E> {
    pub fn new() -> Self {
        Self { hooks: Vec::new() }
    }

    pub fn register(&mut self, hook: Arc<dyn Hook<E>>) {
        self.hooks.push(hook);
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }
}

impl<E: StoppableEvent + Send + 'static> HookChain<E> {
    pub async fn dispatch(&self, event: &mut E) -> Result<(), EventError> {
        for hook in &self.hooks {
            hook.handle(event).await?;

            if event.is_propagation_stopped() {
                break;
            }
        }

        Ok(())
    }
}

/// Dispatched right before a recovery mail is handed to the transport.
///
/// Hooks may mutate the mail or mark the event invalid with a human-readable
/// reason, in which case the transport is never invoked.
pub struct SendRecoveryEmail {
    email: Email,
    user: UserInformation,
    invalid: Option<String>,
}

impl SendRecoveryEmail {
    pub fn new(email: Email, user: UserInformation) -> Self {
        Self {
            email,
            user,
            invalid: None,
        }
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn email_mut(&mut self) -> &mut Email {
        &mut self.email
    }

    pub fn user(&self) -> &UserInformation {
        &self.user
    }

    pub fn set_invalid<S: Into<String>>(&mut self, reason: S) {
        self.invalid = Some(reason.into());
    }

    pub fn invalid_reason(&self) -> Option<&str> {
        self.invalid.as_deref()
    }

    pub fn into_email(self) -> Email {
        self.email
    }
}

impl StoppableEvent for SendRecoveryEmail {
    fn is_propagation_stopped(&self) -> bool {
        self.invalid.is_some()
    }
}

/// Dispatched when a new password is about to be stored.
///
/// Carries both the hash that would be persisted and the raw password so
/// hooks can run additional validation; a hook rejecting the password marks
/// the event invalid and the store must not happen.
pub struct PasswordChange {
    user: UserInformation,
    hashed_password: String,
    raw_password: String,
    invalid: Option<String>,
}

impl PasswordChange {
    pub fn new(user: UserInformation, hashed_password: String, raw_password: String) -> Self {
        Self {
            user,
            hashed_password,
            raw_password,
            invalid: None,
        }
    }

    pub fn user(&self) -> &UserInformation {
        &self.user
    }

    pub fn hashed_password(&self) -> &str {
        &self.hashed_password
    }

    pub fn set_hashed_password<S: Into<String>>(&mut self, hashed_password: S) {
        self.hashed_password = hashed_password.into();
    }

    pub fn raw_password(&self) -> &str {
        &self.raw_password
    }

    pub fn set_invalid<S: Into<String>>(&mut self, reason: S) {
        self.invalid = Some(reason.into());
    }

    pub fn invalid_reason(&self) -> Option<&str> {
        self.invalid.as_deref()
    }
}

impl StoppableEvent for PasswordChange {
    fn is_propagation_stopped(&self) -> bool {
        self.invalid.is_some()
    }
}
