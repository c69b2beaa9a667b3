//! Recovery email composer.
//!
//! On a password-recovery request the service generates a forgot hash,
//! persists it against the user record, composes the recovery mail from
//! configuration and templates, runs the pre-send hook chain and hands the
//! result to the transport.
use crate::{
    Error,
    config::RecoveryConfig,
    events::{Hook, HookChain, SendRecoveryEmail},
    repositories::UserRepository,
};
use std::sync::Arc;
use vigil_mailer::{Mailer, RecoveryEmail, TemplateEngine};

/// Translation key for the recovery mail subject.
pub const RECOVERY_MAIL_SUBJECT_KEY: &str = "password_recovery_mail_header";

/// Builds the absolute verification URL embedding a forgot hash. Routing is
/// owned by the host application.
pub trait UrlBuilder: Send + Sync + 'static {
    fn recovery_url(&self, hash: &str) -> String;
}

/// Localized string lookup by key. Catalogs are owned by the host
/// application.
pub trait Localizer: Send + Sync + 'static {
    fn translate(&self, key: &str) -> String;
}

pub struct RecoveryService {
    config: RecoveryConfig,
    mailer: Arc<dyn Mailer>,
    engine: Arc<dyn TemplateEngine>,
    users: Arc<dyn UserRepository>,
    urls: Arc<dyn UrlBuilder>,
    localizer: Arc<dyn Localizer>,
    hooks: HookChain<SendRecoveryEmail>,
}

impl RecoveryService {
    pub fn new(
        config: RecoveryConfig,
        mailer: Arc<dyn Mailer>,
        engine: Arc<dyn TemplateEngine>,
        users: Arc<dyn UserRepository>,
        urls: Arc<dyn UrlBuilder>,
        localizer: Arc<dyn Localizer>,
    ) -> Self {
        Self {
            config,
            mailer,
            engine,
            users,
            urls,
            localizer,
            hooks: HookChain::new(),
        }
    }

    /// Register a pre-send hook. Hooks run in registration order.
    pub fn register_hook(&mut self, hook: Arc<dyn Hook<SendRecoveryEmail>>) {
        self.hooks.register(hook);
    }

    /// Send a recovery mail with a fresh forgot hash to the given address.
    ///
    /// The hash is persisted before the mail referencing it is rendered, so a
    /// recipient can never receive a dead link. A request for an unknown
    /// address completes silently without sending anything. Transport errors
    /// propagate to the caller; there are no retries.
    pub async fn send_recovery_email(&self, email_address: &str) -> Result<(), Error> {
        self.config.validate()?;

        let hash = self.config.forgot_hash();
        self.users.update_forgot_hash(email_address, &hash).await?;

        let Some(user) = self.users.fetch_user_information(email_address).await? else {
            tracing::debug!("recovery requested for unknown address, nothing sent");
            return Ok(());
        };

        let sender = self.config.sender();
        let receiver_name = user.display_name();
        let url = self.urls.recovery_url(hash.as_str());
        let valid_until = hash
            .expires_at()
            .format(&self.config.date_format)
            .to_string();
        let subject = self.localizer.translate(RECOVERY_MAIL_SUBJECT_KEY);

        let email = RecoveryEmail {
            from: &sender,
            reply_to: self.config.reply_to.as_deref(),
            to: email_address,
            receiver_name: &receiver_name,
            subject: &subject,
            url: &url,
            valid_until: &valid_until,
            html: self.config.html_mail,
        }
        .build(self.engine.as_ref())
        .await?;

        let mut event = SendRecoveryEmail::new(email, user);
        self.hooks.dispatch(&mut event).await?;

        if let Some(reason) = event.invalid_reason() {
            tracing::info!(reason = %reason, "recovery email cancelled by hook");
            return Ok(());
        }

        self.mailer.send_email(event.into_email()).await?;
        tracing::info!("recovery email sent");

        Ok(())
    }
}
