//! # Vigil
//!
//! Vigil is a small toolkit for the two mail flows every login-capable
//! application grows sooner or later:
//!
//! - **Login notifications** — on each backend login, decide whether to mail
//!   the user, an administrator, both, or nobody, with subjects reflecting
//!   the warning policy.
//! - **Account recovery** — generate a single-use, time-limited forgot hash,
//!   persist it, and send a templated recovery mail with an extensible
//!   pre-send hook chain.
//!
//! Storage, routing and localization stay under the host application's
//! control through trait seams; mail transport is lettre behind the
//! [`Mailer`] trait.
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use vigil::prelude::*;
//!
//! let vigil = Vigil::builder()
//!     .mailer_config(MailerConfig::from_env()?)
//!     .recovery_config(RecoveryConfig::default())
//!     .user_repository(my_repository)
//!     .url_builder(my_router)
//!     .localizer(my_catalog)
//!     .build()?;
//!
//! vigil.recovery.send_recovery_email("max@mustermann.de").await?;
//! vigil.login_notifications.notify(&context, &alert_config).await?;
//! ```
use std::sync::Arc;

pub use vigil_core::{
    ConfigError, Error, EventError, ForgotHash, Hook, HookChain, LoginAlertConfig, LoginContext,
    LoginNotificationService, LoginUser, Localizer, NotificationAction, NotificationKind,
    PasswordChange, RecoveryConfig, RecoveryService, SendRecoveryEmail, StoppableEvent,
    UrlBuilder, UserInformation, UserRepository, ValidationError, WarningMode,
};
pub use vigil_mailer::{
    AskamaTemplateEngine, Email, EmailBuilder, Mailer, MailerConfig, MailerError, TemplateEngine,
};

/// Both notification services, wired to one transport and template engine.
pub struct Vigil {
    pub login_notifications: LoginNotificationService,
    pub recovery: RecoveryService,
}

impl Vigil {
    pub fn builder() -> VigilBuilder {
        VigilBuilder::default()
    }
}

/// Builder wiring configuration and host collaborators into a [`Vigil`]
/// instance.
#[derive(Default)]
pub struct VigilBuilder {
    mailer_config: Option<MailerConfig>,
    recovery_config: Option<RecoveryConfig>,
    engine: Option<Arc<dyn TemplateEngine>>,
    users: Option<Arc<dyn UserRepository>>,
    urls: Option<Arc<dyn UrlBuilder>>,
    localizer: Option<Arc<dyn Localizer>>,
    hooks: Vec<Arc<dyn Hook<SendRecoveryEmail>>>,
}

impl VigilBuilder {
    pub fn mailer_config(mut self, config: MailerConfig) -> Self {
        self.mailer_config = Some(config);
        self
    }

    pub fn recovery_config(mut self, config: RecoveryConfig) -> Self {
        self.recovery_config = Some(config);
        self
    }

    /// Override the built-in askama template engine.
    pub fn template_engine(mut self, engine: Arc<dyn TemplateEngine>) -> Self {
        self.engine = Some(engine);
        self
    }

    pub fn user_repository(mut self, users: Arc<dyn UserRepository>) -> Self {
        self.users = Some(users);
        self
    }

    pub fn url_builder(mut self, urls: Arc<dyn UrlBuilder>) -> Self {
        self.urls = Some(urls);
        self
    }

    pub fn localizer(mut self, localizer: Arc<dyn Localizer>) -> Self {
        self.localizer = Some(localizer);
        self
    }

    /// Register a pre-send hook for recovery mail. Hooks run in registration
    /// order.
    pub fn recovery_hook(mut self, hook: Arc<dyn Hook<SendRecoveryEmail>>) -> Self {
        self.hooks.push(hook);
        self
    }

    pub fn build(self) -> Result<Vigil, Error> {
        let mailer_config = self.mailer_config.unwrap_or_default();
        let recovery_config = self.recovery_config.unwrap_or_default();

        let users = self
            .users
            .ok_or_else(|| ConfigError::MissingField("user_repository".to_string()))?;
        let urls = self
            .urls
            .ok_or_else(|| ConfigError::MissingField("url_builder".to_string()))?;
        let localizer = self
            .localizer
            .ok_or_else(|| ConfigError::MissingField("localizer".to_string()))?;

        let transport: Arc<dyn Mailer> = Arc::from(mailer_config.build_transport()?);
        let engine = self
            .engine
            .unwrap_or_else(|| Arc::new(AskamaTemplateEngine::new()));

        let login_notifications = LoginNotificationService::new(
            transport.clone(),
            engine.clone(),
            mailer_config.get_from_address(),
        );

        let mut recovery = RecoveryService::new(
            recovery_config,
            transport,
            engine,
            users,
            urls,
            localizer,
        );
        for hook in self.hooks {
            recovery.register_hook(hook);
        }

        Ok(Vigil {
            login_notifications,
            recovery,
        })
    }
}

pub mod prelude {
    pub use crate::{
        Email, Hook, HookChain, LoginAlertConfig, LoginContext, LoginUser, Localizer, Mailer,
        MailerConfig, RecoveryConfig, SendRecoveryEmail, UrlBuilder, UserInformation,
        UserRepository, Vigil, VigilBuilder, WarningMode,
    };
}
